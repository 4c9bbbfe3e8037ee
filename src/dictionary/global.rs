//! Process-wide dictionary
//!
//! The dictionary is loaded once and then shared read-only by every search. One of the
//! `init_*` functions must succeed before [`get`] returns anything; the first
//! successful initialization wins and later calls return that same instance.

use super::{Dictionary, DictionaryError, InitError};
use crate::wordlists::DICTIONARY_GRAPH;
use once_cell::sync::OnceCell;
use std::path::Path;
use std::time::Instant;

static DICTIONARY: OnceCell<Dictionary> = OnceCell::new();

/// Initialize from the dictionary bundled with the crate
///
/// # Errors
/// Returns a `DictionaryError` if the bundled graph fails to parse.
pub fn init_embedded() -> Result<&'static Dictionary, DictionaryError> {
    DICTIONARY.get_or_try_init(|| load("embedded", || Dictionary::parse(DICTIONARY_GRAPH)))
}

/// Initialize from a serialized dictionary file
///
/// # Errors
/// Returns a `DictionaryError` if the file cannot be read or parsed.
pub fn init_from_path<P: AsRef<Path>>(path: P) -> Result<&'static Dictionary, DictionaryError> {
    let path = path.as_ref();
    DICTIONARY.get_or_try_init(|| load(&path.display().to_string(), || Dictionary::read(path)))
}

/// Install an already built dictionary
///
/// # Errors
/// Returns the dictionary back inside an `InitError` if one is already installed.
pub fn install(dictionary: Dictionary) -> Result<&'static Dictionary, InitError> {
    let installed = DICTIONARY
        .try_insert(dictionary)
        .map_err(|(_, dictionary)| InitError {
            dictionary: Box::new(dictionary),
        })?;
    tracing::debug!(nodes = installed.node_count(), "installed dictionary");
    Ok(installed)
}

/// The dictionary, if initialized
#[must_use]
pub fn get() -> Option<&'static Dictionary> {
    DICTIONARY.get()
}

fn load(
    source: &str,
    parse: impl FnOnce() -> Result<Dictionary, DictionaryError>,
) -> Result<Dictionary, DictionaryError> {
    let start = Instant::now();
    let dictionary = parse()?;
    tracing::info!(
        source,
        nodes = dictionary.node_count(),
        elapsed_ms = start.elapsed().as_millis(),
        "loaded dictionary"
    );
    Ok(dictionary)
}
