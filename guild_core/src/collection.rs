//! Conversions between record arrays and id-keyed maps

use std::collections::HashMap;
use thiserror::Error;

/// An element passed to [`index_by`] produced no value for the key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("element at index {index} has no value for the key field")]
pub struct InvalidKeyError {
    pub index: usize,
}

/// Index records by the key `key_of` extracts from each of them.
///
/// Later duplicates overwrite earlier ones (last write wins); rejecting
/// duplicates is left to whichever registry consumes the map. An element for
/// which `key_of` returns `None` aborts the conversion with
/// [`InvalidKeyError`] rather than inserting under a fabricated key.
pub fn index_by<T>(
    items: impl IntoIterator<Item = T>,
    key_of: impl Fn(&T) -> Option<&str>,
) -> Result<HashMap<String, T>, InvalidKeyError> {
    let mut dictionary = HashMap::new();
    for (index, item) in items.into_iter().enumerate() {
        let key = key_of(&item).ok_or(InvalidKeyError { index })?.to_string();
        dictionary.insert(key, item);
    }
    Ok(dictionary)
}
