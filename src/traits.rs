use std::error::Error;

/// A durable key-value storage, where both keys and values are strings
///
/// This is the same contract as the `localStorage` of a web browser: a value is always read and written as a whole.
pub trait KeyValueStorage {
    /// Returns the value stored at `key`, or `None` in case nothing has been stored there yet
    fn get_item(&self, key: &str) -> Result<Option<String>, Box<dyn Error>>;

    /// Overwrite the value stored at `key`
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>>;
}
