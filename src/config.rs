//! Support for application configuration options

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The name shown in headers.
/// Feel free to override it when initing this library.
pub static APP_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Ramadan Planner".to_string())));

/// The line shown under the name, in the daily view.
/// Feel free to override it when initing this library.
pub static APP_TAGLINE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Be Ready For Ramadan".to_string())));

/// The folder a [`FileStorage`](crate::storage::FileStorage) writes into when none is given explicitly.
/// This defaults to a `ramadan-planner` folder inside the user data folder (or the current folder if there is none).
pub static DATA_FOLDER: Lazy<Arc<Mutex<PathBuf>>> = Lazy::new(|| {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    Arc::new(Mutex::new(base.join("ramadan-planner")))
});
