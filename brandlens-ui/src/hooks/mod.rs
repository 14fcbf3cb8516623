mod persistence;

pub use persistence::{load_settings, save_settings, PersistedSettings};
