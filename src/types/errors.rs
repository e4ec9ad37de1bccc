use thiserror::Error;

// === StoreError ===

/// Errors raised by the key-value persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("Store database error: {0}")]
    Database(String),
    /// Failed to serialize a value before writing it.
    #[error("Store serialization error: {0}")]
    Serialization(String),
}

// === LinkError ===

/// Errors related to link operations.
#[derive(Debug, Error)]
pub enum LinkError {
    /// A required field was empty on add.
    #[error("{0}")]
    Validation(String),
    /// Imported content is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Parse(String),
    /// Imported root value is not a list.
    #[error("Invalid file format")]
    InvalidFormat,
    /// No imported element has both `name` and `url`.
    #[error("No valid links found in the file")]
    NoValidLinks,
    /// Export was requested on an empty list.
    #[error("No links to export")]
    NothingToExport,
    /// The underlying store failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
    /// Reading or writing a file failed.
    #[error("Error reading file: {0}")]
    Io(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
