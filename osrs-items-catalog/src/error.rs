use thiserror::Error;

/// Errors produced while parsing item id text such as `"1704-1706, 11976"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    /// A part was empty or not a valid unsigned integer
    #[error("Invalid item id '{0}'")]
    InvalidNumber(String),

    /// A range whose start is greater than its end
    #[error("Reversed id range {start}-{end}")]
    ReversedRange { start: u32, end: u32 },

    /// A range covering more ids than any wiki row plausibly does
    #[error("Id range {start}-{end} is too large")]
    RangeTooLarge { start: u32, end: u32 },
}

impl IdParseError {
    pub fn invalid_number(text: impl Into<String>) -> Self {
        Self::InvalidNumber(text.into())
    }
}

/// Reasons a single raw entry is rejected during dataset build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error(transparent)]
    Id(#[from] IdParseError),

    /// The name is blank, or nothing precedes its `#` delimiter
    #[error("Empty base name in '{0}'")]
    EmptyName(String),
}

/// Errors that can occur while reading or writing the item dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{0}' in raw entry table")]
    MissingColumn(String),
}

impl DatasetError {
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn(name.into())
    }
}

/// Errors that can occur while reading or writing `settings.toml`.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
