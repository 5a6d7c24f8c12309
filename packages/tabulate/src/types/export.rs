//! Export formats and the payload handed to the download sink.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TabulateError;

/// Base name of every download.
pub const EXPORT_FILE_STEM: &str = "extracted_data";

/// Supported download formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Csv, ExportFormat::Json];

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Suggested download name, e.g. `extracted_data.csv`.
    pub fn file_name(self) -> String {
        format!("{}.{}", EXPORT_FILE_STEM, self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("CSV"),
            Self::Json => f.write_str("JSON"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = TabulateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(TabulateError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Serialized table plus what the sink needs to offer it as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: &'static str,
}

impl ExportPayload {
    pub(crate) fn new(format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            format,
            bytes,
            file_name: format.file_name(),
            mime_type: format.mime_type(),
        }
    }

    /// Payload as text. Both formats are UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}
