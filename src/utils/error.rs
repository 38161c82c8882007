use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Course query request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Malformed course document: {message}")]
    MalformedDocumentError { message: String },

    #[error("Unexpected seat value: {value}")]
    DataFormatError { value: String },

    #[error("No course available")]
    NoCourseAvailableError,

    #[error("Unknown field: {field}")]
    UnknownFieldError { field: String },

    #[error("Unsupported parse format: {format} (expected structured-table or json)")]
    UnsupportedFormatError { format: String },

    #[error("Export to {path} failed: {source}")]
    ExportError { path: String, source: Box<EtlError> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, EtlError>;
