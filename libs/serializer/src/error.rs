use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerializerError {
    /// The output file or directory could not be created or written.
    #[error("Failed to write document: {0}")]
    DocumentWrite(#[from] std::io::Error),

    /// The PDF backend rejected the document.
    #[error("Failed to render PDF: {0}")]
    Pdf(String),

    /// The XML writer produced output that is not valid UTF-8.
    #[error("Failed to render XML: {0}")]
    Xml(String),

    /// The record's attributes could not be enumerated.
    #[error("Record cannot be introspected: {0}")]
    Introspection(String),
}

pub type SerializerResult<T> = Result<T, SerializerError>;
