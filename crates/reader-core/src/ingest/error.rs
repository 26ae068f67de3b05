use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF parse error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("PDF requires a password or is encrypted")]
    Encrypted,
    #[error("PDF has no pages")]
    Empty,
    #[error("document contains no readable text")]
    NoText,
    #[error("unsupported document type: {0}")]
    Unsupported(String),
}
