pub mod aggregate;
pub mod groq;
pub mod lexical;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod report;
pub mod types;

pub use aggregate::*;
pub use groq::*;
pub use lexical::*;
pub use orchestrator::*;
pub use parser::*;
pub use prompt::*;
pub use report::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No API credential provided")]
    MissingCredential,

    #[error("Extraction service is unreachable at {0}")]
    ServiceUnreachable(String),

    #[error("Extraction service returned error (status {status}): {body}")]
    ServiceStatus { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response decoding error: {0}")]
    ResponseDecoding(String),

    #[error("Malformed extraction response: {0}")]
    MalformedResponse(String),

    #[error("Extraction violates schema: {0}")]
    SchemaViolation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
