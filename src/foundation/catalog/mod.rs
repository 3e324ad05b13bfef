mod ingest_error;
mod models;
mod operations;

pub use ingest_error::IngestError;
pub use models::*;
pub use operations::*;
