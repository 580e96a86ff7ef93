pub mod analyzer;
pub mod ingest;
pub mod output;
pub mod types;
