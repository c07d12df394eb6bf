pub mod analysis;
pub mod auth;
pub mod ingest;
pub mod jobs;
