pub mod generation;
pub mod identity;
pub mod records;
pub mod storage;
pub mod transcription;
