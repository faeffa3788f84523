/// Command-line parsing and batch file processing
pub mod cli;
/// Constants and validated shred geometry
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Terminal progress display
pub mod progress;
