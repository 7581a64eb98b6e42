pub mod batch;
pub mod cli;
pub mod convert;
pub mod depth;
pub mod error;
pub mod fixed;
pub mod image;
pub mod logging;
pub mod paths;
pub mod report;
pub mod types;

// Re-export commonly used items
pub use convert::{ConvertOptions, convert_file, convert_path};
pub use error::ConvertError;
pub use logging::setup_logging;
