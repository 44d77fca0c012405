pub mod config;
pub mod error;
pub mod filesystem;
pub mod logging;
pub mod ui;
pub mod utils;

pub use error::{Error, InvalidPathReason, Result};
pub use filesystem::{AgeBreakdown, FileMetadata, FileMetadataHandler};
pub use utils::units::{SizeReading, SizeUnit, DEFAULT_UNIT};
