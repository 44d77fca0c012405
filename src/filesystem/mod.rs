// src/filesystem/mod.rs
pub mod age;
pub mod file;
pub mod path;

pub use age::AgeBreakdown;
pub use file::FileMetadataHandler;

use crate::error::{Error, Result};
use crate::utils::units::SizeReading;
use serde::Serialize;
use std::path::PathBuf;

/// Point-in-time snapshot of everything a handler can report.
///
/// Fields are gathered one after another, so a file changing mid-way can
/// yield a mixed snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct FileMetadata {
    pub path: PathBuf,
    pub name: Option<String>,
    pub extension: Option<String>,
    pub size: Option<SizeReading>,
    pub created: Option<chrono::DateTime<chrono::Utc>>,
    pub modified: Option<chrono::DateTime<chrono::Utc>>,
    pub age: Option<AgeBreakdown>,
    pub checksum: Option<String>,
}

impl FileMetadataHandler {
    /// Collects every attribute. Only a missing file fails the whole call;
    /// other failures leave their field empty.
    pub async fn metadata(&self, unit: Option<&str>, with_checksum: bool) -> Result<FileMetadata> {
        let size = optional(self.get_file_size(unit).await, "size")?;
        let checksum = if with_checksum {
            optional(self.compute_checksum().await, "checksum")?
        } else {
            None
        };

        Ok(FileMetadata {
            path: self.file_path().to_path_buf(),
            name: optional(self.get_file_name().await, "name")?,
            extension: optional(self.get_file_extension().await, "extension")?,
            size,
            created: optional(self.get_file_creation_time().await, "created")?,
            modified: optional(self.get_last_modified_date().await, "modified")?,
            age: optional(self.get_file_age().await, "age")?,
            checksum,
        })
    }
}

fn optional<T>(result: Result<T>, field: &str) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => Err(err),
        Err(Error::NoExtension(_)) => Ok(None),
        Err(err) => {
            tracing::warn!(field, error = %err, "attribute unavailable");
            Ok(None)
        }
    }
}
