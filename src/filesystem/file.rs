// src/filesystem/file.rs
use super::{path, AgeBreakdown};
use crate::error::{Error, Result};
use crate::utils::units::{usable_unit, Advisory, SizeReading};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::ffi::OsStr;
use std::fs::Metadata;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncReadExt;

const CHUNK_SIZE: usize = 64 * 1024;

/// Read-only metadata queries against a single file.
///
/// The path is validated lexically when the handler is built. Every accessor
/// then re-checks that the file exists before querying it, so a handler can
/// outlive the file it names and report `NotFound` afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadataHandler {
    file_path: String,
}

impl FileMetadataHandler {
    pub fn new(file_path: impl AsRef<OsStr>) -> Result<Self> {
        let file_path = path::validate(file_path.as_ref())?;
        Ok(FileMetadataHandler { file_path: file_path.to_string() })
    }

    pub fn file_path(&self) -> &Path {
        Path::new(&self.file_path)
    }

    pub async fn get_file_creation_time(&self) -> Result<DateTime<Utc>> {
        let metadata = self.stat().await?;
        let created = metadata.created().map_err(|e| {
            tracing::warn!(path = %self.file_path, error = %e, "birth time unavailable");
            Error::stat(&self.file_path, e)
        })?;
        Ok(DateTime::<Utc>::from(created))
    }

    pub async fn get_file_extension(&self) -> Result<String> {
        self.ensure_exists().await?;
        self.file_path()
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .ok_or_else(|| Error::NoExtension(self.file_path().to_path_buf()))
    }

    pub async fn get_file_name(&self) -> Result<String> {
        self.ensure_exists().await?;
        self.file_path()
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::NoFileName(self.file_path().to_path_buf()))
    }

    /// Size of the file in `unit`.
    ///
    /// A missing, blank or unknown unit is not an error: it resolves to an
    /// advisory reading, as does an empty file. Pass `Some(DEFAULT_UNIT)`
    /// for the plain byte count.
    pub async fn get_file_size(&self, unit: Option<&str>) -> Result<SizeReading> {
        let Some(unit) = usable_unit(unit) else {
            return Ok(SizeReading::Advisory(Advisory::MissingUnit));
        };
        let metadata = self.stat().await?;
        Ok(SizeReading::from_bytes(metadata.len(), unit))
    }

    pub async fn get_last_modified_date(&self) -> Result<DateTime<Utc>> {
        let metadata = self.stat().await?;
        let modified = metadata.modified().map_err(|e| Error::stat(&self.file_path, e))?;
        Ok(DateTime::<Utc>::from(modified))
    }

    pub async fn get_file_age(&self) -> Result<AgeBreakdown> {
        let created = self
            .get_file_creation_time()
            .await
            .map_err(|e| Error::AgeComputation(Box::new(e)))?;
        Ok(AgeBreakdown::between(created, Utc::now()))
    }

    /// Lowercase hex SHA-256 of the file contents, read in fixed-size chunks.
    pub async fn compute_checksum(&self) -> Result<String> {
        self.ensure_exists().await?;

        let mut file = fs::File::open(&self.file_path)
            .await
            .map_err(|e| Error::read(&self.file_path, e))?;
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut total = 0u64;

        loop {
            let read = file.read(&mut buffer).await.map_err(|e| {
                tracing::warn!(path = %self.file_path, error = %e, "checksum read failed");
                Error::read(&self.file_path, e)
            })?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
            total += read as u64;
        }

        tracing::debug!(path = %self.file_path, bytes = total, "checksum computed");
        Ok(format!("{:x}", hasher.finalize()))
    }

    async fn ensure_exists(&self) -> Result<()> {
        match fs::try_exists(&self.file_path).await {
            Ok(true) => Ok(()),
            _ => {
                tracing::debug!(path = %self.file_path, "file not accessible");
                Err(Error::NotFound(self.file_path().to_path_buf()))
            }
        }
    }

    async fn stat(&self) -> Result<Metadata> {
        self.ensure_exists().await?;
        fs::metadata(&self.file_path).await.map_err(|e| {
            tracing::warn!(path = %self.file_path, error = %e, "stat failed");
            Error::stat(&self.file_path, e)
        })
    }
}
