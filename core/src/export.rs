use std::fs;
use std::path::{Path, PathBuf};

use iotscan_common::error::ExportError;
use tracing::debug;

use crate::report::Artifact;

/// Defines the contract for handing a rendered report to its destination.
pub trait ReportSink {
    /// Stores `artifact` and returns where it ended up.
    fn save(&self, artifact: &Artifact) -> Result<PathBuf, ExportError>;
}

/// Writes artifacts into a directory under their own file names.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReportSink for DirectorySink {
    fn save(&self, artifact: &Artifact) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(artifact.file_name);
        fs::write(&path, &artifact.bytes).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(
            "Wrote {} bytes of {} to {}",
            artifact.bytes.len(),
            artifact.mime_type,
            path.display()
        );
        Ok(path)
    }
}
