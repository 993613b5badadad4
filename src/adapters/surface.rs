use crate::domain::ports::{PrintSurface, SurfaceProvider};
use crate::utils::error::{ArchiveError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

pub const REPORT_FILENAME: &str = "archive_report.html";

/// Print surface backed by a file: the rendered page is written to
/// `<out>/archive_report.html` and "printing" hands the path to the user. An
/// output directory that cannot be created maps to `SurfaceUnavailable`.
#[derive(Debug, Clone)]
pub struct FileSurfaceProvider {
    output_dir: PathBuf,
}

impl FileSurfaceProvider {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl SurfaceProvider for FileSurfaceProvider {
    async fn open_blank(&self) -> Result<Box<dyn PrintSurface>> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| ArchiveError::SurfaceUnavailable {
                message: format!("cannot prepare {}: {}", self.output_dir.display(), e),
            })?;

        Ok(Box::new(FilePrintSurface {
            path: self.output_dir.join(REPORT_FILENAME),
            written: false,
        }))
    }
}

pub struct FilePrintSurface {
    path: PathBuf,
    written: bool,
}

#[async_trait]
impl PrintSurface for FilePrintSurface {
    async fn write_content(&mut self, document: &str) -> Result<()> {
        tokio::fs::write(&self.path, document).await?;
        self.written = true;
        Ok(())
    }

    async fn wait_ready(&mut self) -> Result<()> {
        // Ready means a completed write; an empty surface must not print.
        if self.written {
            Ok(())
        } else {
            Err(ArchiveError::SurfaceUnavailable {
                message: "surface has no content to print".to_string(),
            })
        }
    }

    async fn trigger_print(&mut self) -> Result<()> {
        tracing::info!("report ready for printing: {}", self.path.display());
        Ok(())
    }
}
