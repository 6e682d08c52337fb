use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Result destinations
// ---------------------------------------------------------------------------

/// Somewhere a single computed value can be persisted.
///
/// Each write replaces whatever the sink held before.
pub trait ResultSink {
    fn write_result(&mut self, text: &str) -> Result<()>;
}

/// Writes the value to a file, truncating any prior content.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for FileSink {
    fn write_result(&mut self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text).map_err(|e| Error::file(&self.path, e))?;
        info!("wrote result to {}", self.path.display());
        Ok(())
    }
}

/// Keeps the last written value in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub contents: Option<String>,
}

impl ResultSink for MemorySink {
    fn write_result(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sink_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.txt");
        std::fs::write(&path, "a much longer previous result").unwrap();

        let mut sink = FileSink::new(&path);
        sink.write_result("21").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "21");

        sink.write_result("12").unwrap();
        assert_eq!(std::fs::read_to_string(sink.path()).unwrap(), "12");
    }

    #[test]
    fn file_sink_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path().join("missing").join("result.txt"));
        assert!(matches!(sink.write_result("1"), Err(Error::File { .. })));
    }

    #[test]
    fn memory_sink_keeps_last_value() {
        let mut sink = MemorySink::default();
        sink.write_result("1").unwrap();
        sink.write_result("2").unwrap();
        assert_eq!(sink.contents.as_deref(), Some("2"));
    }
}
