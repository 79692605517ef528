//! JSONL output for simulation results.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::types::MatchRecord;

pub struct OutputWriter {
    writer: Box<dyn Write>,
    path: Option<PathBuf>,
}

impl OutputWriter {
    /// `-` writes to stdout.
    pub fn new(output: &str) -> io::Result<Self> {
        if output == "-" {
            return Ok(Self {
                writer: Box::new(BufWriter::new(io::stdout())),
                path: None,
            });
        }
        let path = Path::new(output);
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        Ok(Self {
            writer: Box::new(BufWriter::new(File::create(path)?)),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn write_match(&mut self, record: &MatchRecord) -> Result<(), Box<dyn std::error::Error>> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
