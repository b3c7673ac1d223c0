//! Where the generated code ends up.

use std::{
    fs,
    io::Write,
    path::Path,
    process::{Command, Stdio},
};

use confgen_core::{File, WriteResult};
use eyre::{Result, WrapErr};
use tracing::{debug, info};

use crate::error::Error;

/// Writes generated code to disk and formats it with `rustfmt`.
#[derive(Debug, Clone, Copy)]
pub struct Sink {
    format: bool,
}

impl Sink {
    pub fn new(format: bool) -> Self {
        Self { format }
    }

    /// Write `code` to `path`, then format it in place.
    ///
    /// If formatting fails the unformatted file is left on disk.
    pub fn write_file(&self, path: &Path, code: &[u8]) -> Result<WriteResult> {
        let result = File::new(path, code).write()?;
        info!(path = %path.display(), ?result, "wrote generated config");

        if self.format {
            rustfmt(path).wrap_err("Failed to format generated code")?;
        }
        Ok(result)
    }

    /// Format `code` through a temporary file and copy the result to `out`.
    pub fn write_to(&self, code: &[u8], out: &mut impl Write) -> Result<()> {
        let temp = tempfile::Builder::new()
            .prefix("confgen")
            .suffix(".rs")
            .tempfile()
            .wrap_err("Failed to create temp file")?;

        self.write_file(temp.path(), code)?;
        let formatted = fs::read(temp.path())
            .wrap_err_with(|| format!("Failed to read {}", temp.path().display()))?;
        out.write_all(&formatted)
            .and_then(|()| out.flush())
            .wrap_err("Failed to write generated code")?;
        Ok(())
    }
}

fn rustfmt(path: &Path) -> Result<(), Error> {
    debug!(path = %path.display(), "running rustfmt");
    let status = Command::new("rustfmt")
        .args(["--edition", "2021"])
        .arg(path)
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| Error::Formatter {
            path: path.to_path_buf(),
            source,
        })?;

    if !status.success() {
        return Err(Error::FormatterStatus {
            path: path.to_path_buf(),
            status,
        });
    }
    Ok(())
}
