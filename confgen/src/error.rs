use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Failures of the collaborators around the generator.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access {}", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", path.display())]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    ParseManifest {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("no Cargo.toml with a [package] name found for {}", path.display())]
    NoPackage { path: PathBuf },

    #[error("arguments belong to more than one crate: {}", names.join(", "))]
    MultiplePackages { names: Vec<String> },

    #[error("failed to run rustfmt on {}", path.display())]
    Formatter {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rustfmt failed on {} ({status})", path.display())]
    FormatterStatus { path: PathBuf, status: ExitStatus },
}
