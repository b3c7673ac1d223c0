//! Resolve the crate that the generated file belongs to.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::debug;

use crate::error::Error;

const MANIFEST: &str = "Cargo.toml";

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<PackageTable>,
}

#[derive(Debug, Deserialize)]
struct PackageTable {
    name: String,
}

/// Name of the single crate containing every path.
///
/// Each path resolves to the nearest `Cargo.toml` above it that has a
/// `[package]` table; workspace-only manifests are skipped.
pub fn resolve(paths: &[PathBuf]) -> Result<String, Error> {
    let mut names = BTreeSet::new();
    for path in paths {
        let name = package_name(path)?;
        debug!(path = %path.display(), package = %name, "resolved crate");
        names.insert(name);
    }

    let mut names: Vec<String> = names.into_iter().collect();
    match names.len() {
        1 => Ok(names.remove(0)),
        0 => Err(Error::NoPackage {
            path: PathBuf::from("."),
        }),
        _ => Err(Error::MultiplePackages { names }),
    }
}

/// Directory the generated file goes to when no output is given.
///
/// A single directory argument is used as is; otherwise the parent of the
/// first argument.
pub fn destination_dir(paths: &[PathBuf]) -> PathBuf {
    match paths {
        [] => PathBuf::from("."),
        [single] if single.is_dir() => single.clone(),
        [first, ..] => match first.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    }
}

fn package_name(path: &Path) -> Result<String, Error> {
    let path = path.canonicalize().map_err(|source| Error::InvalidPath {
        path: path.to_path_buf(),
        source,
    })?;
    let start = if path.is_dir() {
        path.as_path()
    } else {
        path.parent().unwrap_or(&path)
    };

    for dir in start.ancestors() {
        let manifest = dir.join(MANIFEST);
        if !manifest.is_file() {
            continue;
        }
        if let Some(name) = read_package_name(&manifest)? {
            return Ok(name);
        }
    }

    Err(Error::NoPackage { path })
}

fn read_package_name(manifest: &Path) -> Result<Option<String>, Error> {
    let content = fs::read_to_string(manifest).map_err(|source| Error::ReadManifest {
        path: manifest.to_path_buf(),
        source,
    })?;
    let parsed: Manifest = toml::from_str(&content).map_err(|source| Error::ParseManifest {
        path: manifest.to_path_buf(),
        source: Box::new(source),
    })?;
    Ok(parsed.package.map(|package| package.name))
}
