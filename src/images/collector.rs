//! Copies images into a staging directory under collision-free names.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{Error, Result};

/// How a collected image is named inside the staging directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingStrategy {
    /// `<stem>_<uuid><.ext>`. Safe when several writers share a directory.
    #[default]
    Token,
    /// `<stem><.ext>`, then `<stem>_2<.ext>`, `<stem>_3<.ext>`, ...
    ///
    /// The directory is checked and then written, so two writers can pick
    /// the same name. Only use from a single thread.
    Counter,
}

/// An image copied into the staging directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedImage {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// File name assigned inside the staging directory.
    pub name: String,
}

/// Handle on the directory collected images are copied into.
///
/// The directory is created lazily by the first [`StagingDir::collect`]
/// call and then reused for every later image.
#[derive(Debug, Clone)]
pub struct StagingDir {
    dir: PathBuf,
    naming: NamingStrategy,
}

impl StagingDir {
    pub fn new(dir: impl Into<PathBuf>, naming: NamingStrategy) -> Self {
        Self {
            dir: dir.into(),
            naming,
        }
    }

    /// A staging directory named `img_<uuid>` under `parent`, using token
    /// naming.
    pub fn unique_in(parent: &Path) -> Self {
        Self::new(
            parent.join(format!("img_{}", Uuid::new_v4())),
            NamingStrategy::Token,
        )
    }

    /// The same directory with a different naming strategy.
    pub fn with_naming(self, naming: NamingStrategy) -> Self {
        Self { naming, ..self }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn naming(&self) -> NamingStrategy {
        self.naming
    }

    /// Copy `source` into the staging directory under a name that did not
    /// exist there when it was assigned. The source is left untouched.
    pub fn collect(&self, source: &Path) -> Result<CollectedImage> {
        fs::create_dir_all(&self.dir).map_err(|e| Error::Collect {
            src: source.to_path_buf(),
            dst: self.dir.clone(),
            source: e,
        })?;

        let name = self.assign_name(source)?;
        let destination = self.dir.join(&name);

        fs::copy(source, &destination).map_err(|e| Error::Collect {
            src: source.to_path_buf(),
            dst: destination.clone(),
            source: e,
        })?;
        debug!(
            "Collected image {} as {}",
            source.display(),
            destination.display()
        );

        Ok(CollectedImage {
            source: source.to_path_buf(),
            destination,
            name,
        })
    }

    fn assign_name(&self, source: &Path) -> Result<String> {
        let stem = source
            .file_stem()
            .map(OsStr::to_string_lossy)
            .unwrap_or_else(|| "image".into());
        let ext = source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        match self.naming {
            NamingStrategy::Token => loop {
                let name = format!("{}_{}{}", stem, Uuid::new_v4(), ext);
                if !self.dir.join(&name).exists() {
                    return Ok(name);
                }
            },
            NamingStrategy::Counter => {
                let mut name = format!("{}{}", stem, ext);
                let mut counter: u32 = 1;
                while self.dir.join(&name).exists() {
                    counter = counter.checked_add(1).ok_or_else(|| Error::Collect {
                        src: source.to_path_buf(),
                        dst: self.dir.clone(),
                        source: std::io::Error::new(
                            std::io::ErrorKind::AlreadyExists,
                            "no free file name left",
                        ),
                    })?;
                    name = format!("{}_{}{}", stem, counter, ext);
                }
                Ok(name)
            }
        }
    }
}
