use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::display::Display;
use crate::environment::Environment;
use crate::runtime::Runtime;

use super::paths::{absolutize, default_root};

/// Settings resolved from the command line, `SCRIPTOIDS_*` variables and defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub bin_dir: PathBuf,
    pub pkg_dir: PathBuf,
    pub display: Display,
}

impl Config {
    /// Missing directories default to `~/.scriptoids/bin` and `~/.scriptoids/pkg`.
    #[tracing::instrument(skip(runtime, display))]
    pub fn new<R: Runtime>(
        runtime: &R,
        bin_dir: Option<PathBuf>,
        pkg_dir: Option<PathBuf>,
        display: Display,
    ) -> Result<Self> {
        let bin_dir = match bin_dir {
            Some(path) => absolutize(runtime, path)?,
            None => default_root(runtime)?.join("bin"),
        };
        let pkg_dir = match pkg_dir {
            Some(path) => absolutize(runtime, path)?,
            None => default_root(runtime)?.join("pkg"),
        };
        debug!("Using bin dir {:?}, package dir {:?}", bin_dir, pkg_dir);

        Ok(Self {
            bin_dir,
            pkg_dir,
            display,
        })
    }

    pub fn environment<'a, R: Runtime>(&self, runtime: &'a R) -> Environment<'a, R> {
        Environment::new(runtime, self.bin_dir.clone(), self.pkg_dir.clone())
    }

    #[cfg(test)]
    pub fn for_test(root: PathBuf) -> Self {
        Self {
            bin_dir: root.join("bin"),
            pkg_dir: root.join("pkg"),
            display: Display::new(true, true),
        }
    }
}
