//! The working environment: a package directory holding installed packages and
//! a bin directory (on the user's `PATH`) where their entry points get linked.
//!
//! A package is *installed* when `<package_dir>/<name>/scriptoid.toml` exists,
//! *valid* when its name and entry point are set and the entry point exists,
//! and *linked* when anything named `<name>` sits in the bin directory. The
//! three are checked independently of each other.

mod error;

pub use error::{EnvironmentError, ErrorKind};

use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::package::{MANIFEST_FILENAME, Package};
use crate::runtime::{Runtime, is_path_under, is_single_component, normalize_path};

/// What currently occupies a package's name in the bin directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// Nothing with the package's name exists in the bin directory.
    Unlinked,
    /// A symlink to this package's entry point.
    Linked,
    /// Some other file, or a symlink pointing elsewhere.
    Foreign,
}

impl LinkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LinkStatus::Unlinked => "No",
            LinkStatus::Linked => "Yes",
            LinkStatus::Foreign => "Foreign",
        }
    }
}

pub struct Environment<'a, R: Runtime> {
    runtime: &'a R,
    bin_directory: PathBuf,
    package_directory: PathBuf,
}

impl<'a, R: Runtime> Environment<'a, R> {
    /// Neither directory has to exist yet.
    pub fn new(
        runtime: &'a R,
        bin_directory: impl Into<PathBuf>,
        package_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runtime,
            bin_directory: bin_directory.into(),
            package_directory: package_directory.into(),
        }
    }

    pub fn bin_directory(&self) -> &Path {
        &self.bin_directory
    }

    pub fn package_directory(&self) -> &Path {
        &self.package_directory
    }

    /// Returns: `<package_dir>/<name>`
    pub fn package_path(&self, name: &str) -> PathBuf {
        self.package_directory.join(name)
    }

    /// Returns: `<package_dir>/<name>/scriptoid.toml`
    pub fn manifest_path(&self, name: &str) -> PathBuf {
        self.package_path(name).join(MANIFEST_FILENAME)
    }

    /// Returns: `<package_dir>/<name>/<entrypoint>`
    pub fn entry_point_path(&self, package: &Package) -> PathBuf {
        self.package_path(&package.name).join(&package.entrypoint)
    }

    /// Returns: `<bin_dir>/<name>`
    pub fn link_path(&self, package: &Package) -> PathBuf {
        self.bin_directory.join(&package.name)
    }

    /// Look up an installed package by the name of its directory.
    ///
    /// Succeeds whenever the manifest exists and decodes, even if its name or
    /// entry point are blank. Use [`is_package_valid`](Self::is_package_valid)
    /// to check the result.
    #[tracing::instrument(skip(self))]
    pub fn get_installed_package_by_name(&self, name: &str) -> Result<Package, EnvironmentError> {
        check_name(name)?;

        let manifest = self.manifest_path(name);
        if !self.runtime.exists(&manifest) {
            debug!("No manifest at {:?}", manifest);
            return Err(EnvironmentError::NotFound {
                name: name.to_string(),
                path: manifest,
            });
        }

        let content = self.runtime.read_to_string(&manifest).map_err(|e| {
            let vanished = e
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound);
            if vanished {
                EnvironmentError::NotFound {
                    name: name.to_string(),
                    path: manifest.clone(),
                }
            } else {
                EnvironmentError::io(&manifest, e)
            }
        })?;

        Package::from_manifest(&content).map_err(|source| EnvironmentError::Malformed {
            path: manifest,
            source,
        })
    }

    /// Load every installed package, sorted by directory name.
    ///
    /// Directories without a manifest are skipped silently, directories with an
    /// unreadable or malformed one are skipped with a warning. Fails only when
    /// the package directory itself cannot be listed.
    #[tracing::instrument(skip(self))]
    pub fn get_all_installed_packages(&self) -> Result<Vec<Package>, EnvironmentError> {
        let entries = self
            .runtime
            .read_dir(&self.package_directory)
            .map_err(|e| EnvironmentError::io(&self.package_directory, e))?;

        let mut names: Vec<String> = entries
            .iter()
            .filter(|path| self.runtime.is_dir(path))
            .filter_map(|path| match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => Some(name.to_string()),
                None => {
                    debug!("Skipping non UTF-8 directory {:?}", path);
                    None
                }
            })
            .collect();
        names.sort();

        let mut packages = Vec::with_capacity(names.len());
        for name in names {
            match self.get_installed_package_by_name(&name) {
                Ok(package) => packages.push(package),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("Directory {} has no manifest, skipping", name);
                }
                Err(e) => {
                    warn!("Skipping package directory {}: {}", name, e);
                }
            }
        }

        debug!("Found {} package(s)", packages.len());
        Ok(packages)
    }

    /// Check that a package has a name and entry point, and that the entry point
    /// exists inside the package's directory.
    ///
    /// Only ever returns `Ok(true)`; every failed check is reported as an error.
    #[tracing::instrument(skip(self))]
    pub fn is_package_valid(&self, package: &Package) -> Result<bool, EnvironmentError> {
        if package.name.is_empty() || package.entrypoint.is_empty() {
            return Err(EnvironmentError::EmptyIdentifiers);
        }
        check_name(&package.name)?;

        let package_dir = self.package_path(&package.name);
        let entry_point = self.entry_point_path(package);

        let contained = !Path::new(&package.entrypoint).is_absolute()
            && is_path_under(&entry_point, &package_dir);
        if !contained || !self.runtime.exists(&entry_point) {
            return Err(EnvironmentError::InvalidEntryPoint {
                name: package.name.clone(),
                path: entry_point,
            });
        }

        Ok(true)
    }

    /// True if anything named after the package exists in the bin directory.
    ///
    /// This does not check where that entry points: an unrelated file or a
    /// dangling symlink with the same name counts as linked.
    #[tracing::instrument(skip(self))]
    pub fn is_package_linked(&self, package: &Package) -> bool {
        if !is_single_component(&package.name) {
            return false;
        }

        let link = self.link_path(package);
        self.runtime.is_symlink(&link) || self.runtime.exists(&link)
    }

    /// Like [`is_package_linked`](Self::is_package_linked), but tells a link to
    /// this package's entry point apart from whatever else may hold the name.
    #[tracing::instrument(skip(self))]
    pub fn link_status(&self, package: &Package) -> LinkStatus {
        if !self.is_package_linked(package) {
            return LinkStatus::Unlinked;
        }

        let link = self.link_path(package);
        if !self.runtime.is_symlink(&link) {
            return LinkStatus::Foreign;
        }

        match self.runtime.read_link(&link) {
            Ok(target) => {
                let resolved = if target.is_relative() {
                    self.bin_directory.join(target)
                } else {
                    target
                };
                if normalize_path(&resolved) == normalize_path(&self.entry_point_path(package)) {
                    LinkStatus::Linked
                } else {
                    LinkStatus::Foreign
                }
            }
            Err(e) => {
                debug!("Cannot read link {:?}: {}", link, e);
                LinkStatus::Foreign
            }
        }
    }

    /// Symlink the package's entry point into the bin directory.
    ///
    /// The package must be valid and not yet linked. A failed validity check is
    /// reported as `InvalidState` with the validity error as its source.
    #[tracing::instrument(skip(self))]
    pub fn link_package(&self, package: &Package) -> Result<(), EnvironmentError> {
        match self.is_package_valid(package) {
            Ok(true) => {}
            Ok(false) => {
                return Err(EnvironmentError::InvalidState {
                    name: package.name.clone(),
                    reason: None,
                });
            }
            Err(e) => {
                return Err(EnvironmentError::InvalidState {
                    name: package.name.clone(),
                    reason: Some(Box::new(e)),
                });
            }
        }

        if self.is_package_linked(package) {
            return Err(EnvironmentError::AlreadyLinked {
                name: package.name.clone(),
            });
        }

        let entry_point = self.entry_point_path(package);
        let link = self.link_path(package);
        self.runtime
            .symlink(&entry_point, &link)
            .map_err(|e| EnvironmentError::io(&link, e))?;

        info!("Linked {:?} -> {:?}", link, entry_point);
        Ok(())
    }

    /// Remove whatever is named after the package in the bin directory.
    ///
    /// The package must currently be linked. The entry is removed even if it is
    /// not a link to this package. A directory at that name is only removed
    /// when empty; otherwise this fails with an I/O error and nothing changes.
    #[tracing::instrument(skip(self))]
    pub fn unlink_package(&self, package: &Package) -> Result<(), EnvironmentError> {
        check_name(&package.name)?;

        if !self.is_package_linked(package) {
            return Err(EnvironmentError::NotLinked {
                name: package.name.clone(),
            });
        }

        let link = self.link_path(package);
        let removed = if self.runtime.is_symlink(&link) {
            self.runtime.remove_symlink(&link)
        } else if self.runtime.is_dir(&link) {
            self.runtime.remove_dir(&link)
        } else {
            self.runtime.remove_file(&link)
        };
        removed.map_err(|e| EnvironmentError::io(&link, e))?;

        info!("Removed {:?}", link);
        Ok(())
    }
}

/// Package names are used as a single path segment under both directories.
fn check_name(name: &str) -> Result<(), EnvironmentError> {
    if is_single_component(name) {
        Ok(())
    } else {
        Err(EnvironmentError::InvalidName {
            name: name.to_string(),
        })
    }
}
