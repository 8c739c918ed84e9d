use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::package::{MANIFEST_FILENAME, Package};
use crate::runtime::Runtime;

use crate::display::Display;

use super::BatchOutcome;

/// Fields for a new manifest.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Manifest file to write. A directory gets `scriptoid.toml` inside it.
    pub path: PathBuf,
    pub name: String,
    pub version: String,
    pub description: String,
    pub entrypoint: String,
    pub force: bool,
}

/// Write a new package manifest
///
/// Works on its own path only, so it needs no bin or package directory.
#[tracing::instrument(skip(runtime, display))]
pub fn init<R: Runtime>(runtime: R, options: InitOptions, display: Display) -> Result<BatchOutcome> {
    let failed = BatchOutcome {
        succeeded: 0,
        failed: 1,
    };

    if options.name.trim().is_empty() {
        display.failure("No scriptoid name specified.");
        return Ok(failed);
    }
    if options.entrypoint.trim().is_empty() {
        display.failure("No scriptoid entry point specified.");
        return Ok(failed);
    }

    let path = if runtime.is_dir(&options.path) {
        options.path.join(MANIFEST_FILENAME)
    } else {
        options.path.clone()
    };

    if (runtime.exists(&path) || runtime.is_symlink(&path)) && !options.force {
        display.failure(&format!(
            "File {} already exists. Use --force to overwrite it.",
            path.display()
        ));
        return Ok(failed);
    }

    let package = Package {
        name: options.name,
        version: options.version,
        description: options.description,
        entrypoint: options.entrypoint,
    };
    let manifest = package
        .to_manifest()
        .context("Failed to render manifest")?;

    debug!("Writing manifest for {} to {:?}", package.name, path);
    if let Err(e) = runtime.write(&path, manifest.as_bytes()) {
        debug!("Write failed: {:#}", e);
        display.failure(&format!("Failed to write to file {}.", path.display()));
        return Ok(failed);
    }

    display.success(&format!(
        "Created a scriptoid definition at {}.",
        path.display()
    ));
    Ok(BatchOutcome {
        succeeded: 1,
        failed: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::test_home;
    use mockall::predicate::{always, eq};

    fn plain() -> Display {
        Display::new(true, true)
    }

    fn options(path: PathBuf) -> InitOptions {
        InitOptions {
            path,
            name: "foo".into(),
            version: "0.0.0".into(),
            description: "demo".into(),
            entrypoint: "run.sh".into(),
            force: false,
        }
    }

    #[test]
    fn test_init_writes_manifest() {
        let mut runtime = MockRuntime::new();
        let path = test_home().join("foo").join("scriptoid.toml");

        runtime.expect_is_dir().returning(|_| false);
        runtime.expect_exists().returning(|_| false);
        runtime.expect_is_symlink().returning(|_| false);
        runtime
            .expect_write()
            .with(eq(path.clone()), always())
            .times(1)
            .returning(|_, contents| {
                let text = std::str::from_utf8(contents).unwrap();
                let package = Package::from_manifest(text).unwrap();
                assert_eq!(package.name, "foo");
                assert_eq!(package.entrypoint, "run.sh");
                Ok(())
            });

        let outcome = init(runtime, options(path), plain()).unwrap();
        assert!(outcome.is_success());
    }

    #[test]
    fn test_init_does_not_resolve_directories() {
        let mut runtime = MockRuntime::new();
        runtime.expect_home_dir().never();
        runtime.expect_current_dir().never();
        runtime.expect_read_dir().never();
        runtime.expect_is_dir().returning(|_| false);
        runtime.expect_exists().returning(|_| false);
        runtime.expect_is_symlink().returning(|_| false);
        runtime.expect_write().times(1).returning(|_, _| Ok(()));

        let outcome = init(runtime, options(PathBuf::from("scriptoid.toml")), plain()).unwrap();
        assert!(outcome.is_success());
    }

    #[test]
    fn test_init_into_directory() {
        let mut runtime = MockRuntime::new();
        let dir = test_home().join("foo");

        runtime
            .expect_is_dir()
            .with(eq(dir.clone()))
            .returning(|_| true);
        runtime.expect_exists().returning(|_| false);
        runtime.expect_is_symlink().returning(|_| false);
        runtime
            .expect_write()
            .with(eq(dir.join("scriptoid.toml")), always())
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = init(runtime, options(dir), plain()).unwrap();
        assert!(outcome.is_success());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let mut runtime = MockRuntime::new();
        runtime.expect_is_dir().returning(|_| false);
        runtime.expect_exists().returning(|_| true);
        runtime.expect_write().never();

        let path = test_home().join("scriptoid.toml");
        let outcome = init(runtime, options(path), plain()).unwrap();
        assert_eq!(outcome.failed, 1);
    }

    #[test]
    fn test_init_force_overwrites() {
        let mut runtime = MockRuntime::new();
        runtime.expect_is_dir().returning(|_| false);
        runtime.expect_exists().returning(|_| true);
        runtime.expect_write().times(1).returning(|_, _| Ok(()));

        let mut opts = options(test_home().join("scriptoid.toml"));
        opts.force = true;
        let outcome = init(runtime, opts, plain()).unwrap();
        assert!(outcome.is_success());
    }

    #[test]
    fn test_init_requires_name_and_entrypoint() {
        let mut runtime = MockRuntime::new();
        runtime.expect_write().never();

        let mut opts = options(test_home().join("scriptoid.toml"));
        opts.name = " ".into();
        let outcome = init(runtime, opts, plain()).unwrap();
        assert_eq!(outcome.failed, 1);

        let mut runtime = MockRuntime::new();
        runtime.expect_write().never();

        let mut opts = options(test_home().join("scriptoid.toml"));
        opts.entrypoint = "".into();
        let outcome = init(runtime, opts, plain()).unwrap();
        assert_eq!(outcome.failed, 1);
    }

    #[test]
    fn test_init_write_failure() {
        let mut runtime = MockRuntime::new();
        runtime.expect_is_dir().returning(|_| false);
        runtime.expect_exists().returning(|_| false);
        runtime.expect_is_symlink().returning(|_| false);
        runtime
            .expect_write()
            .returning(|_, _| Err(anyhow::anyhow!("disk full")));

        let outcome = init(
            runtime,
            options(test_home().join("scriptoid.toml")),
            plain(),
        )
        .unwrap();
        assert_eq!(outcome.failed, 1);
    }
}
