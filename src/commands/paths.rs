use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::runtime::{Runtime, normalize_path};

/// Get the default scriptoids root directory (`~/.scriptoids`)
#[tracing::instrument(skip(runtime))]
pub fn default_root<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let home_dir = runtime
        .home_dir()
        .context("Could not find home directory")?;
    Ok(home_dir.join(".scriptoids"))
}

/// Resolve a user supplied path against the current directory.
///
/// Links are created with the entry point's full path as target, so a relative
/// package directory would produce links that only resolve from one place.
#[tracing::instrument(skip(runtime))]
pub fn absolutize<R: Runtime>(runtime: &R, path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize_path(&path));
    }
    let cwd = runtime.current_dir()?;
    Ok(normalize_path(&cwd.join(path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::{configure_mock_runtime_basics, test_home};

    #[test]
    fn test_default_root() {
        let mut runtime = MockRuntime::new();
        configure_mock_runtime_basics(&mut runtime);

        assert_eq!(
            default_root(&runtime).unwrap(),
            test_home().join(".scriptoids")
        );
    }

    #[test]
    fn test_default_root_without_home() {
        let mut runtime = MockRuntime::new();
        runtime.expect_home_dir().returning(|| None);

        let err = default_root(&runtime).unwrap_err();
        assert!(err.to_string().contains("home directory"));
    }

    #[test]
    fn test_absolutize_relative() {
        let mut runtime = MockRuntime::new();
        configure_mock_runtime_basics(&mut runtime);

        assert_eq!(
            absolutize(&runtime, PathBuf::from("./tools/../bin")).unwrap(),
            test_home().join("bin")
        );
    }

    #[test]
    fn test_absolutize_absolute_does_not_need_cwd() {
        let mut runtime = MockRuntime::new();
        runtime.expect_current_dir().never();

        let path = test_home().join("bin");
        assert_eq!(absolutize(&runtime, path.clone()).unwrap(), path);
    }
}
