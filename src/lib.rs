pub mod commands;
pub mod display;
pub mod environment;
pub mod package;
pub mod runtime;

/// Test utilities for cross-platform path handling.
#[cfg(test)]
pub mod test_utils {
    use crate::runtime::MockRuntime;
    use std::path::PathBuf;

    /// Returns a test home directory path based on the platform.
    /// - Unix: `/home/user`
    /// - Windows: `C:\Users\user`
    pub fn test_home() -> PathBuf {
        #[cfg(not(windows))]
        {
            PathBuf::from("/home/user")
        }
        #[cfg(windows)]
        {
            PathBuf::from(r"C:\Users\user")
        }
    }

    /// Returns the default bin directory under [`test_home`].
    pub fn test_bin_dir() -> PathBuf {
        test_home().join(".scriptoids").join("bin")
    }

    /// Returns the default package directory under [`test_home`].
    pub fn test_pkg_dir() -> PathBuf {
        test_home().join(".scriptoids").join("pkg")
    }

    /// Configure a mock runtime with common defaults for tests.
    /// - home dir set to [`test_home`]
    /// - current_dir set to [`test_home`]
    pub fn configure_mock_runtime_basics(runtime: &mut MockRuntime) {
        runtime.expect_home_dir().returning(|| Some(test_home()));
        runtime.expect_current_dir().returning(|| Ok(test_home()));
    }
}
