use anyhow::Result;
use log::debug;

use crate::runtime::Runtime;

use super::config::Config;
use super::{BatchOutcome, failure_message, packages_noun};

/// Remove packages' links from the bin directory
#[tracing::instrument(skip(runtime, config))]
pub fn unlink<R: Runtime>(runtime: R, names: &[String], config: Config) -> Result<BatchOutcome> {
    let display = config.display;
    let env = config.environment(&runtime);
    let mut outcome = BatchOutcome::default();

    if names.is_empty() {
        display.failure("No packages specified.");
        outcome.failed += 1;
        return Ok(outcome);
    }

    for name in names {
        debug!("Unlinking {}", name);

        let package = match env.get_installed_package_by_name(name) {
            Ok(package) => package,
            Err(e) => {
                display.failure(&failure_message("unlink", name, e));
                outcome.failed += 1;
                continue;
            }
        };

        if let Err(e) = env.unlink_package(&package) {
            display.failure(&failure_message("unlink", name, e));
            outcome.failed += 1;
            continue;
        }

        display.info(&format!("Removed {}", env.link_path(&package).display()));
        outcome.succeeded += 1;
    }

    if outcome.succeeded > 0 {
        display.success(&format!(
            "Unlinked {} {}",
            outcome.succeeded,
            packages_noun(outcome.succeeded)
        ));
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::test_home;
    use mockall::predicate::eq;

    #[test]
    fn test_unlink_removes_link() {
        let mut runtime = MockRuntime::new();
        let root = test_home();
        let foo_link = root.join("bin").join("foo");

        runtime.expect_exists().returning(|_| true);
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("name = \"foo\"\nentrypoint = \"run.sh\"\n".into()));
        runtime.expect_is_symlink().returning(|_| true);
        runtime
            .expect_remove_symlink()
            .with(eq(foo_link))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = unlink(runtime, &["foo".to_string()], Config::for_test(root)).unwrap();
        assert_eq!(
            outcome,
            BatchOutcome {
                succeeded: 1,
                failed: 0
            }
        );
    }

    #[test]
    fn test_unlink_not_linked_is_a_failure() {
        let mut runtime = MockRuntime::new();
        let root = test_home();
        let manifest = root.join("pkg").join("foo").join("scriptoid.toml");

        runtime
            .expect_exists()
            .returning(move |p| p == manifest.as_path());
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("name = \"foo\"\nentrypoint = \"run.sh\"\n".into()));
        runtime.expect_is_symlink().returning(|_| false);
        runtime.expect_remove_symlink().never();
        runtime.expect_remove_file().never();

        let outcome = unlink(runtime, &["foo".to_string()], Config::for_test(root)).unwrap();
        assert_eq!(outcome.failed, 1);
    }
}
