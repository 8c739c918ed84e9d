use anyhow::Result;
use log::debug;

use crate::runtime::Runtime;

use super::config::Config;
use super::{BatchOutcome, failure_message, packages_noun};

/// Link installed packages into the bin directory, making them available on `PATH`
#[tracing::instrument(skip(runtime, config))]
pub fn link<R: Runtime>(runtime: R, names: &[String], config: Config) -> Result<BatchOutcome> {
    let display = config.display;
    let env = config.environment(&runtime);
    let mut outcome = BatchOutcome::default();

    if names.is_empty() {
        display.failure("No packages specified.");
        outcome.failed += 1;
        return Ok(outcome);
    }

    for name in names {
        debug!("Linking {}", name);

        let package = match env.get_installed_package_by_name(name) {
            Ok(package) => package,
            Err(e) => {
                display.failure(&failure_message("link", name, e));
                outcome.failed += 1;
                continue;
            }
        };

        if let Err(e) = env.link_package(&package) {
            display.failure(&failure_message("link", name, e));
            outcome.failed += 1;
            continue;
        }

        display.info(&format!(
            "{} => {}",
            env.entry_point_path(&package).display(),
            env.link_path(&package).display()
        ));
        outcome.succeeded += 1;
    }

    if outcome.succeeded > 0 {
        display.success(&format!(
            "Linked {} {}",
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

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_link_no_names() {
        let runtime = MockRuntime::new();
        let outcome = link(runtime, &[], Config::for_test(test_home())).unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.succeeded, 0);
    }

    #[test]
    fn test_link_skips_missing_and_links_the_rest() {
        let mut runtime = MockRuntime::new();
        let root = test_home();
        let foo_manifest = root.join("pkg").join("foo").join("scriptoid.toml");
        let foo_entry = root.join("pkg").join("foo").join("run.sh");
        let foo_link = root.join("bin").join("foo");

        // --- Only foo is installed ---

        let (m, e) = (foo_manifest.clone(), foo_entry.clone());
        runtime
            .expect_exists()
            .returning(move |p| p == m.as_path() || p == e.as_path());
        runtime
            .expect_read_to_string()
            .with(eq(foo_manifest))
            .returning(|_| Ok("name = \"foo\"\nentrypoint = \"run.sh\"\n".into()));
        runtime.expect_is_symlink().returning(|_| false);
        runtime
            .expect_symlink()
            .with(eq(foo_entry), eq(foo_link))
            .times(1)
            .returning(|_, _| Ok(()));

        // --- Execute & Verify ---

        let outcome = link(runtime, &names(&["missing", "foo"]), Config::for_test(root)).unwrap();
        assert_eq!(
            outcome,
            BatchOutcome {
                succeeded: 1,
                failed: 1
            }
        );
    }

    #[test]
    fn test_link_already_linked_is_a_failure() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| true);
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("name = \"foo\"\nentrypoint = \"run.sh\"\n".into()));
        runtime.expect_is_symlink().returning(|_| true);
        runtime.expect_symlink().never();

        let outcome = link(runtime, &names(&["foo"]), Config::for_test(test_home())).unwrap();
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.succeeded, 0);
    }
}
