use anyhow::Result;
use log::debug;

use crate::environment::{Environment, LinkStatus};
use crate::package::Package;
use crate::runtime::Runtime;

use super::BatchOutcome;
use super::config::Config;

/// One line of the `list` table.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PackageRow {
    pub name: String,
    pub version: String,
    pub valid: bool,
    pub link: LinkStatus,
    pub description: String,
}

impl PackageRow {
    fn from_package<R: Runtime>(env: &Environment<'_, R>, package: Package) -> Self {
        let valid = match env.is_package_valid(&package) {
            Ok(valid) => valid,
            Err(e) => {
                debug!("Package {:?} is not valid: {}", package.name, e);
                false
            }
        };
        let link = env.link_status(&package);

        Self {
            name: package.name,
            version: package.version,
            valid,
            link,
            description: package.description,
        }
    }
}

pub(crate) fn format_row(name: &str, version: &str, status: &str, linked: &str, description: &str) -> String {
    format!(
        "{:<15} {:<10} {:<10} {:<10} {}",
        name, version, status, linked, description
    )
    .trim_end()
    .to_string()
}

pub(crate) fn render_table(rows: &[PackageRow]) -> String {
    let mut lines = vec![format_row(
        "Name",
        "Version",
        "Status",
        "Linked?",
        "Description",
    )];
    for row in rows {
        lines.push(format_row(
            &row.name,
            &row.version,
            if row.valid { "OK" } else { "Error" },
            row.link.label(),
            &row.description,
        ));
    }
    lines.join("\n")
}

/// List all installed packages with their validity and link state
#[tracing::instrument(skip(runtime, config))]
pub fn list<R: Runtime>(runtime: R, config: Config) -> Result<BatchOutcome> {
    let display = config.display;
    let env = config.environment(&runtime);

    debug!("Listing packages from {:?}", env.package_directory());

    let packages = match env.get_all_installed_packages() {
        Ok(packages) => packages,
        Err(e) => {
            debug!("Failed to list packages: {}", e);
            display.failure(&format!(
                "Failed to list packages. Does the package directory {} exist?",
                env.package_directory().display()
            ));
            return Ok(BatchOutcome {
                succeeded: 0,
                failed: 1,
            });
        }
    };

    if packages.is_empty() {
        println!("No packages installed.");
        return Ok(BatchOutcome::default());
    }

    let rows: Vec<PackageRow> = packages
        .into_iter()
        .map(|package| PackageRow::from_package(&env, package))
        .collect();
    println!("{}", render_table(&rows));

    Ok(BatchOutcome {
        succeeded: rows.len(),
        failed: 0,
    })
}
