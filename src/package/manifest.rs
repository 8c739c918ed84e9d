use serde::{Deserialize, Serialize};

/// Name of the manifest file expected inside every package directory.
pub const MANIFEST_FILENAME: &str = "scriptoid.toml";

/// A script or binary installed as a package, as described by its manifest.
///
/// Decoding a manifest never validates it: any field may come back empty.
/// Whether a package can actually be linked is decided by
/// [`Environment::is_package_valid`](crate::environment::Environment::is_package_valid).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Path of the executable, relative to the package directory.
    pub entrypoint: String,
}

impl Package {
    /// Decode a manifest. Missing keys become empty strings and unknown keys are ignored.
    pub fn from_manifest(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render this package as manifest text.
    pub fn to_manifest(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
