//! Installed package model
//!
//! A package is a directory under the package directory holding a
//! `scriptoid.toml` manifest and an executable entry point.

mod manifest;

pub use manifest::{MANIFEST_FILENAME, Package};
