//! Core types and configuration for mktargets.
//!
//! This crate defines the distribution packaging profile ([`DistroProfile`]),
//! the built-in profile table, the `--profiles` file schema ([`ProfilesFile`]),
//! and shared error types.

pub mod config;
pub mod error;
pub mod profile;
pub mod registry;

pub use config::ProfilesFile;
pub use error::{Error, Result};
pub use profile::{DPKG_DOCKER_RUN_OPTIONS, DistroProfile, RPM_DOCKER_RUN_OPTIONS};
pub use registry::builtin_profiles;
