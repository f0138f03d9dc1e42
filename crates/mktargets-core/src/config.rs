use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::profile::DistroProfile;

/// Profile table file, the `--profiles FILE` schema.
///
/// An array of `[[profile]]` tables whose keys mirror [`DistroProfile`]:
///
/// ```toml
/// [[profile]]
/// distribution = "debian_11"
/// output_file = "$(DEBIAN_DSC_FILENAME)"
/// options = "--privileged"
///
/// [[profile]]
/// distribution = "fedora_34"
/// output_file = ".packages-built"
/// docker_image = "fedora"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilesFile {
    #[serde(default, rename = "profile")]
    pub profiles: Vec<DistroProfile>,
}

impl ProfilesFile {
    /// Load and validate a profile table from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`Error::ProfilesRead`](crate::Error::ProfilesRead) /
    ///   [`Error::ProfilesParse`](crate::Error::ProfilesParse) on io or TOML
    ///   failures
    /// - [`Error::NoProfiles`](crate::Error::NoProfiles) for an empty table
    /// - [`Error::DuplicateProfile`](crate::Error::DuplicateProfile),
    ///   [`Error::EmptyDistribution`](crate::Error::EmptyDistribution), and
    ///   [`Error::EmptyOutputFile`](crate::Error::EmptyOutputFile) for entries
    ///   that could not generate a usable target
    pub fn load(path: &Path) -> crate::Result<Vec<DistroProfile>> {
        let content = std::fs::read_to_string(path).map_err(|e| crate::Error::ProfilesRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let parsed: Self = toml::from_str(&content).map_err(|e| crate::Error::ProfilesParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        parsed.validate(path)?;
        tracing::debug!(
            path = %path.display(),
            profiles = parsed.profiles.len(),
            "profile table loaded"
        );
        Ok(parsed.profiles)
    }

    fn validate(&self, path: &Path) -> crate::Result<()> {
        if self.profiles.is_empty() {
            return Err(crate::Error::NoProfiles {
                path: path.to_path_buf(),
            });
        }

        let mut seen = HashSet::new();
        for (index, profile) in self.profiles.iter().enumerate() {
            if profile.distribution.is_empty() {
                return Err(crate::Error::EmptyDistribution {
                    index,
                    path: path.to_path_buf(),
                });
            }
            if profile.output_file.is_empty() {
                return Err(crate::Error::EmptyOutputFile {
                    distribution: profile.distribution.clone(),
                    path: path.to_path_buf(),
                });
            }
            if !seen.insert(profile.distribution.as_str()) {
                return Err(crate::Error::DuplicateProfile {
                    distribution: profile.distribution.clone(),
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(())
    }
}
