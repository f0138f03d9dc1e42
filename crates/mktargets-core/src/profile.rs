use serde::Deserialize;

/// `docker run` options shared by all dpkg-based distributions.
///
/// Forwards the Qt build environment into the container and mounts the
/// shared contrib cache. The trailing space is part of the string.
pub const DPKG_DOCKER_RUN_OPTIONS: &str = "-e QT_JAMI_PREFIX=$(QT_JAMI_PREFIX) \
    -e QT_MAJOR=$(QT_MAJOR) \
    -e QT_MINOR=$(QT_MINOR) \
    -e QT_PATCH=$(QT_PATCH) \
    -e QT_TARBALL_CHECKSUM=$(QT_TARBALL_CHECKSUM) \
    -e FORCE_REBUILD_QT=$(FORCE_REBUILD_QT) \
    -v /opt/ring-contrib:/opt/ring-contrib \
    --privileged \
    --security-opt apparmor=docker-default ";

/// `docker run` options shared by all rpm-based distributions.
///
/// rpmbuild needs a wider seccomp profile than the Docker default allows.
pub const RPM_DOCKER_RUN_OPTIONS: &str =
    "--security-opt seccomp=./docker/profile-seccomp-fedora_28.json --privileged";

/// A distribution packaging profile.
///
/// One record per supported distribution/architecture combination. A profile
/// is immutable once constructed and fully determines the generated Makefile
/// stanza for its distribution.
///
/// # Examples
///
/// ```
/// use mktargets_core::DistroProfile;
///
/// let profile = DistroProfile {
///     distribution: "debian_11".to_owned(),
///     output_file: "$(DEBIAN_DSC_FILENAME)".to_owned(),
///     ..Default::default()
/// };
/// assert_eq!(profile.resolved_docker_image(), "debian_11");
/// assert_eq!(profile.resolved_version(), "$(DEBIAN_VERSION)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DistroProfile {
    /// Distribution identifier (e.g. `debian_11`, `opensuse-tumbleweed`)
    pub distribution: String,
    /// Output artifact filename pattern; may reference make variables
    pub output_file: String,
    /// Extra `docker run` option flags
    #[serde(default)]
    pub options: String,
    /// Docker image name override; the distribution identifier when unset
    #[serde(default)]
    pub docker_image: Option<String>,
    /// Version override; `$(DEBIAN_VERSION)` when unset
    #[serde(default)]
    pub version: Option<String>,
    /// Qt version override; `$(DEBIAN_QT_VERSION)` when unset
    #[serde(default)]
    pub version_qt: Option<String>,
    /// Extra `docker build` arguments
    #[serde(default)]
    pub docker_build_args: Option<String>,
}

impl DistroProfile {
    /// Docker image name for this profile.
    ///
    /// An unset or empty override falls back to the distribution identifier,
    /// so `docker/Dockerfile_debian_11` is picked up for `debian_11` unless a
    /// shared image is configured.
    pub fn resolved_docker_image(&self) -> &str {
        non_empty(self.docker_image.as_deref()).unwrap_or(&self.distribution)
    }

    /// Version passed into the container as `DEBIAN_VERSION`.
    pub fn resolved_version(&self) -> &str {
        non_empty(self.version.as_deref()).unwrap_or("$(DEBIAN_VERSION)")
    }

    /// Qt version passed into the container as `DEBIAN_QT_VERSION`.
    pub fn resolved_version_qt(&self) -> &str {
        non_empty(self.version_qt.as_deref()).unwrap_or("$(DEBIAN_QT_VERSION)")
    }

    /// Extra `docker build` arguments; empty text when unset.
    pub fn resolved_docker_build_args(&self) -> &str {
        self.docker_build_args.as_deref().unwrap_or("")
    }
}

// The empty string counts as unset everywhere a default applies.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(distribution: &str) -> DistroProfile {
        DistroProfile {
            distribution: distribution.to_owned(),
            output_file: ".packages-built".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn docker_image_defaults_to_distribution() {
        assert_eq!(profile("fedora_34").resolved_docker_image(), "fedora_34");
    }

    #[test]
    fn docker_image_override_wins() {
        let mut p = profile("ubuntu_21.04");
        p.docker_image = Some("ubuntu".to_owned());
        assert_eq!(p.resolved_docker_image(), "ubuntu");
    }

    #[test]
    fn empty_override_counts_as_unset() {
        let mut p = profile("debian_10");
        p.docker_image = Some(String::new());
        p.version = Some(String::new());
        p.version_qt = Some(String::new());
        assert_eq!(p.resolved_docker_image(), "debian_10");
        assert_eq!(p.resolved_version(), "$(DEBIAN_VERSION)");
        assert_eq!(p.resolved_version_qt(), "$(DEBIAN_QT_VERSION)");
    }

    #[test]
    fn version_overrides_win() {
        let mut p = profile("debian_10");
        p.version = Some("1.2.3".to_owned());
        p.version_qt = Some("6.2.0".to_owned());
        assert_eq!(p.resolved_version(), "1.2.3");
        assert_eq!(p.resolved_version_qt(), "6.2.0");
    }

    #[test]
    fn build_args_empty_when_unset() {
        assert_eq!(profile("snap").resolved_docker_build_args(), "");
    }

    // ── Property-based tests ──

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// Strategy: plausible distribution identifier
        fn distro_name() -> impl Strategy<Value = String> {
            "[a-z][a-z0-9_.-]{0,19}"
        }

        proptest! {
            #[test]
            fn resolved_image_is_override_or_distribution(
                distribution in distro_name(),
                image in proptest::option::of(distro_name()),
            ) {
                let p = DistroProfile {
                    distribution: distribution.clone(),
                    output_file: "out".to_owned(),
                    docker_image: image.clone(),
                    ..Default::default()
                };
                match image.filter(|i| !i.is_empty()) {
                    Some(image) => prop_assert_eq!(p.resolved_docker_image(), image),
                    None => prop_assert_eq!(p.resolved_docker_image(), distribution),
                }
            }

            #[test]
            fn resolved_fields_never_empty(
                distribution in distro_name(),
                version in proptest::option::of("[0-9a-z.~+-]{0,12}"),
            ) {
                let p = DistroProfile {
                    distribution,
                    output_file: "out".to_owned(),
                    version,
                    ..Default::default()
                };
                prop_assert!(!p.resolved_docker_image().is_empty());
                prop_assert!(!p.resolved_version().is_empty());
                prop_assert!(!p.resolved_version_qt().is_empty());
            }
        }
    }
}
