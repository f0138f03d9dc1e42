//! Built-in distribution profile table.

use crate::profile::{DPKG_DOCKER_RUN_OPTIONS, DistroProfile, RPM_DOCKER_RUN_OPTIONS};

/// The built-in profile table, in generation order.
///
/// `--generate-all` renders one target stanza per entry. dpkg-based
/// distributions produce a source package (`$(DEBIAN_DSC_FILENAME)`);
/// rpm-based distributions and snap leave a `.packages-built` stamp.
pub fn builtin_profiles() -> Vec<DistroProfile> {
    vec![
        // Debian
        DistroProfile {
            distribution: "debian_10".to_owned(),
            output_file: "$(DEBIAN_DSC_FILENAME)".to_owned(),
            options: DPKG_DOCKER_RUN_OPTIONS.to_owned(),
            ..Default::default()
        },
        DistroProfile {
            distribution: "debian_11".to_owned(),
            output_file: "$(DEBIAN_DSC_FILENAME)".to_owned(),
            options: DPKG_DOCKER_RUN_OPTIONS.to_owned(),
            ..Default::default()
        },
        DistroProfile {
            distribution: "debian_testing".to_owned(),
            output_file: "$(DEBIAN_DSC_FILENAME)".to_owned(),
            options: DPKG_DOCKER_RUN_OPTIONS.to_owned(),
            ..Default::default()
        },
        DistroProfile {
            distribution: "debian_unstable".to_owned(),
            output_file: "$(DEBIAN_DSC_FILENAME)".to_owned(),
            options: DPKG_DOCKER_RUN_OPTIONS.to_owned(),
            ..Default::default()
        },
        // Raspbian
        DistroProfile {
            distribution: "raspbian_10_armhf".to_owned(),
            output_file: "$(DEBIAN_DSC_FILENAME)".to_owned(),
            options: "--privileged --security-opt apparmor=docker-default".to_owned(),
            ..Default::default()
        },
        // Ubuntu
        DistroProfile {
            distribution: "ubuntu_18.04".to_owned(),
            output_file: "$(DEBIAN_DSC_FILENAME)".to_owned(),
            options: DPKG_DOCKER_RUN_OPTIONS.to_owned(),
            ..Default::default()
        },
        DistroProfile {
            distribution: "ubuntu_20.04".to_owned(),
            output_file: "$(DEBIAN_DSC_FILENAME)".to_owned(),
            options: DPKG_DOCKER_RUN_OPTIONS.to_owned(),
            ..Default::default()
        },
        DistroProfile {
            distribution: "ubuntu_21.04".to_owned(),
            output_file: "$(DEBIAN_DSC_FILENAME)".to_owned(),
            options: DPKG_DOCKER_RUN_OPTIONS.to_owned(),
            ..Default::default()
        },
        // Fedora
        DistroProfile {
            distribution: "fedora_33".to_owned(),
            output_file: ".packages-built".to_owned(),
            options: RPM_DOCKER_RUN_OPTIONS.to_owned(),
            ..Default::default()
        },
        DistroProfile {
            distribution: "fedora_34".to_owned(),
            output_file: ".packages-built".to_owned(),
            options: RPM_DOCKER_RUN_OPTIONS.to_owned(),
            ..Default::default()
        },
        // Disabled 2021/05/21 because it's broken.
        // DistroProfile {
        //     distribution: "rhel_8".to_owned(),
        //     output_file: ".packages-built".to_owned(),
        //     options: RPM_DOCKER_RUN_OPTIONS.to_owned(),
        //     docker_build_args: Some("--build-arg PASS=$${PASS}".to_owned()),
        //     ..Default::default()
        // },
        // OpenSUSE
        DistroProfile {
            distribution: "opensuse-leap_15.2".to_owned(),
            output_file: ".packages-built".to_owned(),
            options: RPM_DOCKER_RUN_OPTIONS.to_owned(),
            ..Default::default()
        },
        DistroProfile {
            distribution: "opensuse-leap_15.3".to_owned(),
            output_file: ".packages-built".to_owned(),
            options: RPM_DOCKER_RUN_OPTIONS.to_owned(),
            ..Default::default()
        },
        DistroProfile {
            distribution: "opensuse-tumbleweed".to_owned(),
            output_file: ".packages-built".to_owned(),
            options: RPM_DOCKER_RUN_OPTIONS.to_owned(),
            ..Default::default()
        },
        // Snap
        DistroProfile {
            distribution: "snap".to_owned(),
            output_file: ".packages-built".to_owned(),
            options: "-e SNAP_PKG_NAME=$(or $(SNAP_PKG_NAME),jami)".to_owned(),
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_nonempty_and_unique() {
        let profiles = builtin_profiles();
        assert!(!profiles.is_empty());

        let mut seen = std::collections::HashSet::new();
        for profile in &profiles {
            assert!(
                seen.insert(profile.distribution.clone()),
                "duplicate distribution: {}",
                profile.distribution
            );
        }
    }

    #[test]
    fn dpkg_distributions_build_source_packages() {
        for profile in builtin_profiles() {
            if profile.options == DPKG_DOCKER_RUN_OPTIONS {
                assert_eq!(profile.output_file, "$(DEBIAN_DSC_FILENAME)");
            }
        }
    }

    #[test]
    fn no_entry_overrides_the_docker_image() {
        // Every built-in entry has its own docker/Dockerfile_<distro>.
        for profile in builtin_profiles() {
            assert_eq!(profile.resolved_docker_image(), profile.distribution);
        }
    }
}
