use mktargets_core::DistroProfile;

/// Preamble emitted once at the top of a generated fragment.
pub const MAKEFILE_HEADER: &str = "\
# -*- mode: makefile -*-
# This file was auto-generated by: mktargets.
#
# We don't simply use jami-packaging-distro as the docker image name because
# we want to be able to build multiple versions of the same distro at the
# same time and it could result in race conditions on the machine as we would
# overwrite the docker image of other builds.
#
# This does not impact caching as the docker daemon does not care about the image
# names, just about the contents of the Dockerfile.
";

/// Renders the packaging-target stanza for one distribution profile.
pub struct TargetGenerator<'a> {
    profile: &'a DistroProfile,
}

impl<'a> TargetGenerator<'a> {
    pub fn new(profile: &'a DistroProfile) -> Self {
        Self { profile }
    }

    /// Render the Makefile stanza for this profile.
    ///
    /// Recipe lines are tab-indented; everything the stanza interpolates
    /// comes from the profile, so rendering the same profile twice yields
    /// byte-identical text.
    pub fn render(&self) -> String {
        let distribution = &self.profile.distribution;
        let output_file = &self.profile.output_file;
        let options = &self.profile.options;
        let docker_image = self.profile.resolved_docker_image();
        let version = self.profile.resolved_version();
        let version_qt = self.profile.resolved_version_qt();
        let docker_build_args = self.profile.resolved_docker_build_args();

        tracing::debug!(
            distribution = %distribution,
            docker_image = %docker_image,
            "rendering packaging target"
        );

        format!(
            r#"##
## Distro: {distribution}
##

PACKAGE_{distribution}_DOCKER_IMAGE_NAME:=jami-packaging-{distribution}$(RING_PACKAGING_IMAGE_SUFFIX)
PACKAGE_{distribution}_DOCKER_IMAGE_FILE:=.docker-image-$(PACKAGE_{distribution}_DOCKER_IMAGE_NAME)

PACKAGE_{distribution}_DOCKER_RUN_COMMAND = docker run \
    --rm \
    -e RELEASE_VERSION=$(RELEASE_VERSION) \
    -e RELEASE_TARBALL_FILENAME=$(RELEASE_TARBALL_FILENAME) \
    -e DEBIAN_VERSION={version} \
    -e DEBIAN_QT_VERSION={version_qt} \
    -e CURRENT_UID=$(CURRENT_UID) \
    -e CURRENT_GID=$(CURRENT_GID) \
    -e DISTRIBUTION={distribution} \
    -v $(CURDIR)/$(RELEASE_TARBALL_FILENAME):/src/$(RELEASE_TARBALL_FILENAME) \
    -v $(CURDIR):/opt/ring-project-ro:ro \
    -v $(CURDIR)/packages/{distribution}:/opt/output \
    -v /opt/cache-packaging:/opt/cache-packaging \
    -v /opt/ring-contrib:/opt/ring-contrib \
    -t $(and $(IS_SHELL_INTERACTIVE),-i) {options} \
    $(DOCKER_RUN_EXTRA_ARGS) \
    $(PACKAGE_{distribution}_DOCKER_IMAGE_NAME)

$(PACKAGE_{distribution}_DOCKER_IMAGE_FILE): docker/Dockerfile_{docker_image}
	docker build \
        -t $(PACKAGE_{distribution}_DOCKER_IMAGE_NAME) \
        -f docker/Dockerfile_{docker_image} {docker_build_args} \
        $(CURDIR)
	touch $(PACKAGE_{distribution}_DOCKER_IMAGE_FILE)

packages/{distribution}:
	mkdir -p packages/{distribution}

packages/{distribution}/{output_file}: $(RELEASE_TARBALL_FILENAME) packages/{distribution} $(PACKAGE_{distribution}_DOCKER_IMAGE_FILE)
	$(PACKAGE_{distribution}_DOCKER_RUN_COMMAND)
	touch packages/{distribution}/*

.PHONY: package-{distribution}
package-{distribution}: packages/{distribution}/{output_file}
PACKAGE-TARGETS += package-{distribution}

.PHONY: package-{distribution}-interactive
package-{distribution}-interactive: $(RELEASE_TARBALL_FILENAME) packages/{distribution} $(PACKAGE_{distribution}_DOCKER_IMAGE_FILE)
	$(PACKAGE_{distribution}_DOCKER_RUN_COMMAND) bash
"#,
            distribution = distribution,
            docker_image = docker_image,
            output_file = output_file,
            options = options,
            version = version,
            version_qt = version_qt,
            docker_build_args = docker_build_args,
        )
    }
}
