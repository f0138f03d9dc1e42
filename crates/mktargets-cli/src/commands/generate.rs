use mktargets_core::DistroProfile;
use mktargets_gen::{MAKEFILE_HEADER, TargetGenerator};

/// Flag values for a single ad-hoc target.
pub struct GenerateArgs {
    pub distribution: Option<String>,
    pub output_file: Option<String>,
    pub options: String,
    pub docker_image: Option<String>,
    pub version: Option<String>,
    pub version_qt: Option<String>,
}

/// Generate one packaging target from the command-line flags.
pub fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let distribution = args
        .distribution
        .ok_or_else(|| anyhow::anyhow!("--generate requires --distribution"))?;
    let output_file = args
        .output_file
        .ok_or_else(|| anyhow::anyhow!("--generate requires --output_file"))?;

    let profile = DistroProfile {
        distribution,
        output_file,
        options: args.options,
        docker_image: args.docker_image,
        version: args.version,
        version_qt: args.version_qt,
        docker_build_args: None,
    };

    println!("{MAKEFILE_HEADER}");
    println!("{}", TargetGenerator::new(&profile).render());
    Ok(())
}
