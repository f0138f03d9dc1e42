mod commands;

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

#[derive(Parser)]
#[command(name = "mktargets", about = "Packaging targets generation tool")]
#[command(group(ArgGroup::new("mode").required(true).args(["generate", "generate_all"])))]
struct Cli {
    /// Generate a single packaging target
    #[arg(long)]
    generate: bool,

    /// Generates all packaging targets
    #[arg(long = "generate-all")]
    generate_all: bool,

    /// Distribution identifier (e.g. debian_11)
    #[arg(long)]
    distribution: Option<String>,

    /// Output artifact filename pattern; may reference make variables
    #[arg(long = "output_file")]
    output_file: Option<String>,

    /// Extra docker run option flags
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    options: String,

    /// Docker image name override (defaults to the distribution)
    #[arg(long = "docker_image")]
    docker_image: Option<String>,

    /// DEBIAN_VERSION override (defaults to $(DEBIAN_VERSION))
    #[arg(long)]
    version: Option<String>,

    /// DEBIAN_QT_VERSION override (defaults to $(DEBIAN_QT_VERSION))
    #[arg(long = "version_qt")]
    version_qt: Option<String>,

    /// Read the --generate-all profile table from a TOML file
    #[arg(long, value_name = "FILE")]
    profiles: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Stdout carries the generated fragment; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.generate {
        commands::generate(commands::GenerateArgs {
            distribution: cli.distribution,
            output_file: cli.output_file,
            options: cli.options,
            docker_image: cli.docker_image,
            version: cli.version,
            version_qt: cli.version_qt,
        })?;
    } else {
        commands::generate_all(cli.profiles.as_deref())?;
    }

    Ok(())
}
