use std::path::Path;

use mktargets_core::{ProfilesFile, builtin_profiles};
use mktargets_gen::{MAKEFILE_HEADER, TargetGenerator};

/// Generate packaging targets for every profile in the table.
///
/// The table comes from `--profiles FILE` when given, the built-in
/// registry otherwise. Stanzas are emitted in table order.
pub fn generate_all(profiles_file: Option<&Path>) -> anyhow::Result<()> {
    let profiles = match profiles_file {
        Some(path) => ProfilesFile::load(path)?,
        None => builtin_profiles(),
    };

    println!("{MAKEFILE_HEADER}");
    for profile in &profiles {
        println!("{}", TargetGenerator::new(profile).render());
    }
    Ok(())
}
