use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read profiles from {path}")]
    ProfilesRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse profiles at {path}")]
    ProfilesParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("no [[profile]] entries in {path}")]
    NoProfiles { path: PathBuf },

    #[error("duplicate profile for distribution '{distribution}' in {path}")]
    DuplicateProfile { distribution: String, path: PathBuf },

    #[error("profile entry {index} in {path} has an empty distribution")]
    EmptyDistribution { index: usize, path: PathBuf },

    #[error("profile '{distribution}' in {path} has an empty output_file")]
    EmptyOutputFile { distribution: String, path: PathBuf },
}
