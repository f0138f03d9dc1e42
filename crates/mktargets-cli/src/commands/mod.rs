mod generate;
mod generate_all;

pub use generate::{GenerateArgs, generate};
pub use generate_all::generate_all;
