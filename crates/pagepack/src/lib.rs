mod generator;
mod stages;
mod types;
mod utils;

pub use crate::{generator::ConfigGenerator, types::generator_output::GeneratorOutput};
pub use pagepack_common::*;
pub use pagepack_error::{BuildError, BuildResult, GenerateError};
