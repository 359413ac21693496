pub mod generator_output;

use std::sync::Arc;

use pagepack_common::NormalizedGeneratorOptions;

pub type SharedOptions = Arc<NormalizedGeneratorOptions>;
