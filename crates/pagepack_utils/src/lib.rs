pub mod indexmap;
pub mod xxhash;
