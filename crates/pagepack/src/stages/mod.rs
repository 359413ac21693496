pub mod assemble;
pub mod discover;
pub mod negotiate;
