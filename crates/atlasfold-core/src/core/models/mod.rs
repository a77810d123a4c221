pub mod embedding;
pub mod sequence;
pub mod structure;
