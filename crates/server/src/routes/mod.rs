pub mod embedding;
pub mod similarity;
pub mod system;
