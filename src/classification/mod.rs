//*** START FILE: src/classification/mod.rs ***//
pub mod classifier;
pub mod similarity;

// Re-export the pure classification entry points for the loaders
pub use classifier::{classify, classify_detected, CodeEncoding, ComparisonPattern};
pub use similarity::{derive_divergence, meaning_similarity, SimilarityThresholds};
//*** END FILE: src/classification/mod.rs ***//
