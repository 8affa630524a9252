//*** START FILE: src/lib.rs ***//

// Declare all modules that are part of this library
pub mod config;
pub mod error;
pub mod types {
    pub mod false_friend;
}
pub mod classification;
pub mod parsing;
pub mod detection;
pub mod merge;
pub mod report;
pub mod dataset_io;
pub mod pipeline;

// Re-export the items main.rs and downstream tools reach for
pub use classification::{classify, classify_detected, meaning_similarity, SimilarityThresholds};
pub use merge::merge_false_friends;
pub use types::false_friend::{Affects, Category, Classification, FalseFriend, Severity, Source};

//*** END FILE: src/lib.rs ***//
