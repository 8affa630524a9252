//*** START FILE: src/detection/mod.rs ***//
pub mod auto_detect;
pub mod dictionary;

pub use auto_detect::auto_detect_false_friends;
pub use dictionary::{DictionaryEntry, MeaningDictionary};
//*** END FILE: src/detection/mod.rs ***//
