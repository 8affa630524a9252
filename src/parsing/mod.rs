//*** START FILE: src/parsing/mod.rs ***//
pub mod cedict_parser;
pub mod jckv_parser;
pub mod jmdict_parser;

// Re-export the loaders the pipeline calls
pub use cedict_parser::load_cedict;
pub use jckv_parser::{load_jckv_table, parse_jckv_table, JckvExtraction, JckvStats};
pub use jmdict_parser::load_jmdict;
//*** END FILE: src/parsing/mod.rs ***//
