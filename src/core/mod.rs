//! Schedule engine: tokenize, normalize, collapse, resolve today's status, format.

pub mod aggregator;
pub mod formatter;
pub mod normalizer;
pub mod parser;
pub mod status;
pub mod tokenizer;

pub use formatter::TextStyle;
pub use parser::{LocationTimeTableParser, ParserSettings};
