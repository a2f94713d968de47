pub mod card_parser;

pub use card_parser::*;
