/// Template module: the path mini-language
///
/// Contains the token model, the escaping helpers and the tokenizer. Everything
/// here is a pure function of its inputs; compiled artifacts live in
/// [`crate::compile`].

pub mod escape;
pub mod parser;
pub mod token;

// Re-export commonly used types
pub use escape::{escape_group, escape_string};
pub use parser::tokenize;
pub use token::{Key, ParamName, Parameter, Token};
