/// Token model for parsed path templates
///
/// A template is a left-to-right sequence of literal text and parameters.
/// Both downstream compilers (renderer and regex synthesizer) consume the same
/// `Vec<Token>` and match on it exhaustively.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a parameter
///
/// Explicit `:name` parameters carry their identifier; anonymous `(pattern)`
/// groups are numbered in encounter order starting at zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamName {
    Index(usize),
    Named(String),
}

impl ParamName {
    /// The lookup key used against render data (`"id"`, `"0"`, ...)
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            ParamName::Named(name) => Cow::Borrowed(name),
            ParamName::Index(index) => Cow::Owned(index.to_string()),
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamName::Named(name) => f.write_str(name),
            ParamName::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for ParamName {
    fn from(name: &str) -> Self {
        ParamName::Named(name.to_string())
    }
}

impl From<String> for ParamName {
    fn from(name: String) -> Self {
        ParamName::Named(name)
    }
}

impl From<usize> for ParamName {
    fn from(index: usize) -> Self {
        ParamName::Index(index)
    }
}

/// A capturing placeholder in a template
///
/// # Examples
///
/// ```
/// use pathex::{tokenize, Options, Token};
///
/// let tokens = tokenize("/users/:id(\\d+)?", &Options::default());
/// let Token::Parameter(param) = &tokens[1] else { panic!("expected a parameter") };
///
/// assert_eq!(param.name.to_string(), "id");
/// assert_eq!(param.prefix, Some('/'));
/// assert!(param.optional);
/// assert_eq!(param.pattern, "\\d+");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: ParamName,
    /// Delimiter-like character absorbed from the literal text before the parameter
    pub prefix: Option<char>,
    /// Separator placed between repeated values
    pub delimiter: char,
    pub optional: bool,
    pub repeat: bool,
    /// Regex fragment for a single value, never anchored
    pub pattern: String,
}

impl Parameter {
    /// The prefix as text, empty when the parameter has none
    pub fn prefix_str(&self) -> String {
        self.prefix.map(String::from).unwrap_or_default()
    }
}

/// One parsed unit of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    /// Text copied verbatim into rendered paths and escaped into regexes
    Literal(String),
    Parameter(Parameter),
}

impl Token {
    pub fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            Token::Parameter(param) => Some(param),
            Token::Literal(_) => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }
}

impl From<Parameter> for Token {
    fn from(param: Parameter) -> Self {
        Token::Parameter(param)
    }
}

/// Externally visible metadata for one capture group of a compiled path
///
/// Keys built from templates mirror their [`Parameter`]. Keys built from a raw
/// regular expression only know their capture ordinal, every other field is
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub name: ParamName,
    pub prefix: Option<char>,
    pub delimiter: Option<char>,
    pub optional: bool,
    pub repeat: bool,
    pub pattern: Option<String>,
}

impl Key {
    /// Opaque positional key for capture group `index` of a raw regex
    pub fn anonymous(index: usize) -> Self {
        Self {
            name: ParamName::Index(index),
            prefix: None,
            delimiter: None,
            optional: false,
            repeat: false,
            pattern: None,
        }
    }
}

impl From<&Parameter> for Key {
    fn from(param: &Parameter) -> Self {
        Self {
            name: param.name.clone(),
            prefix: param.prefix,
            delimiter: Some(param.delimiter),
            optional: param.optional,
            repeat: param.repeat,
            pattern: Some(param.pattern.clone()),
        }
    }
}
