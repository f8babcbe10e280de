// File: src/dispatch.rs
// Purpose: Public entry point routing each kind of path input to its compiler

use fancy_regex::Regex;
use tracing::debug;

use crate::compile::regexp::{tokens_to_source, PathRegex};
use crate::error::Result;
use crate::options::Options;
use crate::template::{tokenize, Key};

/// Anything [`compile_path`] accepts
///
/// # Examples
///
/// ```
/// use pathex::PathInput;
///
/// let single = PathInput::from("/users/:id");
/// let many = PathInput::from(vec!["/a", "/b/:id"]);
/// let raw = PathInput::from(fancy_regex::Regex::new(r"^/(\d+)$").unwrap());
///
/// assert!(matches!(single, PathInput::Template(_)));
/// assert!(matches!(many, PathInput::Sequence(_)));
/// assert!(matches!(raw, PathInput::Regex(_)));
/// ```
#[derive(Debug, Clone)]
pub enum PathInput {
    /// A template in the path mini-language
    Template(String),
    /// Alternatives, matched as `(?:a|b|...)`
    Sequence(Vec<PathInput>),
    /// A prebuilt expression, used as is
    Regex(Regex),
}

impl From<&str> for PathInput {
    fn from(template: &str) -> Self {
        PathInput::Template(template.to_string())
    }
}

impl From<String> for PathInput {
    fn from(template: String) -> Self {
        PathInput::Template(template)
    }
}

impl From<Regex> for PathInput {
    fn from(regex: Regex) -> Self {
        PathInput::Regex(regex)
    }
}

impl<T: Into<PathInput>> From<Vec<T>> for PathInput {
    fn from(inputs: Vec<T>) -> Self {
        PathInput::Sequence(inputs.into_iter().map(Into::into).collect())
    }
}

/// Compiles any [`PathInput`] into a [`PathRegex`]
///
/// - templates go through the tokenizer and the regex synthesizer
/// - sequences compile each element into one shared key list and join them
///   as alternatives
/// - raw expressions pass through unchanged with one anonymous key per
///   capture group
///
/// # Examples
///
/// ```
/// use pathex::{compile_path, Options, PathInput};
///
/// let re = compile_path(vec!["/users/:id", "/members/:name"], &Options::default()).unwrap();
/// assert_eq!(re.keys().len(), 2);
///
/// let m = re.exec("/members/ann").unwrap().unwrap();
/// assert_eq!(m.get("id"), None);
/// assert_eq!(m.get("name"), Some("ann"));
/// ```
pub fn compile_path(input: impl Into<PathInput>, options: &Options) -> Result<PathRegex> {
    match input.into() {
        PathInput::Regex(regex) => Ok(regex_to_regex(regex)),
        PathInput::Sequence(inputs) => array_to_regex(&inputs, options),
        PathInput::Template(template) => string_to_regex(&template, options),
    }
}

/// Wraps a raw expression, producing anonymous keys `0..n` for its capture groups
///
/// ```
/// use pathex::{regex_to_regex, ParamName};
///
/// let re = regex_to_regex(fancy_regex::Regex::new(r"^\/(x)$").unwrap());
/// assert_eq!(re.keys().len(), 1);
/// assert_eq!(re.keys()[0].name, ParamName::Index(0));
/// ```
pub fn regex_to_regex(regex: Regex) -> PathRegex {
    let keys = anonymous_keys(&regex);
    PathRegex::from_regex(regex, keys)
}

/// Compiles alternatives into a single `(?:a|b|...)` expression
pub fn array_to_regex(inputs: &[PathInput], options: &Options) -> Result<PathRegex> {
    let mut keys = Vec::new();
    let source = alternation_source(inputs, &mut keys, options);
    debug!(source = %source, keys = keys.len(), "synthesized alternation");
    PathRegex::build(source, keys, options.sensitive)
}

/// Tokenizes and compiles one template
pub fn string_to_regex(template: &str, options: &Options) -> Result<PathRegex> {
    let mut keys = Vec::new();
    let source = tokens_to_source(&tokenize(template, options), &mut keys, options);
    debug!(template, source = %source, keys = keys.len(), "synthesized path expression");
    PathRegex::build(source, keys, options.sensitive)
}

/// Source text of one input, appending its keys in capture order
fn input_source(input: &PathInput, keys: &mut Vec<Key>, options: &Options) -> String {
    match input {
        PathInput::Regex(regex) => {
            keys.extend(anonymous_keys(regex));
            regex.as_str().to_string()
        }
        PathInput::Sequence(inputs) => alternation_source(inputs, keys, options),
        PathInput::Template(template) => {
            tokens_to_source(&tokenize(template, options), keys, options)
        }
    }
}

fn alternation_source(inputs: &[PathInput], keys: &mut Vec<Key>, options: &Options) -> String {
    let parts: Vec<String> = inputs
        .iter()
        .map(|input| input_source(input, keys, options))
        .collect();

    format!("(?:{})", parts.join("|"))
}

/// One opaque key per capture group (group 0, the whole match, excluded)
fn anonymous_keys(regex: &Regex) -> Vec<Key> {
    (0..regex.captures_len().saturating_sub(1))
        .map(Key::anonymous)
        .collect()
}
