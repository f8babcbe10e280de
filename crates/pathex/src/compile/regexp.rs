// File: src/compile/regexp.rs
// Purpose: Token sequence → matching regular expression + key list

use fancy_regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::template::{escape_string, Key, Parameter, Token};

/// A compiled path expression together with the keys of its capture groups
///
/// `keys()[i]` describes capture group `i + 1`. The expression uses
/// lookahead for the non-anchored end modes, so it is backed by
/// [`fancy_regex`].
///
/// # Examples
///
/// ```
/// use pathex::{compile_path, Options};
///
/// let re = compile_path("/user/:id", &Options::default()).unwrap();
/// let m = re.exec("/user/42").unwrap().unwrap();
///
/// assert_eq!(m.get("id"), Some("42"));
/// assert!(!re.is_match("/user/42/extra").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PathRegex {
    regex: Regex,
    source: String,
    keys: Vec<Key>,
}

impl PathRegex {
    /// Compiles `source`, applying the case-insensitive flag unless `sensitive`
    pub(crate) fn build(source: String, keys: Vec<Key>, sensitive: bool) -> Result<Self> {
        let flagged = if sensitive {
            source.clone()
        } else {
            format!("(?i){}", source)
        };

        let regex = Regex::new(&flagged).map_err(|err| Error::InvalidExpression {
            pattern: flagged.clone(),
            source: Box::new(err),
        })?;

        Ok(Self { regex, source, keys })
    }

    /// Wraps an already compiled expression without touching it
    pub(crate) fn from_regex(regex: Regex, keys: Vec<Key>) -> Self {
        Self {
            source: regex.as_str().to_string(),
            regex,
            keys,
        }
    }

    /// Expression source without flags
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn into_parts(self) -> (Regex, Vec<Key>) {
        (self.regex, self.keys)
    }

    pub fn is_match(&self, path: &str) -> Result<bool> {
        self.regex.is_match(path).map_err(|err| Error::Match {
            path: path.to_string(),
            source: Box::new(err),
        })
    }

    /// Matches `path` and extracts one value per key
    pub fn exec(&self, path: &str) -> Result<Option<PathMatch>> {
        let captures = self.regex.captures(path).map_err(|err| Error::Match {
            path: path.to_string(),
            source: Box::new(err),
        })?;

        Ok(captures.and_then(|caps| {
            let whole = caps.get(0)?;
            let params = self
                .keys
                .iter()
                .enumerate()
                .map(|(index, key)| {
                    let value = caps.get(index + 1).map(|m| m.as_str().to_string());
                    (key.clone(), value)
                })
                .collect();

            Some(PathMatch {
                matched: whole.as_str().to_string(),
                index: whole.start(),
                params,
            })
        }))
    }
}

/// Result of a successful [`PathRegex::exec`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
    /// The matched portion of the input
    pub matched: String,
    /// Byte offset of the match in the input
    pub index: usize,
    /// One entry per key, `None` for optional groups that did not participate
    pub params: Vec<(Key, Option<String>)>,
}

impl PathMatch {
    /// First captured value among the keys named `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .filter(|(key, _)| key.name.as_key() == name)
            .find_map(|(_, value)| value.as_deref())
    }
}

/// Capture expression for one parameter, including its prefix handling
fn parameter_source(param: &Parameter) -> String {
    let capture = if param.repeat {
        format!(
            "(?:{pattern})(?:{delimiter}(?:{pattern}))*",
            pattern = param.pattern,
            delimiter = escape_string(&param.delimiter.to_string()),
        )
    } else {
        param.pattern.clone()
    };

    let prefix = escape_string(&param.prefix_str());

    match (param.optional, prefix.is_empty()) {
        (true, true) => format!("({})?", capture),
        (true, false) => format!("(?:{}({}))?", prefix, capture),
        (false, _) => format!("{}({})", prefix, capture),
    }
}

/// Builds the unflagged expression source, appending a key per parameter
pub(crate) fn tokens_to_source(tokens: &[Token], keys: &mut Vec<Key>, options: &Options) -> String {
    let delimiter = escape_string(&options.delimiter.to_string());
    let ends_with = options
        .ends_with
        .iter()
        .map(|terminator| escape_string(terminator))
        .chain(std::iter::once("$".to_string()))
        .collect::<Vec<_>>()
        .join("|");

    let mut route = String::from(if options.start { "^" } else { "" });

    for token in tokens {
        match token {
            Token::Literal(text) => route.push_str(&escape_string(text)),
            Token::Parameter(param) => {
                keys.push(Key::from(param));
                route.push_str(&parameter_source(param));
            }
        }
    }

    if options.end {
        if !options.strict {
            route.push_str(&format!("(?:{})?", delimiter));
        }

        if ends_with == "$" {
            route.push('$');
        } else {
            route.push_str(&format!("(?={})", ends_with));
        }
    } else {
        // A match may stop early only at a delimiter or a terminator
        let is_end_delimited = match tokens.last() {
            Some(Token::Literal(text)) => text.ends_with(options.delimiter),
            Some(Token::Parameter(_)) => false,
            None => true,
        };

        if !options.strict {
            route.push_str(&format!("(?:{}(?={}))?", delimiter, ends_with));
        }

        if !is_end_delimited {
            route.push_str(&format!("(?={}|{})", delimiter, ends_with));
        }
    }

    route
}

/// Compiles a token sequence into a [`PathRegex`]
///
/// # Examples
///
/// ```
/// use pathex::{regex_from_tokens, tokenize, Options};
///
/// let options = Options::default().with_end(false);
/// let re = regex_from_tokens(&tokenize("/user/:id", &options), &options).unwrap();
///
/// let m = re.exec("/user/42/extra").unwrap().unwrap();
/// assert_eq!(m.matched, "/user/42");
/// assert!(!re.is_match("/users/42").unwrap());
/// ```
pub fn regex_from_tokens(tokens: &[Token], options: &Options) -> Result<PathRegex> {
    let mut keys = Vec::new();
    let source = tokens_to_source(tokens, &mut keys, options);
    debug!(source = %source, keys = keys.len(), "synthesized path expression");
    PathRegex::build(source, keys, options.sensitive)
}
