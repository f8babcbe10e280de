/// Template tokenizer
///
/// Turns a path template such as `/users/:id(\d+)/posts/:slug*` into an
/// ordered `Vec<Token>`. The scan is a fold over the matches of one shared,
/// immutable scanning expression; all mutable state (literal buffer, cursor,
/// anonymous parameter counter) lives in a per-call [`ScanState`].
///
/// The tokenizer has no reject state: any text that is not a parameter or an
/// escape is literal.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, trace};

use super::escape::{escape_group, escape_string};
use super::token::{ParamName, Parameter, Token};
use crate::options::Options;

/// Recognises, in priority order:
/// 1. an escaped character `\X`
/// 2. a named parameter `:name` with an optional `(pattern)`
/// 3. an anonymous `(pattern)` group
///
/// followed by an optional `+`, `*` or `?` modifier for 2 and 3.
static SCANNER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(\\.)|(?::([A-Za-z0-9_]+)(?:\(((?:\\.|[^\\()])+)\))?|\(((?:\\.|[^\\()])+)\))([+*?])?",
    )
    .expect("template scanner expression is valid")
});

/// Accumulator for the fold over scanner matches
///
/// `path` is the literal text collected since the last emitted token and
/// `path_escaped` records that its tail came from an escape, which disables
/// prefix detection until the buffer is flushed.
struct ScanState<'a> {
    template: &'a str,
    options: &'a Options,
    tokens: Vec<Token>,
    path: String,
    path_escaped: bool,
    index: usize,
    anonymous: usize,
}

impl<'a> ScanState<'a> {
    fn new(template: &'a str, options: &'a Options) -> Self {
        Self {
            template,
            options,
            tokens: Vec::new(),
            path: String::new(),
            path_escaped: false,
            index: 0,
            anonymous: 0,
        }
    }

    /// Processes one scanner match
    fn with_match(mut self, caps: Captures<'_>) -> Self {
        let Some(whole) = caps.get(0) else {
            return self;
        };

        self.path.push_str(&self.template[self.index..whole.start()]);
        self.index = whole.end();

        if let Some(escaped) = caps.get(1) {
            self.path.extend(escaped.as_str().chars().nth(1));
            self.path_escaped = true;
            return self;
        }

        let name = caps.get(2).map(|m| m.as_str());
        let group = caps.get(3).or_else(|| caps.get(4)).map(|m| m.as_str());
        let modifier = caps.get(5).and_then(|m| m.as_str().chars().next());

        let prefix = self.take_prefix();
        self.flush_literal();

        let name = match name {
            Some(name) => ParamName::from(name),
            None => self.next_anonymous_name(),
        };
        let delimiter = prefix.unwrap_or(self.options.delimiter);
        let pattern = match group {
            Some(group) => escape_group(group),
            None => default_pattern(delimiter, self.options.delimiter),
        };

        let param = Parameter {
            name,
            prefix,
            delimiter,
            optional: matches!(modifier, Some('?') | Some('*')),
            repeat: matches!(modifier, Some('+') | Some('*')),
            pattern,
        };
        trace!(?param, "parameter token");
        self.tokens.push(Token::Parameter(param));
        self
    }

    /// Detaches the last buffered character when it may act as a prefix
    fn take_prefix(&mut self) -> Option<char> {
        if self.path_escaped {
            return None;
        }

        let last = self.path.chars().last()?;
        if !self.options.allows_prefix(last) {
            return None;
        }

        self.path.pop();
        Some(last)
    }

    /// Emits the buffered literal text, if any
    fn flush_literal(&mut self) {
        if self.path.is_empty() {
            return;
        }

        let literal = std::mem::take(&mut self.path);
        trace!(literal = %literal, "literal token");
        self.tokens.push(Token::Literal(literal));
        self.path_escaped = false;
    }

    fn next_anonymous_name(&mut self) -> ParamName {
        let name = ParamName::Index(self.anonymous);
        self.anonymous += 1;
        name
    }

    /// Emits whatever text remains after the last match
    fn finish(mut self) -> Vec<Token> {
        let rest = &self.template[self.index..];
        if !self.path.is_empty() || !rest.is_empty() {
            self.path.push_str(rest);
            self.tokens.push(Token::Literal(self.path));
        }
        self.tokens
    }
}

/// Pattern used by parameters without an explicit `(pattern)`
///
/// Matches one or more characters other than the parameter's delimiter. When
/// the delimiter differs from the default one, the default delimiter is
/// excluded too so the parameter cannot swallow a whole default segment.
fn default_pattern(delimiter: char, default_delimiter: char) -> String {
    let excluded = if delimiter == default_delimiter {
        delimiter.to_string()
    } else {
        format!("{}{}", delimiter, default_delimiter)
    };

    format!("[^{}]+?", escape_string(&excluded))
}

/// Tokenizes a path template (pure function)
///
/// # Examples
///
/// ```
/// use pathex::{tokenize, Options, Parameter, Token};
///
/// let tokens = tokenize("/a/:b", &Options::default());
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Literal("/a".to_string()),
///         Token::Parameter(Parameter {
///             name: "b".into(),
///             prefix: Some('/'),
///             delimiter: '/',
///             optional: false,
///             repeat: false,
///             pattern: "[^/]+?".to_string(),
///         }),
///     ]
/// );
/// ```
///
/// # Template syntax
///
/// - `:name` named parameter, `:name(pattern)` with a custom pattern
/// - `(pattern)` anonymous parameter, numbered from zero
/// - `+` one or more, `*` zero or more, `?` optional
/// - `\X` the literal character `X`, never used as a prefix
pub fn tokenize(template: &str, options: &Options) -> Vec<Token> {
    let tokens = SCANNER
        .captures_iter(template)
        .fold(ScanState::new(template, options), ScanState::with_match)
        .finish();

    debug!(template, tokens = tokens.len(), "tokenized path template");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn param(name: impl Into<ParamName>, prefix: Option<char>, pattern: &str) -> Parameter {
        Parameter {
            name: name.into(),
            prefix,
            delimiter: prefix.unwrap_or('/'),
            optional: false,
            repeat: false,
            pattern: pattern.to_string(),
        }
    }

    fn lit(text: &str) -> Token {
        Token::Literal(text.to_string())
    }

    #[test]
    fn test_static_template() {
        let tokens = tokenize("/about/team", &Options::default());
        assert_eq!(tokens, vec![lit("/about/team")]);
    }

    #[test]
    fn test_empty_template() {
        assert!(tokenize("", &Options::default()).is_empty());
    }

    #[test]
    fn test_named_parameter_takes_prefix() {
        let tokens = tokenize("/a/:b", &Options::default());
        assert_eq!(
            tokens,
            vec![lit("/a"), Token::Parameter(param("b", Some('/'), "[^/]+?"))]
        );
    }

    #[test]
    fn test_custom_pattern() {
        let tokens = tokenize("/user/:id(\\d+)", &Options::default());
        assert_eq!(
            tokens,
            vec![lit("/user"), Token::Parameter(param("id", Some('/'), "\\d+"))]
        );
    }

    #[test]
    fn test_anonymous_groups_are_numbered() {
        let tokens = tokenize("/(\\d+)/:x/(.*)", &Options::default());
        let names: Vec<String> = tokens
            .iter()
            .filter_map(Token::as_parameter)
            .map(|p| p.name.to_string())
            .collect();
        assert_eq!(names, vec!["0", "x", "1"]);
        assert_eq!(tokens[0].as_parameter().unwrap().pattern, "\\d+");
        assert_eq!(tokens[2].as_parameter().unwrap().pattern, ".*");
    }

    #[test]
    fn test_modifiers() {
        let tokens = tokenize("/:a?/:b*/:c+", &Options::default());
        let flags: Vec<(bool, bool)> = tokens
            .iter()
            .filter_map(Token::as_parameter)
            .map(|p| (p.optional, p.repeat))
            .collect();
        assert_eq!(flags, vec![(true, false), (true, true), (false, true)]);
    }

    #[test]
    fn test_non_slash_prefix_excludes_default_delimiter() {
        let tokens = tokenize("/file.:ext", &Options::default());
        assert_eq!(
            tokens,
            vec![lit("/file"), Token::Parameter(param("ext", Some('.'), "[^\\./]+?"))]
        );
    }

    #[test]
    fn test_parameter_without_prefix() {
        let tokens = tokenize(":first", &Options::default());
        assert_eq!(tokens, vec![Token::Parameter(param("first", None, "[^/]+?"))]);
    }

    #[test]
    fn test_escaped_character_is_literal_and_not_a_prefix() {
        let tokens = tokenize("/a\\/:b", &Options::default());
        assert_eq!(
            tokens,
            vec![lit("/a/"), Token::Parameter(param("b", None, "[^/]+?"))]
        );

        let tokens = tokenize("/\\:id", &Options::default());
        assert_eq!(tokens, vec![lit("/:id")]);
    }

    #[test]
    fn test_whitelist_limits_prefixes() {
        let options = Options::default().with_whitelist("/");
        let tokens = tokenize("/a-:b", &options);
        assert_eq!(
            tokens,
            vec![lit("/a-"), Token::Parameter(param("b", None, "[^/]+?"))]
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let options = Options::default().with_delimiter('.');
        let tokens = tokenize("a.:b", &options);
        assert_eq!(
            tokens,
            vec![lit("a"), Token::Parameter(param("b", Some('.'), "[^\\.]+?"))]
        );
    }

    #[test]
    fn test_trailing_literal() {
        let tokens = tokenize("/:id/edit", &Options::default());
        assert_eq!(
            tokens,
            vec![Token::Parameter(param("id", Some('/'), "[^/]+?")), lit("/edit")]
        );
    }

    #[test]
    fn test_group_escapes_are_applied() {
        let tokens = tokenize("/:v(a|b$)", &Options::default());
        assert_eq!(tokens[0].as_parameter().unwrap().pattern, "a|b\\$");
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let tokens = tokenize("/:id/:id", &Options::default());
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], tokens[1]);
    }

    #[test]
    fn test_unicode_literals_survive() {
        let tokens = tokenize("/café/:nom", &Options::default());
        assert_eq!(tokens[0], lit("/café"));
        assert_eq!(tokens[1].as_parameter().unwrap().prefix, Some('/'));
    }
}
