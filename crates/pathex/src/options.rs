// File: src/options.rs
// Purpose: Compilation options shared by the tokenizer, renderer and regex synthesizer

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::template::Parameter;

/// Turns a raw parameter value into the text placed in a rendered path
pub type Encoder = Arc<dyn Fn(&str, &Parameter) -> String + Send + Sync>;

/// Characters a URI component keeps verbatim besides ASCII alphanumerics
const COMPONENT_SAFE: &str = "-_.!~*'()";

/// Percent-encodes `value` as a single URI component
///
/// This is the encoder used when [`Options::encode`] is not set. ASCII
/// alphanumerics and `-_.!~*'()` pass through; everything else is
/// percent-encoded as UTF-8.
///
/// ```
/// use pathex::{encode_uri_component, tokenize, Options, Token};
///
/// let tokens = tokenize("/:q", &Options::default());
/// let Token::Parameter(param) = &tokens[0] else { unreachable!() };
/// assert_eq!(encode_uri_component("a b/c", param), "a%20b%2Fc");
/// assert_eq!(encode_uri_component("it's(ok)*!", param), "it's(ok)*!");
/// ```
pub fn encode_uri_component(value: &str, _param: &Parameter) -> String {
    let mut encoded = String::with_capacity(value.len());
    let mut buf = [0u8; 4];

    for c in value.chars() {
        if c.is_ascii_alphanumeric() || COMPONENT_SAFE.contains(c) {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }

    encoded
}

/// Options controlling how templates are tokenized, rendered and matched
///
/// Options are read-only inputs: every compile call borrows them and nothing
/// is written back. Deserializes from TOML/JSON with the same defaults as
/// [`Options::default`]; the encoder can only be set programmatically.
///
/// # Examples
///
/// ```
/// use pathex::Options;
///
/// let options = Options::default()
///     .with_end(false)
///     .with_sensitive(true)
///     .with_ends_with(["?", "#"]);
///
/// assert_eq!(options.delimiter, '/');
/// assert!(options.start);
/// assert!(!options.end);
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct Options {
    /// Default segment delimiter (default: `/`)
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Characters allowed to become a parameter prefix (default: any)
    #[serde(default)]
    pub whitelist: Option<String>,

    /// Disallow an optional trailing delimiter (default: false)
    #[serde(default)]
    pub strict: bool,

    /// Anchor the expression at the start of the path (default: true)
    #[serde(default = "default_true")]
    pub start: bool,

    /// Anchor the expression at the end of the path (default: true)
    #[serde(default = "default_true")]
    pub end: bool,

    /// Extra sequences accepted as the end of a match
    #[serde(default)]
    pub ends_with: Vec<String>,

    /// Case-sensitive matching (default: false)
    #[serde(default)]
    pub sensitive: bool,

    #[serde(skip)]
    pub encode: Option<Encoder>,
}

fn default_delimiter() -> char {
    '/'
}

fn default_true() -> bool {
    true
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            whitelist: None,
            strict: false,
            start: true,
            end: true,
            ends_with: Vec::new(),
            sensitive: false,
            encode: None,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("delimiter", &self.delimiter)
            .field("whitelist", &self.whitelist)
            .field("strict", &self.strict)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("ends_with", &self.ends_with)
            .field("sensitive", &self.sensitive)
            .field("encode", &self.encode.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Restricts which characters may be absorbed as a parameter prefix
    pub fn with_whitelist(mut self, whitelist: impl Into<String>) -> Self {
        self.whitelist = Some(whitelist.into());
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_start(mut self, start: bool) -> Self {
        self.start = start;
        self
    }

    pub fn with_end(mut self, end: bool) -> Self {
        self.end = end;
        self
    }

    pub fn with_ends_with<I, S>(mut self, terminators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ends_with.extend(terminators.into_iter().map(Into::into));
        self
    }

    pub fn with_sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    /// Replaces the default percent-encoding used when rendering
    pub fn with_encode<F>(mut self, encode: F) -> Self
    where
        F: Fn(&str, &Parameter) -> String + Send + Sync + 'static,
    {
        self.encode = Some(Arc::new(encode) as Encoder);
        self
    }

    /// Whether `c` may become a parameter prefix
    pub fn allows_prefix(&self, c: char) -> bool {
        self.whitelist
            .as_deref()
            .map_or(true, |whitelist| whitelist.contains(c))
    }

    /// The configured encoder, falling back to [`encode_uri_component`]
    pub fn encoder(&self) -> Encoder {
        self.encode
            .clone()
            .unwrap_or_else(|| Arc::new(encode_uri_component) as Encoder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert_eq!(options.delimiter, '/');
        assert_eq!(options.whitelist, None);
        assert!(!options.strict);
        assert!(options.start);
        assert!(options.end);
        assert!(options.ends_with.is_empty());
        assert!(!options.sensitive);
        assert!(options.encode.is_none());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let options: Options = toml::from_str("").unwrap();
        assert_eq!(options.delimiter, '/');
        assert!(options.start && options.end);
    }

    #[test]
    fn test_custom_toml() {
        let toml = r##"
            delimiter = "."
            whitelist = "./"
            end = false
            ends_with = ["?", "#"]
            sensitive = true
        "##;
        let options: Options = toml::from_str(toml).unwrap();
        assert_eq!(options.delimiter, '.');
        assert_eq!(options.whitelist.as_deref(), Some("./"));
        assert!(!options.end);
        assert!(options.start);
        assert_eq!(options.ends_with, vec!["?", "#"]);
        assert!(options.sensitive);
    }

    #[test]
    fn test_allows_prefix() {
        assert!(Options::default().allows_prefix('x'));

        let options = Options::default().with_whitelist("/.");
        assert!(options.allows_prefix('/'));
        assert!(options.allows_prefix('.'));
        assert!(!options.allows_prefix('-'));
    }

    #[test]
    fn test_custom_encoder_is_used() {
        let options = Options::default().with_encode(|value, _| value.to_uppercase());
        let param = Parameter {
            name: "id".into(),
            prefix: None,
            delimiter: '/',
            optional: false,
            repeat: false,
            pattern: ".*".to_string(),
        };
        assert_eq!((options.encoder())("abc", &param), "ABC");
        assert_eq!((Options::default().encoder())("a b", &param), "a%20b");
    }

    #[test]
    fn test_default_encoder_matches_uri_component_rules() {
        let param = Parameter {
            name: "q".into(),
            prefix: None,
            delimiter: '/',
            optional: false,
            repeat: false,
            pattern: ".*".to_string(),
        };
        assert_eq!(encode_uri_component("it's(ok)*!", &param), "it's(ok)*!");
        assert_eq!(encode_uri_component("a-b_c.d~e", &param), "a-b_c.d~e");
        assert_eq!(encode_uri_component("a/b?c#d&e", &param), "a%2Fb%3Fc%23d%26e");
        assert_eq!(encode_uri_component("100%", &param), "100%25");
        assert_eq!(encode_uri_component("café", &param), "caf%C3%A9");
    }
}
