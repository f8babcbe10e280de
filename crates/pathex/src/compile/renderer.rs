// File: src/compile/renderer.rs
// Purpose: Token sequence → path renderer

use std::fmt;

use regex::Regex;
use tracing::debug;

use super::params::{ParamValue, Params};
use crate::error::{Error, RenderError, Result};
use crate::options::{Encoder, Options};
use crate::template::{tokenize, Parameter, Token};

/// Renders concrete paths from parameter values
///
/// Built once per template; each parameter carries a validator anchored as
/// `^(?:pattern)$` which every encoded segment must satisfy. A renderer is
/// immutable and can be shared between threads.
///
/// # Examples
///
/// ```
/// use pathex::{compile, Options, Params};
///
/// let renderer = compile("/user/:id", &Options::default()).unwrap();
/// assert_eq!(renderer.render(&Params::new().with("id", 123)).unwrap(), "/user/123");
/// assert!(renderer.render(&Params::new()).is_err());
/// ```
#[derive(Clone)]
pub struct Renderer {
    tokens: Vec<Token>,
    validators: Vec<Option<Regex>>,
    encode: Encoder,
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl Renderer {
    /// Compiles the per-parameter validators for `tokens`
    pub fn new(tokens: Vec<Token>, options: &Options) -> Result<Self> {
        let validators = tokens
            .iter()
            .map(|token| token.as_parameter().map(validator).transpose())
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            tokens,
            validators,
            encode: options.encoder(),
        })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Renders a path using the encoder configured at compile time
    pub fn render(&self, data: &Params) -> std::result::Result<String, RenderError> {
        self.render_with(data, self.encode.as_ref())
    }

    /// Renders a path with a one-off encoder
    ///
    /// ```
    /// use pathex::{compile, Options, Params};
    ///
    /// let renderer = compile("/:name", &Options::default()).unwrap();
    /// let verbatim = |value: &str, _: &pathex::Parameter| value.to_string();
    /// assert_eq!(renderer.render_with(&Params::new().with("name", "a b"), &verbatim).unwrap(), "/a b");
    /// ```
    pub fn render_with(
        &self,
        data: &Params,
        encode: &dyn Fn(&str, &Parameter) -> String,
    ) -> std::result::Result<String, RenderError> {
        let mut path = String::new();

        for (token, validator) in self.tokens.iter().zip(&self.validators) {
            let param = match token {
                Token::Literal(text) => {
                    path.push_str(text);
                    continue;
                }
                Token::Parameter(param) => param,
            };

            match data.lookup(&param.name) {
                Some(ParamValue::Sequence(values)) => {
                    render_sequence(&mut path, param, values, validator.as_ref(), encode)?
                }
                Some(ParamValue::Scalar(value)) => {
                    let segment = encode(value, param);
                    if !is_valid(validator.as_ref(), &segment) {
                        return Err(RenderError::Mismatch {
                            name: param.name.clone(),
                            pattern: param.pattern.clone(),
                            segment,
                        });
                    }
                    path.extend(param.prefix);
                    path.push_str(&segment);
                }
                None if param.optional => {}
                None => {
                    return Err(RenderError::Missing {
                        name: param.name.clone(),
                        expected: if param.repeat { "a sequence" } else { "a string" },
                    });
                }
            }
        }

        Ok(path)
    }
}

fn render_sequence(
    path: &mut String,
    param: &Parameter,
    values: &[String],
    validator: Option<&Regex>,
    encode: &dyn Fn(&str, &Parameter) -> String,
) -> std::result::Result<(), RenderError> {
    if !param.repeat {
        return Err(RenderError::UnexpectedSequence {
            name: param.name.clone(),
        });
    }

    if values.is_empty() {
        return if param.optional {
            Ok(())
        } else {
            Err(RenderError::EmptySequence {
                name: param.name.clone(),
            })
        };
    }

    for (index, value) in values.iter().enumerate() {
        let segment = encode(value, param);
        if !is_valid(validator, &segment) {
            return Err(RenderError::SequenceMismatch {
                name: param.name.clone(),
                pattern: param.pattern.clone(),
                segment,
            });
        }

        if index == 0 {
            path.extend(param.prefix);
        } else {
            path.push(param.delimiter);
        }
        path.push_str(&segment);
    }

    Ok(())
}

fn is_valid(validator: Option<&Regex>, segment: &str) -> bool {
    validator.map_or(true, |re| re.is_match(segment))
}

fn validator(param: &Parameter) -> Result<Regex> {
    Regex::new(&format!("^(?:{})$", param.pattern)).map_err(|source| {
        Error::InvalidParameterPattern {
            name: param.name.clone(),
            pattern: param.pattern.clone(),
            source,
        }
    })
}

/// Builds a renderer from an existing token sequence
pub fn render_from_tokens(tokens: Vec<Token>, options: &Options) -> Result<Renderer> {
    Renderer::new(tokens, options)
}

/// Tokenizes `template` and builds its renderer
pub fn compile(template: &str, options: &Options) -> Result<Renderer> {
    let renderer = render_from_tokens(tokenize(template, options), options)?;
    debug!(template, "compiled path renderer");
    Ok(renderer)
}
