//! # pathex
//!
//! Compiles route path templates into two artifacts:
//! - a **renderer** that builds concrete paths from parameter values
//! - a **path expression** (regex + ordered keys) that matches paths and
//!   extracts their parameters
//!
//! ## Template Syntax
//!
//! - Named parameters (`/users/:id`)
//! - Custom patterns (`/users/:id(\d+)`)
//! - Anonymous parameters (`/files/(.*)`)
//! - Optional (`/:lang?`), zero-or-more (`/:path*`) and one-or-more (`/:path+`)
//! - Escapes (`/\:literal`)
//!
//! A delimiter-like character in front of a parameter (usually `/`) becomes
//! the parameter's prefix, so `/posts/:id?` matches both `/posts` and
//! `/posts/7`.
//!
//! ## Example
//!
//! ```
//! use pathex::{compile, compile_path, Options, Params};
//!
//! let options = Options::default();
//!
//! let re = compile_path("/user/:id/:name", &options).unwrap();
//! let m = re.exec("/user/42/ann").unwrap().unwrap();
//! assert_eq!(m.get("id"), Some("42"));
//! assert_eq!(m.get("name"), Some("ann"));
//!
//! let renderer = compile("/user/:id/:name", &options).unwrap();
//! let path = renderer
//!     .render(&Params::new().with("id", 42).with("name", "ann"))
//!     .unwrap();
//! assert_eq!(path, "/user/42/ann");
//! ```
//!
//! Compiled renderers and expressions are immutable and cheap to share;
//! nothing is cached between calls.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod compile;
pub mod config;
mod dispatch;
mod error;
mod options;
pub mod template;

// Re-export public types
pub use compile::{
    compile, regex_from_tokens, render_from_tokens, PathMatch, PathRegex, ParamValue, Params,
    Renderer,
};
pub use config::Config;
pub use dispatch::{array_to_regex, compile_path, regex_to_regex, string_to_regex, PathInput};
pub use error::{Error, RenderError, Result};
pub use options::{encode_uri_component, Encoder, Options};
pub use template::{escape_group, escape_string, tokenize, Key, ParamName, Parameter, Token};
