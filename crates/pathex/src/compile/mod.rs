/// Compile module: token sequences → executable artifacts
///
/// - [`renderer`] builds path renderers (parameter values → path)
/// - [`regexp`] builds matching expressions and their key lists
/// - [`params`] holds the values a renderer consumes

pub mod params;
pub mod regexp;
pub mod renderer;

// Re-export commonly used types
pub use params::{ParamValue, Params};
pub use regexp::{regex_from_tokens, PathMatch, PathRegex};
pub use renderer::{compile, render_from_tokens, Renderer};
