mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pathex::{Config, Options};

#[derive(Parser)]
#[command(name = "pathex", about = "Compile path templates into renderers and matchers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of a template as JSON
    Parse {
        /// Path template (e.g. /users/:id)
        template: String,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Print the matching expression and its keys
    Regex {
        /// One or more templates; several are joined as alternatives
        #[arg(required = true)]
        templates: Vec<String>,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Match a path and print the extracted parameters as JSON
    Match {
        /// Path template (e.g. /users/:id)
        template: String,
        /// Path to test (e.g. /users/42)
        path: String,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Render a path from JSON parameters
    Render {
        /// Path template (e.g. /users/:id)
        template: String,
        /// Parameters as a JSON object (e.g. '{"id": 42}')
        #[arg(long, default_value = "{}")]
        data: String,
        #[command(flatten)]
        options: OptionArgs,
    },
}

/// Flags shared by every subcommand; they override the config file
#[derive(Args)]
struct OptionArgs {
    /// Config file (default: ./pathex.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Segment delimiter
    #[arg(long)]
    delimiter: Option<char>,
    /// Characters allowed as parameter prefixes
    #[arg(long)]
    whitelist: Option<String>,
    /// Do not allow an optional trailing delimiter
    #[arg(long)]
    strict: bool,
    /// Match case-sensitively
    #[arg(long)]
    sensitive: bool,
    /// Do not anchor at the start of the path
    #[arg(long)]
    no_start: bool,
    /// Do not anchor at the end of the path
    #[arg(long)]
    no_end: bool,
    /// Extra end terminators (repeatable)
    #[arg(long = "ends-with")]
    ends_with: Vec<String>,
}

impl OptionArgs {
    fn resolve(&self) -> anyhow::Result<Options> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_default()?,
        };

        let mut options = config.options;
        if let Some(delimiter) = self.delimiter {
            options = options.with_delimiter(delimiter);
        }
        if let Some(whitelist) = &self.whitelist {
            options = options.with_whitelist(whitelist.clone());
        }
        if self.strict {
            options = options.with_strict(true);
        }
        if self.sensitive {
            options = options.with_sensitive(true);
        }
        if self.no_start {
            options = options.with_start(false);
        }
        if self.no_end {
            options = options.with_end(false);
        }

        Ok(options.with_ends_with(self.ends_with.iter().cloned()))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { template, options } => options
            .resolve()
            .and_then(|options| commands::parse::run(&template, &options)),
        Commands::Regex { templates, options } => options
            .resolve()
            .and_then(|options| commands::regex::run(&templates, &options)),
        Commands::Match {
            template,
            path,
            options,
        } => options
            .resolve()
            .and_then(|options| commands::matching::run(&template, &path, &options)),
        Commands::Render {
            template,
            data,
            options,
        } => options
            .resolve()
            .and_then(|options| commands::render::run(&template, &data, &options)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_for(args: &[&str]) -> Options {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Match { options, .. } => options.resolve().unwrap(),
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let options = options_for(&[
            "pathex",
            "match",
            "/a/:id",
            "/a/1",
            "--config",
            "does-not-exist.toml",
            "--strict",
            "--no-end",
            "--ends-with",
            "?",
            "--delimiter",
            ".",
        ]);

        assert!(options.strict);
        assert!(!options.end);
        assert!(options.start);
        assert_eq!(options.delimiter, '.');
        assert_eq!(options.ends_with, vec!["?".to_string()]);
    }

    #[test]
    fn test_regex_requires_a_template() {
        assert!(Cli::try_parse_from(["pathex", "regex"]).is_err());
    }
}
