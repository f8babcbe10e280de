use anyhow::Result;
use pathex::{tokenize, Options};
use tracing::info;

pub fn run(template: &str, options: &Options) -> Result<()> {
    let tokens = tokenize(template, options);
    info!(template, tokens = tokens.len(), "parsed template");

    println!("{}", serde_json::to_string_pretty(&tokens)?);
    Ok(())
}
