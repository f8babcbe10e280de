use anyhow::{Context, Result};
use pathex::{compile, Options, Params};

pub fn run(template: &str, data: &str, options: &Options) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(data).context("--data is not valid JSON")?;
    let params = Params::from_json(&value).context("--data must be a JSON object")?;

    let renderer = compile(template, options)?;
    println!("{}", renderer.render(&params)?);
    Ok(())
}
