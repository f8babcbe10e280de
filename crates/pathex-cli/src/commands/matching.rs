use anyhow::Result;
use pathex::{compile_path, Options};
use serde_json::{json, Map, Value};
use tracing::info;

pub fn run(template: &str, path: &str, options: &Options) -> Result<()> {
    let re = compile_path(template, options)?;

    let Some(found) = re.exec(path)? else {
        anyhow::bail!("\"{path}\" does not match \"{template}\"");
    };
    info!(matched = %found.matched, index = found.index, "path matched");

    let mut params = Map::new();
    for (key, _) in &found.params {
        let name = key.name.as_key();
        let value = found.get(&name).map_or(Value::Null, |v| Value::String(v.to_string()));
        params.insert(name.into_owned(), value);
    }

    let output = json!({
        "path": found.matched,
        "index": found.index,
        "params": params,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
