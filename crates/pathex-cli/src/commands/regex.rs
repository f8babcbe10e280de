use anyhow::Result;
use pathex::{compile_path, Options, PathInput};

pub fn run(templates: &[String], options: &Options) -> Result<()> {
    let input = match templates {
        [single] => PathInput::from(single.as_str()),
        many => PathInput::from(many.to_vec()),
    };

    let re = compile_path(input, options)?;

    println!("{}", re.as_str());
    if !re.keys().is_empty() {
        println!("{}", serde_json::to_string_pretty(re.keys())?);
    }
    Ok(())
}
