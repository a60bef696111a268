//! Handler for the `config` command group.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Execute `config show`.
pub fn execute_show(path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(path)?;

    output::section("Effective Configuration");
    output::field(
        "Source",
        path.map_or_else(|| "built-in defaults".to_owned(), |p| p.display().to_string()),
    );
    output::lines(&config.to_toml());
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    Config::load_or_default(path)?;
    match path {
        Some(path) => output::success(&format!("{} is valid", path.display())),
        None => output::success("Built-in defaults are valid"),
    }
    Ok(())
}
