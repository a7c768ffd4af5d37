//! Config command implementation

use crate::cli::Cli;
use crate::config_loader::load_config_with_overrides;
use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};
use anyhow::Result;
use pathfinder_core::config::CliConfigOverrides;

pub fn execute(cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config_with_overrides(cli, CliConfigOverrides::default())?;

    let mut entries: Vec<ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry {
            key,
            value,
            source: format!("{:?}", source),
        })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));

    if output.is_json() {
        output.result(ConfigOutput { entries })?;
    } else {
        output.section("Configuration");
        output.table(entries);
    }

    Ok(())
}
