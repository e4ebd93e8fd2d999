//! Environment source: `SLTABLE__OUTPUT__TABLE_STYLE=utf8` sets `output.table_style`.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

pub const PREFIX: &str = "SLTABLE";
pub const SEPARATOR: &str = "__";

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix(PREFIX)
            .prefix_separator(SEPARATOR)
            .separator(SEPARATOR)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("entities.volume.default_columns")
            .with_list_parse_key("entities.snapshot.default_columns")
            .with_list_parse_key("entities.access_host.default_columns")
            .with_list_parse_key("entities.subnet.default_columns")
            .with_list_parse_key("entities.hardware.default_columns")
            .with_list_parse_key("entities.user.default_columns"),
    ))
}
