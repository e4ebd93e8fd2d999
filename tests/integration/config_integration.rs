//! Config layering: defaults, global file, explicit file, environment.

use sltable::cli::RunContext;
use sltable::config::ConfigLoader;
use sltable::render::TableStyle;
use sltable::{ColumnName, EntityKind, RenderMode};
use tempfile::TempDir;

use super::test_utils::{with_xdg_env, write_global_config};

#[test]
fn test_defaults_when_no_global_file() {
    let dir = TempDir::new().unwrap();
    let config = with_xdg_env(&dir, &[], || ConfigLoader::load(None).unwrap());
    assert_eq!(config.output.default_mode, RenderMode::Table);
    assert_eq!(config.output.table_style, TableStyle::Plain);
    assert_eq!(config.logging.level, "warn");
    assert!(config.entities.is_empty());
}

#[test]
fn test_global_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write_global_config(
        &dir,
        r#"
[output]
table_style = "ascii"

[entities.hardware]
default_columns = ["hostname", "tags"]
"#,
    );
    let config = with_xdg_env(&dir, &[], || {
        assert_eq!(ConfigLoader::xdg_config_path(), Some(path.clone()));
        ConfigLoader::load(None).unwrap()
    });
    assert_eq!(config.output.table_style, TableStyle::Ascii);

    let ctx = RunContext::from_config(config).unwrap();
    let hardware = ctx.registry().entity(EntityKind::Hardware);
    assert_eq!(
        hardware.default_columns(),
        &[ColumnName::new("hostname"), ColumnName::new("tags")]
    );
    assert!(hardware.is_displayable(&ColumnName::new("domain")));
}

#[test]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    write_global_config(&dir, "[output]\ndefault_mode = \"table\"\n");
    let config = with_xdg_env(
        &dir,
        &[
            ("SLTABLE__OUTPUT__DEFAULT_MODE", "json"),
            ("SLTABLE__OUTPUT__COLOR", "false"),
        ],
        || ConfigLoader::load(None).unwrap(),
    );
    assert_eq!(config.output.default_mode, RenderMode::Json);
    assert!(!config.output.color);
}

#[test]
fn test_explicit_file_replaces_global() {
    let dir = TempDir::new().unwrap();
    write_global_config(&dir, "[output]\ntable_style = \"ascii\"\n");
    let explicit = dir.path().join("explicit.toml");
    std::fs::write(&explicit, "[entities.user]\ndefault_sort = \"email\"\n").unwrap();

    let config = with_xdg_env(&dir, &[], || ConfigLoader::load(Some(explicit.as_path())).unwrap());
    assert_eq!(config.output.table_style, TableStyle::Plain);

    let ctx = RunContext::from_config(config).unwrap();
    assert_eq!(
        ctx.registry().entity(EntityKind::User).default_sort().column(),
        Some(&ColumnName::new("email"))
    );
}

#[test]
fn test_invalid_override_fails_at_startup() {
    let dir = TempDir::new().unwrap();
    write_global_config(&dir, "[entities.volume]\ndefault_columns = [\"mount_addr\"]\n");
    let result = with_xdg_env(&dir, &[], || RunContext::new(None));
    let err = result.err().unwrap();
    assert!(err.to_string().contains("mount_addr"), "{}", err);
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");
    let result = with_xdg_env(&dir, &[], || ConfigLoader::load(Some(missing.as_path())));
    assert!(result.is_err());
}
