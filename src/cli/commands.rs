//! CLI command implementations
//!
//! Each command builds what it needs from the loaded configuration, writes
//! one JSON object to the output and returns. Policy rejections are written as
//! structured error bodies and reported back as `CliErrorCode::Rejected`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::content::{PageType, SectionType};
use crate::observability::init_tracing;
use crate::policy::{fixed_sections, ExistingSection, PolicyEngine, REPEATABLE_SECTIONS};
use crate::schema::SectionSchemaRegistry;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_payload, write_error_body, write_response};

/// Config file picked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "pagesmith.json";

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Load the configuration named on the command line.
///
/// An explicit path must exist; the default path is optional.
pub fn load_config(explicit: Option<&Path>) -> CliResult<(AppConfig, ConfigSource)> {
    match explicit {
        Some(path) => Ok((AppConfig::load(path)?, ConfigSource::File(path.to_path_buf()))),
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if path.exists() {
                Ok((AppConfig::load(path)?, ConfigSource::File(path.to_path_buf())))
            } else {
                Ok((AppConfig::default(), ConfigSource::Defaults))
            }
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments, installs logging and dispatches the command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let (config, source) = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging, cli.verbose);
    tracing::debug!(?source, "configuration loaded");
    let stdout = io::stdout();
    run_command(&mut stdout.lock(), cli.command, &config, &source)
}

/// Run the appropriate command based on CLI args
pub fn run_command<W: Write>(
    out: &mut W,
    cmd: Command,
    config: &AppConfig,
    source: &ConfigSource,
) -> CliResult<()> {
    let registry = Arc::new(SectionSchemaRegistry::standard());
    match cmd {
        Command::Pages => write_response(out, pages()),
        Command::Schema { section } => write_response(out, schema(&registry, section)),
        Command::Validate { section, file } => {
            let payload = read_payload(file.as_deref())?;
            validate(out, &PolicyEngine::new(registry), section, &payload)
        }
        Command::Authorize {
            page,
            section,
            existing,
        } => authorize(out, &PolicyEngine::new(registry), page, section, &existing),
        Command::CheckConfig => write_response(out, check_config(config, source)),
    }
}

/// Page types with their allow-lists
pub fn pages() -> Value {
    let pages: Vec<Value> = PageType::ALL
        .iter()
        .map(|page_type| {
            let repeatable: Vec<SectionType> = REPEATABLE_SECTIONS
                .iter()
                .filter(|(p, _)| p == page_type)
                .map(|(_, s)| *s)
                .collect();
            json!({
                "page_type": page_type,
                "allowed_sections": fixed_sections(*page_type),
                "repeatable_sections": repeatable,
            })
        })
        .collect();
    json!({ "pages": pages })
}

/// Schema summary for one section type
pub fn schema(registry: &SectionSchemaRegistry, section_type: SectionType) -> Value {
    let (schema, is_generic) = registry.schema_or_generic(section_type);
    let (required, optional) = schema.field_paths();
    let all: Vec<&str> = required
        .iter()
        .chain(optional.iter())
        .map(String::as_str)
        .collect();

    json!({
        "section_type": section_type,
        "description": registry.description_for(section_type),
        "generic_schema": is_generic,
        "required_fields": required,
        "optional_fields": optional,
        "field_descriptions": registry.field_descriptions_for(section_type, &all),
        "example": registry.example_for(section_type),
    })
}

/// Validate one payload
pub fn validate<W: Write>(
    out: &mut W,
    engine: &PolicyEngine,
    section_type: SectionType,
    payload: &Value,
) -> CliResult<()> {
    match engine.authorize_content_write(section_type, payload) {
        Ok(()) => write_response(out, json!({ "section_type": section_type, "valid": true })),
        Err(e) => {
            write_error_body(out, &e.to_body())?;
            Err(CliError::rejected(e.to_string()))
        }
    }
}

/// Check one placement
pub fn authorize<W: Write>(
    out: &mut W,
    engine: &PolicyEngine,
    page_type: PageType,
    section_type: SectionType,
    existing: &[ExistingSection],
) -> CliResult<()> {
    match engine.authorize_create(page_type, section_type, existing) {
        Ok(()) => write_response(
            out,
            json!({
                "page_type": page_type,
                "section_type": section_type,
                "allowed": true,
            }),
        ),
        Err(e) => {
            write_error_body(out, &e.to_body())?;
            Err(CliError::rejected(e.to_string()))
        }
    }
}

/// Summary of a loaded (already validated) configuration
pub fn check_config(config: &AppConfig, source: &ConfigSource) -> Value {
    let source = match source {
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Defaults => "defaults".to_string(),
    };
    json!({
        "source": source,
        "languages": config.languages,
        "default_language": config.default_language,
        "log_level": config.logging.level,
        "notifications_enabled": config.notifications.enabled,
        "recipients": config.notifications.recipients.len(),
        "smtp_configured": config.notifications.smtp.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_pages_lists_every_page_type() {
        let value = pages();
        let pages = value["pages"].as_array().unwrap();
        assert_eq!(pages.len(), PageType::ALL.len());

        let blog = pages.iter().find(|p| p["page_type"] == "blog").unwrap();
        assert!(blog["allowed_sections"].is_null());

        let sports = pages.iter().find(|p| p["page_type"] == "sports").unwrap();
        assert_eq!(sports["repeatable_sections"], json!(["standings"]));
    }

    #[test]
    fn test_schema_summary() {
        let registry = SectionSchemaRegistry::standard();
        let value = schema(&registry, SectionType::Team);
        assert_eq!(value["generic_schema"], false);
        assert!(value["required_fields"]
            .as_array()
            .unwrap()
            .contains(&json!("members")));
        assert!(value["example"]["members"].is_array());

        let generic = schema(&registry, SectionType::Newsletter);
        assert_eq!(generic["generic_schema"], true);
        assert_eq!(generic["required_fields"], json!(["title", "description"]));
    }

    fn engine() -> PolicyEngine {
        PolicyEngine::new(Arc::new(SectionSchemaRegistry::standard()))
    }

    fn output(out: Vec<u8>) -> Value {
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_validate_rejection_is_exit_2() {
        let mut out = Vec::new();
        let err = validate(&mut out, &engine(), SectionType::Hero, &json!({})).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let body = output(out);
        assert_eq!(body["status"], "error");
        assert_eq!(body["code"], "CONTENT_VALIDATION_FAILED");
        assert_eq!(body["details"]["section_type"], "hero");
    }

    #[test]
    fn test_validate_accepts_example() {
        let registry = SectionSchemaRegistry::standard();
        let payload = registry.example_for(SectionType::Hero).cloned().unwrap();
        let mut out = Vec::new();
        validate(&mut out, &engine(), SectionType::Hero, &payload).unwrap();

        let body = output(out);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["data"]["valid"], true);
    }

    #[test]
    fn test_authorize_blog_rejected() {
        let mut out = Vec::new();
        let err = authorize(&mut out, &engine(), PageType::Blog, SectionType::Hero, &[]).unwrap_err();
        assert!(err.message().contains("SEO data only"));
        assert_eq!(output(out)["code"], "SECTIONS_NOT_ALLOWED");
    }

    #[test]
    fn test_run_command_check_config() {
        let mut out = Vec::new();
        run_command(
            &mut out,
            Command::CheckConfig,
            &AppConfig::default(),
            &ConfigSource::Defaults,
        )
        .unwrap();
        assert_eq!(output(out)["data"]["source"], "defaults");
    }

    #[test]
    fn test_load_explicit_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"languages": ["en", "nl"]}}"#).unwrap();

        let (config, source) = load_config(Some(file.path())).unwrap();
        assert_eq!(config.languages, vec!["en", "nl"]);
        assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));

        let summary = check_config(&config, &source);
        assert_eq!(summary["languages"], json!(["en", "nl"]));
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_config(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert_eq!(err.code_str(), "CLI_CONFIG_ERROR");
    }
}
