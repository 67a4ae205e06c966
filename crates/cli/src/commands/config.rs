use std::env;
use std::fs;
use std::path::Path;

use printfarm_core::config::{resolve_config_path, AppConfig};
use toml::Value;

use crate::commands::{load_config, CommandResult};

struct ConfigField<'a> {
    key_path: &'static str,
    env_keys: &'static [&'static str],
    value: &'a str,
}

pub fn run() -> CommandResult {
    match load_config("config") {
        Ok(config) => CommandResult::success(render(&config)),
        Err(failure) => failure,
    }
}

pub fn render(config: &AppConfig) -> String {
    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let port = config.server.port.to_string();
    let graceful_shutdown_secs = config.server.graceful_shutdown_secs.to_string();
    let log_format = format!("{:?}", config.logging.format).to_ascii_lowercase();

    let fields = [
        ConfigField {
            key_path: "server.bind_address",
            env_keys: &["PRINTFARM_SERVER_BIND_ADDRESS"],
            value: &config.server.bind_address,
        },
        ConfigField { key_path: "server.port", env_keys: &["PRINTFARM_SERVER_PORT"], value: &port },
        ConfigField {
            key_path: "server.graceful_shutdown_secs",
            env_keys: &["PRINTFARM_SERVER_GRACEFUL_SHUTDOWN_SECS"],
            value: &graceful_shutdown_secs,
        },
        ConfigField {
            key_path: "slack.allowed_channel",
            env_keys: &["PRINTFARM_SLACK_ALLOWED_CHANNEL"],
            value: &config.slack.allowed_channel,
        },
        ConfigField {
            key_path: "stream.url_template",
            env_keys: &["PRINTFARM_STREAM_URL_TEMPLATE"],
            value: &config.stream.url_template,
        },
        ConfigField {
            key_path: "logging.level",
            env_keys: &["PRINTFARM_LOGGING_LEVEL", "PRINTFARM_LOG_LEVEL"],
            value: &config.logging.level,
        },
        ConfigField {
            key_path: "logging.format",
            env_keys: &["PRINTFARM_LOGGING_FORMAT", "PRINTFARM_LOG_FORMAT"],
            value: &log_format,
        },
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    lines.extend(fields.iter().map(|field| {
        render_line(
            field.key_path,
            field.value,
            field_source(
                field.key_path,
                field.env_keys,
                config_file_doc.as_ref(),
                config_file_path.as_deref(),
            ),
        )
    }));

    lines.join("\n")
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) =
        env_keys.iter().find(|key| env::var(key).is_ok_and(|value| !value.trim().is_empty()))
    {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

#[cfg(test)]
mod tests {
    use toml::Value;

    use super::contains_path;

    #[test]
    fn contains_path_walks_nested_tables() {
        let doc: Value = "[stream]\nurl_template = \"http://{address}/feed\"\n"
            .parse()
            .expect("valid toml");

        assert!(contains_path(&doc, "stream.url_template"));
        assert!(!contains_path(&doc, "stream.missing"));
        assert!(!contains_path(&doc, "slack.allowed_channel"));
    }
}
