//! Serve command handler.

use crisislens_axum::{ServerConfig, bootstrap, start_server};
use crisislens_core::{RawSettings, Settings};

use crate::commands::ServeArgs;
use crate::error::CliError;

/// Merge command-line flags into the environment values, then validate
/// what the server uses.
pub fn apply_overrides(mut raw: RawSettings, args: ServeArgs) -> Result<Settings, CliError> {
    if let Some(host) = args.host {
        raw.host = Some(host);
    }
    if let Some(port) = args.port {
        raw.port = Some(port.to_string());
    }
    if let Some(dir) = args.static_dir {
        raw.static_dir = Some(dir);
    }
    if !args.cors_origins.is_empty() {
        raw.cors_origins = args.cors_origins;
    }
    Ok(raw.into_server_settings()?)
}

/// Execute the serve command. Runs until Ctrl+C.
pub async fn execute(raw: RawSettings, args: ServeArgs) -> Result<(), CliError> {
    let settings = apply_overrides(raw, args)?;
    if let Some(dir) = &settings.static_dir {
        if !dir.join("index.html").is_file() {
            return Err(CliError::Config(format!(
                "static directory {} has no index.html",
                dir.display()
            )));
        }
    }

    let ctx = bootstrap(&settings).map_err(|e| CliError::Server(format!("{e:#}")))?;
    let config = ServerConfig::from_settings(&settings);
    start_server(ctx, config)
        .await
        .map_err(|e| CliError::Server(format!("{e:#}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> ServeArgs {
        ServeArgs {
            host: None,
            port: None,
            static_dir: None,
            cors_origins: Vec::new(),
        }
    }

    #[test]
    fn flags_override_environment() {
        let settings = apply_overrides(
            RawSettings::default(),
            ServeArgs {
                host: Some("0.0.0.0".into()),
                port: Some(9100),
                static_dir: Some(PathBuf::from("web")),
                cors_origins: vec!["https://lens.example".into()],
            },
        )
        .unwrap();
        assert_eq!(settings.bind_addr(), "0.0.0.0:9100");
        assert_eq!(settings.static_dir, Some(PathBuf::from("web")));
        assert_eq!(settings.cors_origins, vec!["https://lens.example".to_string()]);
    }

    #[test]
    fn unset_flags_keep_environment() {
        let raw = RawSettings {
            port: Some("8123".into()),
            cors_origins: vec!["https://a.example".into()],
            ..RawSettings::default()
        };
        let settings = apply_overrides(raw, args()).unwrap();
        assert_eq!(settings.port, 8123);
        assert_eq!(settings.cors_origins, vec!["https://a.example".to_string()]);
    }

    #[test]
    fn port_flag_replaces_invalid_environment_port() {
        let raw = RawSettings {
            port: Some("abc".into()),
            ..RawSettings::default()
        };
        let settings = apply_overrides(
            raw,
            ServeArgs {
                port: Some(9123),
                ..args()
            },
        )
        .unwrap();
        assert_eq!(settings.port, 9123);
    }

    #[test]
    fn invalid_environment_port_without_flag_is_a_config_error() {
        let raw = RawSettings {
            port: Some("abc".into()),
            ..RawSettings::default()
        };
        let err = apply_overrides(raw, args()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn client_url_does_not_block_serve() {
        let raw = RawSettings {
            server_url: Some("localhost:8000".into()),
            ..RawSettings::default()
        };
        assert!(apply_overrides(raw, args()).is_ok());
    }

    #[test]
    fn port_zero_is_rejected() {
        let err = apply_overrides(
            RawSettings::default(),
            ServeArgs {
                port: Some(0),
                ..args()
            },
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn static_dir_without_index_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = tokio_test::block_on(execute(
            RawSettings::default(),
            ServeArgs {
                static_dir: Some(dir.path().to_path_buf()),
                ..args()
            },
        ));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("index.html")));
    }
}
