#[cfg(test)]
mod tests {
    use crate::config::{self, AppConfig, ReferencePolicy};
    use std::fs;
    use std::io::Write;

    fn write_temp_config(content: &str) -> tempfile::NamedTempFile {
        let mut temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.max_body_bytes, 1024 * 1024);
        assert_eq!(config.database.url, "sqlite://data/library.db");
        assert_eq!(config.database.max_connections, 8);
        assert_eq!(config.library.reference_policy, ReferencePolicy::Ignore);
        assert!(config.security.is_none());
    }

    #[test]
    fn test_defaults_pass_validation() {
        assert!(config::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let temp_file = write_temp_config(
            r#"
[server]
host = "0.0.0.0"
port = 9000

[database]
url = "sqlite://custom.db"

[library]
reference_policy = "cascade"

[security]
enable_hsts = true
csp = "default-src 'self'"
"#,
        );

        let config = config::load_with(Some(temp_file.path())).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        // Not in the file: embedded default remains
        assert_eq!(config.server.max_body_bytes, 1024 * 1024);
        assert_eq!(config.database.url, "sqlite://custom.db");
        assert_eq!(config.library.reference_policy, ReferencePolicy::Cascade);
        let security = config.security.unwrap();
        assert_eq!(security.enable_hsts, Some(true));
        assert_eq!(security.csp.as_deref(), Some("default-src 'self'"));
    }

    #[test]
    fn test_invalid_server_port() {
        let temp_file = write_temp_config("[server]\nport = 0\n");
        let result = config::load_with(Some(temp_file.path()));
        assert!(result.unwrap_err().to_string().contains("invalid server.port"));
    }

    #[test]
    fn test_invalid_max_connections() {
        let temp_file = write_temp_config("[database]\nmax_connections = 0\n");
        let result = config::load_with(Some(temp_file.path()));
        assert!(result.unwrap_err().to_string().contains("database.max_connections"));
    }

    #[test]
    fn test_invalid_max_body_bytes() {
        let mut cfg = AppConfig::default();
        cfg.server.max_body_bytes = 0;
        assert!(config::validate(&cfg).unwrap_err().to_string().contains("max_body_bytes"));
    }

    #[test]
    fn test_unknown_reference_policy_is_rejected() {
        let temp_file = write_temp_config("[library]\nreference_policy = \"sometimes\"\n");
        assert!(config::load_with(Some(temp_file.path())).is_err());
    }

    #[test]
    fn test_reference_policy_checks() {
        assert!(!ReferencePolicy::Ignore.checks_references());
        assert!(ReferencePolicy::Restrict.checks_references());
        assert!(ReferencePolicy::Cascade.checks_references());
    }

    #[test]
    fn test_ensure_sqlite_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("subdir/library.db");
        let db_url = format!("sqlite://{}", db_path.display());

        assert!(!db_path.parent().unwrap().exists());
        config::ensure_sqlite_parent_dir(&db_url).unwrap();
        assert!(db_path.parent().unwrap().exists());
        // The database file itself is created later by sqlx
        assert!(fs::metadata(&db_path).is_err());
    }

    #[test]
    fn test_ensure_sqlite_parent_dir_ignores_other_urls() {
        assert!(config::ensure_sqlite_parent_dir("sqlite::memory:").is_ok());
        assert!(config::ensure_sqlite_parent_dir("postgres://localhost/db").is_ok());
    }
}
