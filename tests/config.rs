use rosterm::config::Config;
use rosterm::search::SearchCriterion;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.directory.kind, "http");
    assert_eq!(config.directory.base_url, "http://localhost:8080/api/");
    assert_eq!(config.directory.timeout_secs, 10);
    assert!(config.directory.api_token_env.is_none());
    assert_eq!(config.ui.page_size, 10);
    assert_eq!(config.ui.default_state, "Alabama");
    assert_eq!(config.default_criterion(), SearchCriterion::Everyone);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Page size outside the offered options should fail
    config.ui.page_size = 7;
    assert!(config.validate().is_err());

    // Reset and test an unknown state
    config.ui.page_size = 25;
    config.ui.default_state = "Atlantis".to_string();
    assert!(config.validate().is_err());

    config.ui.default_state = "Texas".to_string();
    config.directory.timeout_secs = 0;
    assert!(config.validate().is_err());

    config.directory.timeout_secs = 30;
    config.directory.base_url = "not a url".to_string();
    assert!(config.validate().is_err());

    config.directory.kind = "memory".to_string();
    assert!(config.validate().is_ok(), "memory directory ignores the base URL");

    config.directory.kind = "ldap".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_unknown_criterion_and_level_rejected() {
    let mut config = Config::default();
    config.ui.default_criterion = "Shoe Size".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("base_url = \"http://localhost:8080/api/\""));
    assert!(toml_str.contains("page_size = 10"));
    assert!(toml_str.contains("default_state = \"Alabama\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[directory]
base_url = "https://directory.example.com/api/"

[ui]
page_size = 25
default_criterion = "City"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.directory.base_url, "https://directory.example.com/api/");
    assert_eq!(config.ui.page_size, 25);
    assert_eq!(config.default_criterion(), SearchCriterion::City);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.directory.kind, "http");
    assert_eq!(config.directory.timeout_secs, 10);
    assert_eq!(config.ui.default_state, "Alabama");
    assert!(!config.ui.mouse_enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.directory.base_url, default_config.directory.base_url);
    assert_eq!(config.ui.page_size, default_config.ui.page_size);
    assert_eq!(config.ui.default_criterion, default_config.ui.default_criterion);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("rosterm_test_invalid_config");
    fs::create_dir_all(&temp_dir).unwrap();
    let config_path = temp_dir.join("config.toml");
    fs::write(&config_path, "[ui]\npage_size = 3\n").unwrap();

    let error = Config::load_from_file(&config_path).unwrap_err();
    assert!(error.to_string().contains("page_size"));

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("rosterm_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content and loads back
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# rosterm Configuration File"));
    assert!(content.contains("[directory]"));
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.ui.page_size, 10);

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
