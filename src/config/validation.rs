use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain must be an http:// or https:// URL
/// - An API key must be present and not blank
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_domain: &str,
    api_key: Option<&str>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_domain.trim().is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "API domain must start with http:// or https://, got '{api_domain}'"
        )));
    }

    match api_key {
        Some(key) if !key.trim().is_empty() => {}
        _ => {
            return Err(AppError::config_error(
                "API key is missing; set API_KEY in the environment or a .env file",
            ));
        }
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(
            validate_config("https://www.robotevents.com/api/v2", Some("key"), &None).is_ok()
        );
        assert!(validate_config("http://127.0.0.1:8080", Some("key"), &None).is_ok());
    }

    #[test]
    fn test_rejects_bad_domain() {
        assert!(validate_config("", Some("key"), &None).is_err());
        assert!(validate_config("www.robotevents.com", Some("key"), &None).is_err());
    }

    #[test]
    fn test_rejects_missing_key() {
        assert!(validate_config("https://api.example.com", None, &None).is_err());
        assert!(validate_config("https://api.example.com", Some(""), &None).is_err());
    }

    #[test]
    fn test_rejects_empty_log_path() {
        let result = validate_config("https://api.example.com", Some("key"), &Some(String::new()));
        assert!(result.is_err());
    }

    #[test]
    fn test_creates_log_parent_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("run.log");

        let result = validate_config(
            "https://api.example.com",
            Some("key"),
            &Some(log_path.to_string_lossy().to_string()),
        );

        assert!(result.is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }
}
