//! Configuration commands.

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::FitshiftError;
use crate::output::to_json;

/// Execute config subcommands
///
/// # Errors
///
/// Returns an error if the config file is invalid, cannot be written, or
/// cannot be formatted.
pub fn config(
    paths: &Paths,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, FitshiftError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(&paths.config_file)?;
            match format {
                OutputFormat::Json => to_json(&config),
                OutputFormat::Pretty => Ok(serde_yaml::to_string(&config)?),
            }
        }
        ConfigCommands::Init { force } => {
            if paths.config_file.exists() && !force {
                return Err(FitshiftError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    paths.config_file.display()
                )));
            }
            paths.ensure_dirs()?;
            Config::default().save_to_path(&paths.config_file)?;
            Ok(format!(
                "Created config file: {}",
                paths.config_file.display()
            ))
        }
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_then_refuses() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join(".fitshift"));

        let message = config(
            &paths,
            ConfigCommands::Init { force: false },
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(message.starts_with("Created config file"));
        assert!(paths.config_file.exists());
        assert!(paths.catalogs.exists());

        let err = config(
            &paths,
            ConfigCommands::Init { force: false },
            OutputFormat::Pretty,
        )
        .unwrap_err();
        assert!(err.to_string().contains("--force"));

        config(
            &paths,
            ConfigCommands::Init { force: true },
            OutputFormat::Pretty,
        )
        .unwrap();
    }

    #[test]
    fn test_show_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        std::fs::write(&paths.config_file, "rest: [oops").unwrap();

        let err = config(&paths, ConfigCommands::Show, OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, FitshiftError::Config(_)));

        config(&paths, ConfigCommands::Init { force: true }, OutputFormat::Pretty).unwrap();
        assert!(config(&paths, ConfigCommands::Show, OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_show_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        let output = config(
            &paths,
            ConfigCommands::Show,
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(output.contains("min_seconds: 20"));
        assert!(output.contains("language: en"));
    }

    #[test]
    fn test_path() {
        let paths = Paths::with_root("/home/test/.fitshift".into());
        let output = config(
            &paths,
            ConfigCommands::Path,
            OutputFormat::Pretty,
        )
        .unwrap();
        assert_eq!(output, "/home/test/.fitshift/config.yaml");
    }
}
