//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};
use sitedesk_client::ClientConfig;
use sitedesk_controller::DayMark;
use sitedesk_core::DeskResult;
use sitedesk_core::Validatable;
use std::path::PathBuf;

/// SiteDesk CLI - staff, materials and time tracking from the terminal
#[derive(Parser, Debug)]
#[command(name = "sitedesk-cli")]
#[command(version)]
#[command(about = "Browse and edit SiteDesk collections from the terminal", long_about = None)]
pub struct Cli {
    /// Backend origin (e.g., https://desk.example.com)
    #[arg(long = "base-url", env = "SITEDESK_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Client configuration file (TOML)
    #[arg(long = "config", env = "SITEDESK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Sign in with this login before running the command
    #[arg(long = "login", env = "SITEDESK_LOGIN", global = true)]
    pub login: Option<String>,

    /// Password for --login
    #[arg(
        long = "password",
        env = "SITEDESK_PASSWORD",
        hide_env_values = true,
        global = true
    )]
    pub password: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List the collections and what they allow
    Collections,

    /// Print the rows of a collection
    List {
        /// Collection name (e.g., materials)
        collection: String,
    },

    /// Create a record
    Add {
        collection: String,

        /// Field value as key=value (repeatable)
        #[arg(long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },

    /// Change a record; fields not given keep their current values
    Edit {
        collection: String,

        /// Record identifier
        id: String,

        /// Field value as key=value (repeatable)
        #[arg(long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },

    /// Delete a record
    Delete { collection: String, id: String },

    /// Start or end a working day
    Wtt {
        #[arg(value_enum)]
        action: WttAction,

        /// Personnel number
        personnel_number: String,
    },

    /// Report whether the session is signed in
    CheckLogin,

    /// Send an application through the public intake form
    Apply {
        #[arg(long = "full-name")]
        full_name: String,

        #[arg(long = "phone")]
        phone: String,

        #[arg(long = "description", default_value = "")]
        description: String,
    },
}

/// `wtt` actions
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WttAction {
    Start,
    Stop,
}

impl From<WttAction> for DayMark {
    fn from(action: WttAction) -> Self {
        match action {
            WttAction::Start => DayMark::Start,
            WttAction::Stop => DayMark::End,
        }
    }
}

impl Cli {
    /// Client configuration: file (or defaults), then `--base-url`
    pub fn client_config(&self) -> DeskResult<ClientConfig> {
        let mut config = ClientConfig::load_or_default(self.config.as_deref())?;
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

/// Parse a `key=value` assignment; the value may be empty or contain `=`
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("name=Cement").unwrap(),
            ("name".to_string(), "Cement".to_string())
        );
        assert_eq!(
            parse_assignment("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_assignment("amount=").unwrap().1, "");
        assert!(parse_assignment("name").is_err());
        assert!(parse_assignment("=x").is_err());
    }

    #[test]
    fn test_add_with_assignments() {
        let cli = Cli::try_parse_from([
            "sitedesk-cli",
            "add",
            "materials",
            "--set",
            "name=Cement",
            "--set",
            "amount=50",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::Add {
                collection: "materials".to_string(),
                set: vec![
                    ("name".to_string(), "Cement".to_string()),
                    ("amount".to_string(), "50".to_string()),
                ],
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sitedesk-cli",
            "list",
            "roles",
            "--base-url",
            "https://desk.example.com",
            "--login",
            "admin",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("https://desk.example.com"));
        assert_eq!(cli.login.as_deref(), Some("admin"));
    }

    #[test]
    fn test_wtt_actions() {
        let cli = Cli::try_parse_from(["sitedesk-cli", "wtt", "stop", "T-17"]).unwrap();
        match cli.command {
            Command::Wtt {
                action,
                personnel_number,
            } => {
                assert_eq!(DayMark::from(action), DayMark::End);
                assert_eq!(personnel_number, "T-17");
            }
            other => panic!("unexpected command {:?}", other),
        }

        assert!(Cli::try_parse_from(["sitedesk-cli", "wtt", "pause", "T-17"]).is_err());
    }

    #[test]
    fn test_apply_requires_name_and_phone() {
        assert!(Cli::try_parse_from(["sitedesk-cli", "apply", "--full-name", "Ivan"]).is_err());
        let cli = Cli::try_parse_from([
            "sitedesk-cli",
            "apply",
            "--full-name",
            "Ivan",
            "--phone",
            "+7 900",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Apply { ref description, .. } if description.is_empty()));
    }

    #[test]
    fn test_client_config_from_file_and_flag() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"https://file.example.com\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from(["sitedesk-cli", "--config", &path, "collections"]).unwrap();
        assert_eq!(cli.client_config().unwrap().base_url, "https://file.example.com");

        let cli = Cli::try_parse_from([
            "sitedesk-cli",
            "--config",
            &path,
            "--base-url",
            "http://localhost:9000",
            "collections",
        ])
        .unwrap();
        assert_eq!(cli.client_config().unwrap().base_url, "http://localhost:9000");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let cli =
            Cli::try_parse_from(["sitedesk-cli", "--base-url", "ftp://x", "collections"]).unwrap();
        assert!(cli.client_config().is_err());
    }
}
