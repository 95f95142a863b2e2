use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::{ContactEmail, SenderEmail};
use crate::mail_sender::Destination;

/// The variable the source address has historically been deployed with.
/// Wins over every other configuration source.
const SOURCE_EMAIL_VARIABLE: &str = "SOURCE_EMAIL";

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    /// Largest request body `/contact` reads before giving up on it.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_payload_bytes: usize,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization_token: SecretString,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
    /// Where contact emails go. Unset means back to the submitter.
    #[serde(default)]
    pub recipient_email: Option<String>,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<SenderEmail, String> {
        self.sender_email.clone().try_into()
    }

    pub fn destination(&self) -> Result<Destination, String> {
        match self.recipient_email.as_deref() {
            None | Some("") => Ok(Destination::Submitter),
            Some(recipient) => {
                ContactEmail::try_from(recipient.to_owned()).map(Destination::Configured)
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let variables: config::Map<String, String> = std::env::vars().collect();
    load_configuration(&base_path, variables)
}

/// Reads `configuration/` under `base_path`, with `variables` standing in for
/// the process environment.
pub fn load_configuration(
    base_path: &Path,
    variables: config::Map<String, String>,
) -> Result<Settings, config::ConfigError> {
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment, default to `local` if unspecified
    let environment: Environment = variables
        .get("APP_ENVIRONMENT")
        .cloned()
        .unwrap_or_else(|| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());
    let source_email = variables.get(SOURCE_EMAIL_VARIABLE).cloned();

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // E.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .source(Some(variables)),
        )
        .set_override_option("email_client.sender_email", source_email)?
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
