use std::env;
use std::time::Duration;

use crate::error::ReportError;
use crate::models::Credentials;

pub const ACCESS_KEY_ENV: &str = "WASABI_ACCESS_KEY";
pub const SECRET_KEY_ENV: &str = "WASABI_SECRET_KEY";

#[derive(clap::Parser, Debug)]
#[command(version, about = "Print the latest Wasabi storage utilization as JSON")]
pub struct Args {
    /// Wasabi Access Key ID [fallback env: WASABI_ACCESS_KEY]
    #[arg(long)]
    pub access_key: Option<String>,

    /// Wasabi Secret Access Key [fallback env: WASABI_SECRET_KEY]
    #[arg(long)]
    pub secret_key: Option<String>,

    /// Access key and secret key, in that order. Each is used only when the
    /// matching flag is empty; anything after the second is ignored
    #[arg(value_name = "KEYS")]
    pub keys: Vec<String>,

    /// Request timeout in seconds (default: no timeout)
    #[arg(long, env = "WASABI_USAGE_TIMEOUT", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Debug mode: print request and conversion details to stderr
    #[arg(long, env = "WASABI_USAGE_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }

    /// Flags win; positional keys fill in whichever flag is empty, and the
    /// environment only fills what the command line left empty.
    pub fn credentials(&self) -> Result<Credentials, ReportError> {
        let access_key = resolve_key(
            self.access_key.as_deref(),
            self.keys.first(),
            ACCESS_KEY_ENV,
        );
        let secret_key = resolve_key(
            self.secret_key.as_deref(),
            self.keys.get(1),
            SECRET_KEY_ENV,
        );
        Credentials::new(access_key, secret_key)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

fn resolve_key(flag: Option<&str>, positional: Option<&String>, env_key: &str) -> String {
    [flag, positional.map(String::as_str)]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| env::var(env_key).ok().filter(|v| !v.is_empty()))
        .unwrap_or_default()
}
