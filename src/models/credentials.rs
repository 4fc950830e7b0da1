use std::fmt;

use crate::error::ReportError;
use crate::utils::mask_key;

/// Access key pair for the stats API. Both halves are non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key: String,
    secret_key: String,
}

impl Credentials {
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, ReportError> {
        let access_key = access_key.into();
        let secret_key = secret_key.into();
        if access_key.is_empty() || secret_key.is_empty() {
            return Err(ReportError::MissingCredentials);
        }
        Ok(Self {
            access_key,
            secret_key,
        })
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Value of the `Authorization` header: the two keys joined by a colon,
    /// with no scheme prefix.
    pub fn authorization(&self) -> String {
        format!("{}:{}", self.access_key, self.secret_key)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &mask_key(&self.access_key))
            .field("secret_key", &"***")
            .finish()
    }
}
