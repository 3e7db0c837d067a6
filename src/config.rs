use crate::settings::Settings;
use std::fmt;

/// Login method, sent to the login endpoint as `third_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Email,
    Phone,
}

impl Platform {
    pub fn third_name(self) -> &'static str {
        match self {
            Platform::Email => "email",
            Platform::Phone => "huami_phone",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.third_name())
    }
}

#[derive(Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn platform(&self) -> Platform {
        if self.user.contains('@') {
            Platform::Email
        } else {
            Platform::Phone
        }
    }

    /// The identifier as it appears in the registration URL. Phone numbers
    /// get the country prefix.
    pub fn registration_id(&self, settings: &Settings) -> String {
        match self.platform() {
            Platform::Email => self.user.clone(),
            Platform::Phone => format!("{}{}", settings.phone_prefix, self.user),
        }
    }
}

// Keep the password out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Inputs for one run. Nothing is validated here; bad values show up as
/// failures from the vendor.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub credentials: Credentials,
    pub step: String,
}

impl WalkerConfig {
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        step: impl Into<String>,
    ) -> Self {
        WalkerConfig {
            credentials: Credentials::new(user, password),
            step: step.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_identifier() {
        let c = Credentials::new("user@example.com", "pw");
        assert_eq!(c.platform(), Platform::Email);
        assert_eq!(c.platform().third_name(), "email");
        assert_eq!(c.registration_id(&Settings::default()), "user@example.com");
    }

    #[test]
    fn phone_identifier_is_prefixed() {
        let c = Credentials::new("12345", "pw");
        assert_eq!(c.platform(), Platform::Phone);
        assert_eq!(c.platform().third_name(), "huami_phone");
        assert_eq!(c.registration_id(&Settings::default()), "+8612345");
    }

    #[test]
    fn debug_hides_password() {
        let c = Credentials::new("12345", "hunter2");
        let s = format!("{:?}", c);
        assert!(s.contains("12345"));
        assert!(!s.contains("hunter2"));
    }

    #[test]
    fn config_passes_values_through() {
        let cfg = WalkerConfig::new(" 12345 ", "", "not-a-number");
        assert_eq!(cfg.credentials.user, " 12345 ");
        assert_eq!(cfg.credentials.password, "");
        assert_eq!(cfg.step, "not-a-number");
    }
}
