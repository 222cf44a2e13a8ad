use std::env;

/// Outbound mail settings, read once at startup and carried in `AppState`.
///
/// Gmail app passwords are often pasted with grouping spaces, so all
/// whitespace is stripped from the credential. An empty variable counts as
/// unset.
#[derive(Debug, Clone, Default)]
pub struct MailConfig {
    credentials: Option<SmtpCredentials>,
    recipient: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SmtpCredentials {
    pub user: String,
    pub app_password: String,
}

impl MailConfig {
    pub fn new(user: &str, app_password: &str, recipient: &str) -> Self {
        let user = user.trim().to_string();
        let app_password: String = app_password
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let credentials = if user.is_empty() || app_password.is_empty() {
            None
        } else {
            Some(SmtpCredentials { user, app_password })
        };

        let recipient = match recipient.trim() {
            "" => None,
            r => Some(r.to_string()),
        };

        MailConfig {
            credentials,
            recipient,
        }
    }

    pub fn from_env() -> Self {
        MailConfig::new(
            &env::var("GMAIL_USER").unwrap_or_default(),
            &env::var("GMAIL_APP_PASSWORD").unwrap_or_default(),
            &env::var("CONTACT_EMAIL").unwrap_or_default(),
        )
    }

    pub fn credentials(&self) -> Option<&SmtpCredentials> {
        self.credentials.as_ref()
    }

    pub fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_whitespace_from_app_password() {
        let config = MailConfig::new("agencia@gmail.com", "abcd efgh ijkl mnop", "");
        let creds = config.credentials().unwrap();
        assert_eq!(creds.app_password, "abcdefghijklmnop");
        assert_eq!(creds.user, "agencia@gmail.com");
    }

    #[test]
    fn missing_user_means_no_credentials() {
        let config = MailConfig::new("", "abcd", "leads@example.com");
        assert!(config.credentials().is_none());
    }

    #[test]
    fn whitespace_only_password_means_no_credentials() {
        let config = MailConfig::new("agencia@gmail.com", "   ", "leads@example.com");
        assert!(config.credentials().is_none());
    }

    #[test]
    fn recipient_is_optional() {
        let with = MailConfig::new("a@b.co", "pw", "leads@example.com");
        assert_eq!(with.recipient(), Some("leads@example.com"));

        let without = MailConfig::new("a@b.co", "pw", "");
        assert!(without.recipient().is_none());
    }
}
