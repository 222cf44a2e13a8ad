use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::config::SmtpCredentials;

const SMTP_RELAY: &str = "smtp.gmail.com";

#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Clone, Error)]
pub enum RelayError {
    #[error("relay rejected the credentials: {0}")]
    Auth(String),
    #[error("could not reach the mail relay: {0}")]
    Connection(String),
    #[error("relay rejected the message: {0}")]
    Rejected(String),
    #[error("message could not be assembled: {0}")]
    BadMessage(String),
}

#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn deliver(
        &self,
        credentials: &SmtpCredentials,
        email: OutgoingEmail,
    ) -> Result<(), RelayError>;
}

/// Delivers through Gmail SMTP. The transport lives for a single `deliver`
/// call: built, probed with a NOOP round trip, handed the message, dropped.
pub struct SmtpMailer;

impl SmtpMailer {
    fn message(email: &OutgoingEmail) -> Result<Message, RelayError> {
        let from: Mailbox = email
            .from
            .parse()
            .map_err(|e| RelayError::BadMessage(format!("sender address: {}", e)))?;
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| RelayError::BadMessage(format!("recipient address: {}", e)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())
            .map_err(|e| RelayError::BadMessage(e.to_string()))
    }
}

#[async_trait]
impl MailRelay for SmtpMailer {
    async fn deliver(
        &self,
        credentials: &SmtpCredentials,
        email: OutgoingEmail,
    ) -> Result<(), RelayError> {
        let message = SmtpMailer::message(&email)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(SMTP_RELAY)
            .map_err(|e| RelayError::Connection(e.to_string()))?
            .credentials(Credentials::new(
                credentials.user.clone(),
                credentials.app_password.clone(),
            ))
            .build();

        // Probe the relay before handing it the message. A permanent reply
        // at this stage is the relay refusing our login.
        match transport.test_connection().await {
            Ok(true) => {}
            Ok(false) => {
                return Err(RelayError::Connection(
                    "relay refused the connection probe".to_string(),
                ))
            }
            Err(e) if e.is_permanent() => return Err(RelayError::Auth(e.to_string())),
            Err(e) => return Err(RelayError::Connection(e.to_string())),
        }

        match transport.send(message).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_permanent() || e.is_transient() => {
                Err(RelayError::Rejected(e.to_string()))
            }
            Err(e) => Err(RelayError::Connection(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead_email() -> OutgoingEmail {
        OutgoingEmail {
            from: "agencia@gmail.com".to_string(),
            to: "leads@example.com".to_string(),
            subject: "Nuevo contacto de Ana - Consulta general".to_string(),
            html_body: "<p>Hola</p>".to_string(),
        }
    }

    #[test]
    fn builds_an_html_message() {
        let message = SmtpMailer::message(&lead_email()).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("From: agencia@gmail.com"));
        assert!(raw.contains("To: leads@example.com"));
        assert!(raw.contains("Subject: Nuevo contacto de Ana - Consulta general"));
        assert!(raw.contains("text/html"));
    }

    #[test]
    fn rejects_unparseable_sender() {
        let mut email = lead_email();
        email.from = "not an address".to_string();
        assert!(matches!(
            SmtpMailer::message(&email),
            Err(RelayError::BadMessage(_))
        ));
    }

    #[test]
    fn rejects_empty_recipient() {
        let mut email = lead_email();
        email.to = String::new();
        assert!(matches!(
            SmtpMailer::message(&email),
            Err(RelayError::BadMessage(_))
        ));
    }
}
