use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::mailer::{OutgoingEmail, RelayError};
use crate::handlers::contact_dtos::ContactRequest;
use crate::AppState;

// Deliberately permissive: local@domain.tld shaped, no whitespace, nothing
// more. Real verification happens when the agency replies.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

const CONFIRMATION_MESSAGE: &str = "¡Mensaje enviado exitosamente! Te contactaremos pronto.";
const RETRY_LATER_MESSAGE: &str =
    "Error al enviar el mensaje. Por favor, inténtalo de nuevo más tarde.";

fn validate(request: &ContactRequest) -> Result<(), &'static str> {
    if request.name.is_empty()
        || request.email.is_empty()
        || request.phone.is_empty()
        || request.message.is_empty()
    {
        return Err("Todos los campos obligatorios deben ser completados");
    }
    if !EMAIL_REGEX.is_match(&request.email) {
        return Err("Formato de email inválido");
    }
    Ok(())
}

fn service_label<'a>(service: Option<&'a str>) -> &'a str {
    match service {
        None | Some("") => "Consulta general",
        Some("empresarial") => "Presencia Digital Profesional",
        Some("ecommerce") => "Tienda Online Ilimitada",
        Some("asesoria") => "Asesoría gratuita",
        Some(other) => other,
    }
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn contact_subject(request: &ContactRequest) -> String {
    format!(
        "Nuevo contacto de {} - {}",
        request.name,
        service_label(request.service.as_deref())
    )
}

fn contact_body(request: &ContactRequest) -> String {
    let name = html_escape(&request.name);
    let email = html_escape(&request.email);
    let phone = html_escape(&request.phone);
    let message = html_escape(&request.message).replace('\n', "<br>");

    let company_row = request
        .company
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(|c| format!("<p><strong>Empresa:</strong> {}</p>", html_escape(c)))
        .unwrap_or_default();
    let service_row = request
        .service
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| {
            format!(
                "<p><strong>Servicio de interés:</strong> {}</p>",
                html_escape(service_label(Some(s)))
            )
        })
        .unwrap_or_default();

    let received_at = Utc::now()
        .with_timezone(&chrono_tz::America::Mexico_City)
        .format("%d/%m/%Y, %H:%M:%S");

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333; border-bottom: 2px solid #3b82f6; padding-bottom: 10px;">Nuevo mensaje de contacto</h2>
  <div style="background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Nombre:</strong> {name}</p>
    <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
    <p><strong>Teléfono:</strong> <a href="tel:{phone}">{phone}</a></p>
    {company_row}
    {service_row}
  </div>
  <div style="margin: 20px 0;">
    <h3 style="color: #333;">Mensaje:</h3>
    <p style="background-color: #f8f9fa; padding: 15px; border-radius: 8px; line-height: 1.6;">{message}</p>
  </div>
  <div style="border-top: 1px solid #dee2e6; padding-top: 15px; margin-top: 30px; font-size: 12px; color: #6c757d;">
    <p>Este mensaje fue enviado desde el formulario de contacto del sitio web.</p>
    <p>Fecha: {received_at}</p>
  </div>
</div>"#
    )
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if let Err(reason) = validate(&request) {
        info!("Rejected contact submission: {}", reason);
        return Err((StatusCode::BAD_REQUEST, Json(json!({"error": reason}))));
    }

    let credentials = match state.mail_config.credentials() {
        Some(credentials) => credentials,
        None => {
            error!("Mail configuration unavailable, contact submission dropped");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": RETRY_LATER_MESSAGE})),
            ));
        }
    };

    let email = OutgoingEmail {
        from: credentials.user.clone(),
        to: state.mail_config.recipient().unwrap_or_default().to_string(),
        subject: contact_subject(&request),
        html_body: contact_body(&request),
    };

    info!("New contact submission from {} <{}>", request.name, request.email);

    match state.mailer.deliver(credentials, email).await {
        Ok(()) => Ok(Json(json!({
            "success": true,
            "message": CONFIRMATION_MESSAGE,
        }))),
        Err(err) => {
            match &err {
                RelayError::Auth(detail) => {
                    error!("Relay rejected our credentials: {}", detail);
                }
                RelayError::Connection(detail) => {
                    error!("Could not reach the mail relay: {}", detail);
                }
                RelayError::Rejected(detail) => {
                    error!("Relay rejected the lead email: {}", detail);
                }
                RelayError::BadMessage(detail) => {
                    error!("Could not assemble the lead email: {}", detail);
                }
            }
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": RETRY_LATER_MESSAGE})),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mailer::MailRelay;
    use crate::config::{MailConfig, SmtpCredentials};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRelay {
        sent: Mutex<Vec<OutgoingEmail>>,
        fail_with: Mutex<Option<RelayError>>,
    }

    impl RecordingRelay {
        fn failing(err: RelayError) -> Self {
            RecordingRelay {
                sent: Mutex::new(Vec::new()),
                fail_with: Mutex::new(Some(err)),
            }
        }

        fn sent(&self) -> Vec<OutgoingEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MailRelay for RecordingRelay {
        async fn deliver(
            &self,
            _credentials: &SmtpCredentials,
            email: OutgoingEmail,
        ) -> Result<(), RelayError> {
            self.sent.lock().unwrap().push(email);
            match self.fail_with.lock().unwrap().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    fn state_with_config(relay: Arc<RecordingRelay>, mail_config: MailConfig) -> Arc<AppState> {
        Arc::new(AppState {
            mail_config,
            mailer: relay,
        })
    }

    fn state_with(relay: Arc<RecordingRelay>) -> Arc<AppState> {
        state_with_config(
            relay,
            MailConfig::new("agencia@gmail.com", "abcd efgh ijkl mnop", "leads@hardcoded.space"),
        )
    }

    fn ana() -> ContactRequest {
        ContactRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "5511112222".to_string(),
            company: None,
            service: None,
            message: "Hola".to_string(),
        }
    }

    #[tokio::test]
    async fn rejects_submissions_with_missing_required_fields() {
        for blank in ["name", "email", "phone", "message"] {
            let relay = Arc::new(RecordingRelay::default());
            let mut payload = ana();
            match blank {
                "name" => payload.name.clear(),
                "email" => payload.email.clear(),
                "phone" => payload.phone.clear(),
                _ => payload.message.clear(),
            }

            let result = submit_contact(State(state_with(relay.clone())), Json(payload)).await;

            let (status, Json(body)) = result.unwrap_err();
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(
                body["error"],
                "Todos los campos obligatorios deben ser completados"
            );
            assert!(relay.sent().is_empty(), "no relay call for blank {}", blank);
        }
    }

    #[tokio::test]
    async fn treats_absent_keys_like_empty_fields() {
        // Clients that drop empty inputs send no key at all; those payloads
        // must land in the same 400 as explicit empty strings.
        for dropped in ["name", "email", "phone", "message"] {
            let relay = Arc::new(RecordingRelay::default());
            let mut value = json!({
                "name": "Ana",
                "email": "ana@example.com",
                "phone": "5511112222",
                "message": "Hola",
            });
            value.as_object_mut().unwrap().remove(dropped);
            let payload: ContactRequest = serde_json::from_value(value).unwrap();

            let blank = match dropped {
                "name" => &payload.name,
                "email" => &payload.email,
                "phone" => &payload.phone,
                _ => &payload.message,
            };
            assert_eq!(blank, "", "absent {} deserializes to empty", dropped);

            let result = submit_contact(State(state_with(relay.clone())), Json(payload)).await;

            let (status, Json(body)) = result.unwrap_err();
            assert_eq!(status, StatusCode::BAD_REQUEST, "key {} absent", dropped);
            assert_eq!(
                body["error"],
                "Todos los campos obligatorios deben ser completados"
            );
            assert!(relay.sent().is_empty());
        }
    }

    #[tokio::test]
    async fn rejects_invalid_email_shapes() {
        for bad_email in [
            "ana.example.com",
            "ana@example",
            "ana @example.com",
            "ana@ example.com",
            "ana@exa mple.com",
        ] {
            let relay = Arc::new(RecordingRelay::default());
            let mut payload = ana();
            payload.email = bad_email.to_string();

            let result = submit_contact(State(state_with(relay.clone())), Json(payload)).await;

            let (status, Json(body)) = result.unwrap_err();
            assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {}", bad_email);
            assert_eq!(body["error"], "Formato de email inválido");
            assert!(relay.sent().is_empty());
        }
    }

    #[tokio::test]
    async fn delivers_lead_email_for_valid_submission() {
        let relay = Arc::new(RecordingRelay::default());

        let result = submit_contact(State(state_with(relay.clone())), Json(ana())).await;

        let Json(body) = result.unwrap();
        assert_eq!(body["success"], true);
        assert!(body["message"].as_str().unwrap().contains("enviado"));

        let sent = relay.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "leads@hardcoded.space");
        assert_eq!(sent[0].from, "agencia@gmail.com");
        assert!(sent[0].subject.contains("Ana"));
        assert!(sent[0].subject.contains("Consulta general"));
    }

    #[tokio::test]
    async fn fails_closed_when_credentials_are_missing() {
        let relay = Arc::new(RecordingRelay::default());
        let state = state_with_config(relay.clone(), MailConfig::new("", "", "leads@hardcoded.space"));

        let result = submit_contact(State(state), Json(ana())).await;

        let (status, Json(body)) = result.unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], RETRY_LATER_MESSAGE);
        assert!(relay.sent().is_empty());
    }

    #[tokio::test]
    async fn sends_one_email_per_submission() {
        let relay = Arc::new(RecordingRelay::default());
        let state = state_with(relay.clone());

        submit_contact(State(state.clone()), Json(ana())).await.unwrap();
        submit_contact(State(state), Json(ana())).await.unwrap();

        assert_eq!(relay.sent().len(), 2);
    }

    #[tokio::test]
    async fn surfaces_generic_error_when_relay_fails() {
        let relay = Arc::new(RecordingRelay::failing(RelayError::Connection(
            "connection refused".to_string(),
        )));

        let result = submit_contact(State(state_with(relay.clone())), Json(ana())).await;

        let (status, Json(body)) = result.unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], RETRY_LATER_MESSAGE);
        assert_eq!(relay.sent().len(), 1, "delivery was attempted once");
    }

    #[tokio::test]
    async fn carries_selected_package_into_subject() {
        let relay = Arc::new(RecordingRelay::default());
        let state = state_with(relay.clone());

        let mut payload = ana();
        payload.service = Some("empresarial".to_string());
        submit_contact(State(state.clone()), Json(payload)).await.unwrap();

        let mut payload = ana();
        payload.service = Some("algo-raro".to_string());
        submit_contact(State(state), Json(payload)).await.unwrap();

        let sent = relay.sent();
        assert!(sent[0].subject.contains("Presencia Digital Profesional"));
        assert!(sent[0].html_body.contains("Servicio de interés"));
        assert!(sent[1].subject.contains("algo-raro"));
    }

    #[test]
    fn escapes_interpolated_fields_in_body() {
        let mut payload = ana();
        payload.name = "Ana <script>alert('x')</script>".to_string();
        payload.message = "Hola & adiós\nsegunda línea".to_string();

        let body = contact_body(&payload);
        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
        assert!(body.contains("Hola &amp; adiós<br>segunda línea"));
        assert!(body.contains("mailto:ana@example.com"));
        assert!(body.contains("tel:5511112222"));
    }

    #[test]
    fn omits_empty_optional_rows() {
        let without = contact_body(&ana());
        assert!(!without.contains("Empresa:"));
        assert!(!without.contains("Servicio de interés:"));

        let mut payload = ana();
        payload.company = Some("ACME".to_string());
        payload.service = Some(String::new());
        let with_company = contact_body(&payload);
        assert!(with_company.contains("Empresa:"));
        assert!(with_company.contains("ACME"));
        assert!(!with_company.contains("Servicio de interés:"));
    }

    #[test]
    fn subject_falls_back_without_service() {
        assert_eq!(contact_subject(&ana()), "Nuevo contacto de Ana - Consulta general");
    }
}
