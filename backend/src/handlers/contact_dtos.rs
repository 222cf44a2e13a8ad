use serde::Deserialize;

// Required fields default to "" when the key is absent, so a missing key and
// an empty value fail the same presence check in the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub company: Option<String>,
    pub service: Option<String>,
    #[serde(default)]
    pub message: String,
}
