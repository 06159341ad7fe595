use serde::Deserialize;

/// Body of forms that carry nothing but the CSRF token (delete, reorder).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CsrfFormDto {
    #[serde(default)]
    pub csrf_token: String,
}
