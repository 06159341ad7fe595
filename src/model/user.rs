use serde::Deserialize;

/// Submitted profile edit form.
///
/// Every field is kept as raw text so an invalid submission can be rendered back
/// unchanged. Blank fields clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserFormDto {
    pub csrf_token: String,
    pub description: String,
    pub amazon_associates_id: String,
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub instagram: String,
    pub phone: String,
    pub whatsapp: String,
    pub telegram: String,
}
