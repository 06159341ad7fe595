use serde::Deserialize;

/// Submitted new/edit highlight form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HighlightFormDto {
    pub csrf_token: String,
    pub page: String,
    pub content: String,
}
