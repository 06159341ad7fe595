use serde::Deserialize;

/// Submitted new/edit shelf form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShelfFormDto {
    pub csrf_token: String,
    pub name: String,
}
