//! Shared form pieces.

use dioxus::prelude::*;

use crate::server::util::validation::ValidationErrors;

/// Hidden CSRF token field.
#[component]
pub fn CsrfField(token: String) -> Element {
    rsx!(input {
        r#type: "hidden",
        name: "csrf_token",
        value: "{token}",
    })
}

/// Messages reported for one field.
#[component]
pub fn FieldErrors(messages: Vec<String>) -> Element {
    rsx!(
        for message in messages {
            p {
                class: "text-error text-sm",
                "{message}"
            }
        }
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    TextArea,
}

/// Labelled input with the messages recorded for it.
#[component]
pub fn Field(
    label: &'static str,
    name: &'static str,
    value: String,
    errors: ValidationErrors,
    #[props(default)] kind: FieldKind,
    #[props(default)] required: bool,
) -> Element {
    let messages = errors.get(name).to_vec();
    let invalid = if messages.is_empty() { "" } else { "input-error" };

    rsx!(
        fieldset {
            class: "fieldset",
            legend {
                class: "fieldset-legend",
                "{label}"
            }
            {match kind {
                FieldKind::TextArea => rsx!(textarea {
                    class: "textarea w-full {invalid}",
                    name: name,
                    required: required,
                    rows: "6",
                    "{value}"
                }),
                FieldKind::Number => rsx!(input {
                    class: "input w-full {invalid}",
                    r#type: "number",
                    name: name,
                    value: "{value}",
                    required: required,
                }),
                FieldKind::Text => rsx!(input {
                    class: "input w-full {invalid}",
                    r#type: "text",
                    name: name,
                    value: "{value}",
                    required: required,
                }),
            }}
            FieldErrors { messages }
        }
    )
}

/// Multipart upload form for a single image.
#[component]
pub fn ImageUploadForm(
    action: String,
    csrf_token: String,
    field: &'static str,
    errors: ValidationErrors,
    back: String,
) -> Element {
    let messages = errors.get(field).to_vec();

    rsx!(
        form {
            method: "post",
            action: "{action}",
            enctype: "multipart/form-data",
            class: "flex flex-col gap-4",
            CsrfField { token: csrf_token }
            input {
                r#type: "file",
                name: field,
                accept: "image/jpeg,image/png,image/gif",
                class: "file-input w-full",
                required: true,
            }
            FieldErrors { messages }
            div {
                class: "flex gap-2",
                button { r#type: "submit", class: "btn btn-primary", "Upload" }
                a { href: "{back}", class: "btn btn-ghost", "Cancel" }
            }
        }
    )
}

/// POST button that deletes the resource at `path`.
#[component]
pub fn DeleteButton(path: String, csrf_token: String, label: &'static str) -> Element {
    let action = crate::view::path::delete(&path);

    rsx!(
        form {
            method: "post",
            action: "{action}",
            class: "inline",
            CsrfField { token: csrf_token }
            button {
                r#type: "submit",
                class: "btn btn-error btn-sm",
                "{label}"
            }
        }
    )
}
