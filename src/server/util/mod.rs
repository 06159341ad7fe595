//! Cross-cutting helpers shared by the server layers.

pub mod validation;
