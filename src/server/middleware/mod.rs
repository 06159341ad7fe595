//! Request guards and session wrappers used by controllers.

pub mod auth;
pub mod method_override;
pub mod session;

#[cfg(test)]
mod test;
