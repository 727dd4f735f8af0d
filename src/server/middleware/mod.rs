//! Request guards and middleware.

pub mod auth;
pub mod host;

#[cfg(test)]
mod test;
