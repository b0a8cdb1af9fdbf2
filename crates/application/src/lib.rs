pub mod auth;
pub mod directory;
pub mod error;
pub mod friendships;
pub mod presence;
pub mod requests;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{AppError, AppResult};
