pub mod connection;
pub mod handler;
pub mod messages;
pub mod presence;
