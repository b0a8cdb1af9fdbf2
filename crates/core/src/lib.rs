pub mod entities;
pub mod notifications;
pub mod presence;
