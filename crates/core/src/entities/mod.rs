pub mod prelude;

pub mod friend_requests;
pub mod friendships;
pub mod users;
