pub use super::friend_requests::Entity as FriendRequests;
pub use super::friendships::Entity as Friendships;
pub use super::users::Entity as Users;
