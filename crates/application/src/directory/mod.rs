pub mod dtos;
pub mod list_users;

#[cfg(test)]
#[path = "list_users_test.rs"]
mod tests;
