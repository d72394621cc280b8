// Email/password accounts and bearer-token sessions.

pub mod extract;
pub mod handlers;
pub mod password;
pub mod store;
pub mod tokens;
