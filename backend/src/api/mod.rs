pub mod client;
pub mod errors;
pub mod server;
pub mod users;
