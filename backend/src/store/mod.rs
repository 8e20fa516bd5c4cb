pub mod models;
pub mod repo;

pub use models::{NewUser, User};
pub use repo::UserStore;
