pub mod manager;
pub mod models;
pub mod store;

pub use manager::{connect, DatabaseError};
pub use store::Store;
