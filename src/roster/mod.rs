pub mod models;
pub mod repo;
pub mod seed;
pub mod serialize;
pub mod store;
pub mod validation;

pub use repo::{Entity, RosterError};
pub use store::Store;
pub use validation::ValidationError;
