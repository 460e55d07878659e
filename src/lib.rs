pub mod catalog;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod server;
pub mod state;
pub mod types;

pub use catalog::Catalogue;
pub use error::{CatalogError, EntityKind, ServiceError};
pub use types::{Discipline, Recommendation, Scope};
