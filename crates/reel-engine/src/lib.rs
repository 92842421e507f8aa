mod error;
mod merge;
mod service;
mod session;

pub use error::CatalogError;
pub use service::CatalogService;
pub use session::Session;
