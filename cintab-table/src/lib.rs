pub mod config;
pub mod error;
pub mod model;

pub use config::TableConfig;
pub use error::TableError;
pub use model::{LookupMode, TableModel, TableOptions};
