pub mod api;
pub mod error;
pub mod search;
pub mod state;

pub use api::{DirectoryApi, HttpDirectoryApi};
pub use error::ClientError;
pub use search::filter_employees;
pub use state::{Directory, FormField, FormMode};
