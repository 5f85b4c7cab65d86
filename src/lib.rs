pub mod config;
pub mod error;
pub mod fields;
pub mod format;
pub mod job;
pub mod progress;
pub mod schema;
pub mod summary;
pub mod writer;

pub use config::{OptionOverrides, Options};
pub use error::{GenerateError, Result};
pub use schema::Schema;
pub use summary::GenerationSummary;
pub use writer::{GenerationHandle, RecordWriter};
