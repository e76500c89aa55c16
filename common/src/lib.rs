pub mod arguments;
pub mod config;
pub mod error;
pub mod jobs;
pub mod logger;
pub mod registry;
pub mod util;

pub use arguments::{Args, Kwargs};
pub use error::JobError;
pub use jobs::JobDescriptor;
pub use registry::{JobFunction, JobHandler};

pub use inventory;
pub use serde_json::Value;
