pub mod document;
pub mod outline;
pub mod path;
pub mod polygon;

pub use document::direct_child_paths;
pub use outline::Outline;
pub use path::{trace_path, PathError, DEFAULT_SAMPLE_LENGTH};
