pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{ConvertOptions, handle_convert, read_input, write_output};

pub use graphnorm_core::{DegeneratePolicy, GraphError, convert};
