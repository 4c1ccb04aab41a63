mod types;

pub use types::{InvocationConfig, LoggingConfig, DEFAULT_GO_BIN, DEFAULT_OUT_FILE};
