mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{CheckConfig, Config, DEFAULT_MAX_LINE_LENGTH, DEFAULT_MAX_LINES_IN_FILE};
