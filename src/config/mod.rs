mod loader;
mod model;
mod settings;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{CommentsConfig, Config, OutputConfig};
pub use settings::{CountSettings, SettingOverrides};
