mod defaults;
mod loader;
mod types;
mod validation;

pub use defaults::CONFIG_FILES;
pub use loader::load_config;
pub use types::TocConfig;
pub use validation::validate_config;
