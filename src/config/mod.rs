pub mod load;
pub mod types;

pub use load::SETTINGS_FILE;
pub use types::{Config, Language, UserSettings};
