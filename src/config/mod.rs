pub mod load;
pub mod types;

pub use types::{
    Config, ConversionJob, ConversionSettings, DEFAULT_LOGO_DIR, Language, UserSettings,
};
