mod file_locator;
mod path_validator;
mod webp_encoder;

pub use file_locator::find_case_insensitive;
pub use path_validator::ensure_directory_exists;
pub use webp_encoder::{WEBP_QUALITY, convert_to_webp};
