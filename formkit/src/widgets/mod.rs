pub mod chat_autosize;
pub mod date_picker;
pub mod file_uploader;
pub mod password_toggle;
pub mod user_lookup;

pub use chat_autosize::ChatAutosize;
pub use date_picker::DatePicker;
pub use file_uploader::FileUploader;
pub use password_toggle::PasswordToggle;
pub use user_lookup::UserLookup;
