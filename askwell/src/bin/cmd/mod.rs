pub mod completions_cmd;
pub mod config;
pub mod confirm_cmd;
pub mod default;
pub mod select_cmd;
pub mod text_cmd;
