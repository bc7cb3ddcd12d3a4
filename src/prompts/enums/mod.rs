pub mod aspect_ratio;
pub mod display_lang;
pub mod mj_style;
pub mod mj_version;
pub mod platform;
pub mod quality;
pub mod setting_key;
