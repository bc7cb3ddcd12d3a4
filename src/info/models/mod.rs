pub mod info_entry;
pub mod info_overlay;
