pub mod info_key;
