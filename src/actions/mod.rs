pub mod clipboard;
pub mod controller;
pub mod file_saver;
pub mod service;
