pub mod builder;
pub mod controller;
pub mod dtos;
pub mod enums;
pub mod models;
pub mod service;
