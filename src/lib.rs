pub mod config;
pub mod data;
pub mod outline;
pub mod validate;
