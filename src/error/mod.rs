pub mod config;
pub mod gesture;
pub mod init;
pub mod log_init;
