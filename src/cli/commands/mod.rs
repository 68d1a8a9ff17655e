pub mod config;
pub mod digest;
pub mod init;
pub mod session;
