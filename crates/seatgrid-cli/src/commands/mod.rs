pub mod algorithms;
pub mod init;
pub mod plan;
