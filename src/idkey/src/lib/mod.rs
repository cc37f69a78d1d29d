pub mod environment;
pub mod error;
pub mod logger;
pub mod password;
