pub mod config;
pub mod fetch;
pub mod logging;
pub mod retry;
pub mod storage;
