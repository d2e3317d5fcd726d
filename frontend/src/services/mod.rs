pub mod date_utils;
pub mod file_reader;
pub mod host;
pub mod logging;
pub mod notifications;
pub mod scheduler;
pub mod storage;
