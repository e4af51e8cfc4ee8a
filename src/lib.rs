pub mod app;
pub mod clock;
pub mod config;
pub mod format;
pub mod history;
pub mod models;
pub mod storage;
