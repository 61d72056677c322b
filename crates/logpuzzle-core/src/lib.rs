pub mod config;
pub mod logging;

pub mod downloader;
pub mod extract;
pub mod fetch;
pub mod order;
pub mod page;
pub mod retry;
