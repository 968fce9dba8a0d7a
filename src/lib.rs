pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod protocol;
pub mod recommend;
pub mod server;
