//! contactd - A minimal contact book HTTP service backed by SQLite

pub mod cli;
pub mod config;
pub mod contact;
pub mod http_server;
pub mod storage;
