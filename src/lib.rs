pub mod bank;
pub mod config;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod render;
pub mod screen;
pub mod seed;
pub mod storage;
pub mod store;
