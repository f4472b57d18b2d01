pub mod app;
pub mod cli;
pub mod commands;
pub mod core;
pub mod gcp;
pub mod logging;
