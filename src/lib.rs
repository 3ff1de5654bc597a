pub mod api;
pub mod config;
pub mod data_models;
pub mod error;
pub mod format;
pub mod history;
pub mod itunes;
pub mod repl;
pub mod search;
