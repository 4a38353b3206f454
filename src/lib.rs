pub mod api;
pub mod config;
pub mod context;
pub mod data_models;
pub mod diagnostics;
pub mod dom;
pub mod error;
pub mod links;
pub mod offset;
pub mod parser;
pub mod service;
