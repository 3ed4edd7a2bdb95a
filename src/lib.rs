pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod filter;
pub mod models;
pub mod pages;
pub mod validation;
