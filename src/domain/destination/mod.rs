pub mod client;
pub mod dto;
pub mod handler;
pub mod parser;
pub mod prompt;
pub mod service;
