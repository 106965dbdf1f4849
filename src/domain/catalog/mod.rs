pub mod data;
pub mod dto;
pub mod handler;
pub mod service;
