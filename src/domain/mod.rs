pub mod catalog;
pub mod destination;
pub mod health;
