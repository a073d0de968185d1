pub mod catalog;
pub mod secrets;
pub mod store;
