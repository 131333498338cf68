pub mod flags;
pub mod flash;
pub mod form;
pub mod handlers;
pub mod service;
pub mod store;
pub mod views;
