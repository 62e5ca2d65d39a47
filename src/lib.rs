pub mod api;
pub mod collector;
pub mod dashboard;
pub mod export;
pub mod forms;
pub mod models;
pub mod notify;
pub mod ui;
pub mod validate;
