pub mod button;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod stories;
pub mod ui;
