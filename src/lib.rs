// Library exports for integration tests and the desktop binary

pub mod config;
pub mod customers;
pub mod db;
pub mod ui;
