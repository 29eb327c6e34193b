//! CRUD API over the back-office client and product records.
pub mod app;
pub mod constants;
pub mod db;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
