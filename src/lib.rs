pub mod app_state;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod parsers;
pub mod services;

#[cfg(test)]
pub mod test_utils;
