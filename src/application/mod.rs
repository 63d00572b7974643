/// Authentication and bearer credential
pub mod auth;
/// Application configuration module
pub mod config;
/// Resource services, one per API family
pub mod services;
