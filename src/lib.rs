// src/lib.rs
pub mod api;
pub mod banner;
pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod schedule;
pub mod session;
pub mod synergy;
pub mod view;
