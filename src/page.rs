pub mod config;
pub mod controller;
mod preset;
pub mod snapshot;
