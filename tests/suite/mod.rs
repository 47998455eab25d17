//! Integration test modules

mod config;
mod controller;
mod keyboard;
