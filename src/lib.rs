//! Shoal - Pooled Static File Server
//!
//! Core library for the worker pool and HTTP functionality.

pub mod config;
pub mod http;
pub mod server;
