//! webserv - a minimal static file server
//!
//! Core library for request parsing, path resolution and serving.

pub mod config;
pub mod http;
pub mod server;
