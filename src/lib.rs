#![forbid(unsafe_code)]
//! Miso Gallery — a minimal web gallery confined to one directory tree.

pub mod cli;
pub mod config;
pub mod error;
pub mod gallery;
pub mod links;
pub mod render;
pub mod server;
