//! Core domain logic for Quarry (protocol-agnostic)
//!
//! This module contains the catalog model, the search pipeline, and
//! the supporting configuration and error types. Adapters (http, cli)
//! depend on core; core depends on no adapter.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;
