//! Networking modules for the hosted-backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST/auth/storage surfaces, `types` defines the wire
//! schema, `config` resolves the endpoint, and `error` sanitizes backend
//! messages before they reach a toast.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
