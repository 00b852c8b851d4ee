//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `links`, `appearance`, etc.) so
//! individual components can depend on small focused models. Each struct
//! exposes an explicit mutation API; components never poke fields that have
//! an invariant attached (link positions, toast ids).

pub mod admin;
pub mod appearance;
pub mod auth;
pub mod links;
pub mod plans;
pub mod ui;
