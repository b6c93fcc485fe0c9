//! Host-facing bindings for the notes core.

pub mod api;
