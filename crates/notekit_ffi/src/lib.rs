//! Flutter-facing bindings for notekit core.

pub mod api;
