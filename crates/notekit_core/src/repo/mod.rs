//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable key-value slot contract (`KeyValueStore`).
//! - Encode/decode the persisted note sequence on top of one slot.
//!
//! # Invariants
//! - Slot writes overwrite the previous value as a whole.
//! - Decoding failures of persisted notes are reported, never panicked on.

pub mod kv_store;
pub mod note_list_repo;
