//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage-agnostic contract for saved-resume persistence.
//! - Isolate SQLite key-value details from session orchestration.
//!
//! # Invariants
//! - The saved list is read and written as one whole serialized document.
//! - Malformed or absent stored data degrades to an empty list, never an
//!   error surfaced to callers.

pub mod resume_store;
