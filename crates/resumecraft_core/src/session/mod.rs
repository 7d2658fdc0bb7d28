//! Editing session services.
//!
//! # Responsibility
//! - Own the single current resume and the saved-resume list.
//! - Orchestrate persistence mirroring after successful mutations.
//!
//! # Invariants
//! - Sessions are explicit owned values; no ambient global state.
//! - Every mutation yields a complete new snapshot or leaves state
//!   untouched.

pub mod autosave;
pub mod resume_session;
