//! Free-form canvas editing surface.
//!
//! # Responsibility
//! - Own the flat element list, selection, and drag interaction state.
//! - Keep canvas state independent from resume data after seeding.

pub mod canvas_session;
