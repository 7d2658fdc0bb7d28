//! Domain model for resume documents and canvas elements.
//!
//! # Responsibility
//! - Define the canonical resume aggregate edited by a session.
//! - Define the independent free-form canvas element shape.
//! - Keep serialized field names stable for persistence and share links.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - Child entities (experience/education/skill) have no lifecycle outside
//!   their parent resume.
//! - Canvas elements never reference resume fields after seeding.

pub mod element;
pub mod resume;
pub mod sample;
pub mod template;
