//! Domain model for board tasks.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one task-centric shape shared by storage and column projections.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Enum-valued fields never persist values outside their variants.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod task;
