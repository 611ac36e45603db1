//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable-slot data access contract.
//! - Isolate SQLite query and payload encoding details from service
//!   orchestration.
//!
//! # Invariants
//! - Repository writes always replace the persisted collection wholesale.
//! - Repository APIs return transport errors; decode failures of stored
//!   payloads are absorbed into an empty read, not surfaced as errors.
//!
//! # See also
//! - docs/architecture/persistence.md

pub mod board_repo;
