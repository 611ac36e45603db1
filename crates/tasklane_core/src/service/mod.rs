//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod board_service;
pub mod column_view;
pub mod drag_drop;
