//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and store calls into use-case level APIs.
//! - Keep render collaborators decoupled from store internals.

pub mod board_service;
