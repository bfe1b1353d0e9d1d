//! Core use-case services.
//!
//! # Responsibility
//! - Turn primitive caller input into validated model calls.
//! - Keep CLI layers decoupled from model construction details.

pub mod resume_service;
