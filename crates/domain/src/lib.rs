//! # fieldscope-domain
//!
//! Pure domain model for fieldscope, a pre-save inspector that reports which
//! automation artifacts react to a change of a single field.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, the inspection context
//! - Define **Automation Events** (the unified shape both remote sources are
//!   normalized into)
//! - Define **Reports** and the pure formatting pipeline (stable sort, label
//!   wording, line rendering)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod context;
pub mod error;
pub mod event;
pub mod report;
