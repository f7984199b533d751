//! # fieldscope-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `EventSource` — an asynchronous, fallible read of automation artifacts
//!   - `Surface` — one rectangle of host UI the presenter writes into
//! - Own the **Event Catalog**, the append-only per-session event list
//! - Own the **Disclosure Presenter**, the collapsed/expanded toggle machine
//! - Orchestrate the two fire-and-forget source reads via the `Inspector`
//!
//! ## Dependency rule
//! Depends on `fieldscope-domain` only (plus `tokio` for task spawning and
//! the async mutex). Never imports adapter crates. Adapters depend on *this*
//! crate, not the reverse.

pub mod catalog;
pub mod inspector;
pub mod ports;
pub mod presenter;
