//! # Core Selector Logic
//!
//! This module contains the selector's state machine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Grid (layout)        │
//!                    │  • State (selector)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                                ▼
//!                    ┌─────────────────────────┐
//!                    │      TUI Adapter        │
//!                    │  (ratatui, crossterm,   │
//!                    │   Filesystem, logs)     │
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`grid`]: Grid geometry and column-major cursor indexing
//! - [`state`]: The `Selector` struct holding all selector state
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`log_buffer`]: Bounded ring of captured log lines
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod grid;
pub mod log_buffer;
pub mod state;
