//! # Core Application Logic
//!
//! This module contains Dish Decider's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No timers.      │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`deck`]: Ordered stack of dish cards plus the liked list
//! - [`gesture`]: Drag offset → card transform and swipe decision
//! - [`flow`]: Screen navigation and the auto-advance generation counter
//! - [`session`]: Group members, radius and filter selections
//! - [`qr`]: Classifies scanned QR payloads
//! - [`item`]: `Dish` and `Restaurant` records
//! - [`catalog`]: Sample data and JSON catalog loading
//! - [`config`]: `~/.dish-decider/config.toml` and override resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod flow;
pub mod gesture;
pub mod item;
pub mod qr;
pub mod session;
pub mod state;
