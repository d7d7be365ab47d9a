//! Shared Dioxus components and D3.js bridge for the mobility dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart renderer via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Sidebar controls, chart containers and status displays

pub mod components;
pub mod js_bridge;
pub mod state;
