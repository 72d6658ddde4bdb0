#![forbid(unsafe_code)]
#![deny(
    warnings,
    unused,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Gesture settings web UI.
//!
//! A Yew grid of selectable tiles used to choose which hand gesture drives an
//! action. Tile and grid state is computed in [`logic`] so it can be tested
//! natively; the components and the wasm start function only exist on wasm32.

pub mod config;
pub mod gestures;
pub mod logic;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
