//! batflow: Interactive Batch Script Builder
//!
//! This library provides the editing core of the batflow console
//! application: the command catalog, the ordered step model with undo
//! history, deterministic script rendering, JSON persistence with
//! autosave, starter presets, and the editor controller that ties
//! them to pluggable frontend surfaces.

// Re-export modules
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod export;
pub mod notify;
pub mod persist;
pub mod presets;
pub mod render;
pub mod repl;
pub mod view;
pub mod workflow;
