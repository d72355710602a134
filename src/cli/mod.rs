//! CLI infrastructure for the grove terminal front-end
//!
//! The terminal acts as the renderer: it prints the current board, status
//! and move list, and turns typed commands into session events.

pub mod commands;
pub mod config;
pub mod input;
pub mod output;
