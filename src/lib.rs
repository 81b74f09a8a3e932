//! homedeck - a terminal homepage with list utilities.
//!
//! The library holds every widget and app as plain state machines; the
//! `homedeck` binary drives them through the TUI or one-shot subcommands.

pub mod apps;
pub mod clipboard;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod status;
pub mod text_input;
pub mod tui;
pub mod widgets;
