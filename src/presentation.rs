//! Presentation layer
//!
//! This module contains everything drawn on screen:
//! - The admin application built on the composition core
//! - Widgets painting render trees
//! - Configuration (keybindings)

pub mod admin;
pub mod config;
pub mod widgets;
