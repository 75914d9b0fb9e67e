//! Core module - fundamental data structures and utilities
//!
//! This module provides:
//! - The run configuration and extension classifier
//! - The walk error taxonomy and result entries
//! - Path normalization (resolve-then-relativize)
//! - Rendering of the result list

pub mod config;
pub mod model;
pub mod paths;
pub mod render;
