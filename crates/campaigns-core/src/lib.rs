//! # campaigns-core
//!
//! Core types and utilities for the Campaigns API.
//!
//! This crate provides the building blocks shared by the other crates:
//! - Error types and the ordered query error list
//! - Result type alias
//! - Pagination types and the page slicing routine
//! - Configuration types

pub mod config;
pub mod error;
pub mod pagination;

pub use error::*;
pub use pagination::*;
