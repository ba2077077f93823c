//! Test modules for Huli.
//!
//! This module contains crate-level testing for cross-component
//! functionality:
//! - Configuration loading and validation tests
//! - Error handling and reporting tests
//!
//! Component-local unit and property tests live next to their components.

pub mod config_tests;
