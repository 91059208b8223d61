#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A name/location entry form with a fixed five-row table, backed by a
//! location source and a debounced name-availability check.

pub mod api;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod tui;
