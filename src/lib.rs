//! Velador - inventory health-check filter for virtualized infrastructure
//!
//! This library narrows a raw inventory listing (triggered alerts,
//! virtualized compute nodes) down to the subset in scope for a health
//! check, using a multi-dimension inclusion/exclusion filter pipeline
//! with explicit precedence rules, and renders the result as a
//! monitoring-style report.

pub mod check;
pub mod cli;
pub mod config;
pub mod entity;
pub mod filter;
pub mod matcher;
pub mod pipeline;
pub mod policy;
pub mod report;
pub mod source;
