//! Timecard compliance auditor
//!
//! This crate reads employee timecard exports, groups shifts per employee,
//! and flags three conditions: seven consecutive worked days, a break
//! between shifts of more than one but less than ten hours, and any single
//! shift longer than fourteen hours.

#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod report;
