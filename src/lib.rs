//! TeamLens - Founder Team Analysis Workflow Engine
//!
//! This crate implements the core workflow for assembling a team of prospect
//! profiles plus startup metadata, submitting the team to an external AI
//! evaluator, and tracking the resulting analysis report through its
//! two-phase completion (scores first, interview synthesis later).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
