//! Core domain types
//!
//! This module contains the domain structures shared between the Jenkins
//! client (which consumes them) and the front ends (which build them from
//! user input).

pub mod job;
pub mod prompt;
