//! MRTUX Core
//!
//! Core types and abstractions for the MRTUX Jenkins job manager.
//!
//! This crate contains:
//! - Domain types: server configuration, job parameters and the job questionnaire
//! - DTOs: wire shapes returned by the Jenkins REST API
//! - Template handling: placeholder rendering, template discovery and the
//!   pipeline job XML envelope
//!
//! Nothing in here performs network I/O; see `mrtux-client` for that.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod dto;
pub mod job_config;
pub mod template;

pub use config::{ConfigError, ServerConfig};
