//! Data Transfer Objects for the Jenkins REST API
//!
//! Wire shapes returned by Jenkins endpoints, decoded with serde and
//! converted into domain values.

pub mod crumb;
