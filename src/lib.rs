//! FAIR Assessment - evaluation core for FAIR-data compliance assessments.
//!
//! An assessment is a tree of principles, criteria and tests. Test results
//! aggregate into one metric verdict per criterion, and criteria aggregate
//! into a compliance verdict (mandatory criteria) and a ranking (optional
//! criteria). The crate also carries the typed client for the assessment
//! backend and the wizard session that drives editing and automated checks.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
