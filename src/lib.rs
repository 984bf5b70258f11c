//! Counseling worksheet assistant: a mark/language alignment engine with the
//! supporting plumbing (phrase banks, statement templates, draft storage, and
//! document rendering) exposed through a service facade and HTTP router.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
