//! EduLink CLI library — command implementations and session
//! persistence, exposed for the `edulink` binary and integration tests.

pub mod commands;
pub mod config;
