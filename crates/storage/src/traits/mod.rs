//! Storage backend trait abstraction
//!
//! Defines the async record-store trait the service layer depends on, so the
//! PostgreSQL and in-process backends are interchangeable behind enum dispatch.

pub mod school;

pub use school::SchoolStore;
