//! Core library modules for the taskbook application.
//!
//! Provides the shared infrastructure the other layers build on: the task
//! model exchanged between storage, router and client, the environment-backed
//! configuration, and the centralized messaging system.

pub mod config;
pub mod messages;
pub mod task;
