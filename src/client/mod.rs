//! Client-side view-model for the task list UI.
//!
//! A UI-toolkit-agnostic rendition of the browser controller: [`api`] talks
//! JSON over HTTP to the server, [`view`] turns task lists into markup and
//! action bindings, and [`controller`] ties the two together around the
//! single piece of session state — the id of the task being edited.

pub mod api;
pub mod controller;
pub mod view;
