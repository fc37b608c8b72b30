//! eventdesk Core — shared domain abstractions.
//!
//! This crate defines the event record, the identifier generator and the
//! repository trait that storage backends implement. It contains no
//! infrastructure code.

pub mod error;
pub mod event;
pub mod id;
pub mod repository;
