//! Core interfaces for host-framework integration
//!
//! The collector trait is the seam between the adapter and whatever front
//! end drives it: a front end asks `matches` to recognize candidate files
//! and `collect` to turn one recognized file into reportable cases.

pub mod collector;

pub use collector::Collector;
