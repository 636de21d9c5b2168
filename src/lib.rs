//! alias-gen: per-service email alias generator
//!
//! A library for building addresses of the form `service+suffix@domain`,
//! with the generation settings persisted to a local store and shareable
//! as a URL fragment.

pub mod alias;
pub mod config;
pub mod persist;
pub mod share;
pub mod suffix;
