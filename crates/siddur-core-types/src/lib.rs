//! Core types shared across Siddur facilities
//!
//! This crate provides the canonical schema constants used by both the error
//! handling and logging facilities: structured field keys and event names.

pub mod schema;
