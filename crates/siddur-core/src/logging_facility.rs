//! Logging for the siddur crates.
//!
//! Library code emits `tracing` events through [`log_op_start!`],
//! [`log_op_end!`] and [`log_op_error!`] so every operation reports the same
//! `event`/`op` fields. Binaries pick an output shape once with [`init`];
//! tests install [`init_test_capture`] instead and assert on the captured
//! events.
//!
//! ```rust
//! use siddur_core::logging_facility::{init, Profile};
//!
//! init(Profile::for_json_flag(false));
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
