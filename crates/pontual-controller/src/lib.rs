//! Composition root for the Pontual attendance terminal.
//!
//! Wires the tag reader and LCD to the scan coordinator: the scan loop
//! polls the reader sequentially, hands each scan to the core, renders the
//! outcome, and keeps polling after every outcome including failures.
//! Termination is signalled with a [`tokio_util::sync::CancellationToken`]
//! passed into the loop; there is no process-global running flag.

pub mod config;
pub mod enrollment;
pub mod error;
pub mod scan_loop;

pub use config::ControllerConfig;
pub use enrollment::enroll_tag;
pub use error::ControllerError;
pub use scan_loop::run_scan_loop;
