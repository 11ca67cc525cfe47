//! folio-app library root.
//!
//! The layer a host UI calls into: configuration, logging setup and the
//! open / save / share actions. Actions never return errors or panic;
//! failures become dialogs and log lines.

pub mod actions;
pub mod config;
pub mod dialog;
pub mod logging;
pub mod state;
