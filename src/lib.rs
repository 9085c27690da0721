//! Marshalling glue between a libretro frontend's environment callback
//! and the structures a loaded core hands it.
//!
//! The libretro environment mechanism is a single call-and-return slot:
//! the core invokes the frontend's environment callback with a command
//! number and a pointer to a command-specific structure, and the
//! frontend answers by mutating that structure in place. This crate
//! covers the string and callback plumbing of three of those commands:
//!
//! * RETRO_ENVIRONMENT_GET_LOG_INTERFACE — [`configure`] installs a
//!   forwarding trampoline into the core's `retro_log_callback` and
//!   remembers where messages should go ([`LogSink`]).
//! * RETRO_ENVIRONMENT_GET_VARIABLE — [`set_variable_value`] and
//!   [`clear_variable_value`] fill in or null out the `value` field of a
//!   `retro_variable` record.
//! * RETRO_ENVIRONMENT_GET_SYSTEM_DIRECTORY /
//!   RETRO_ENVIRONMENT_GET_SAVE_DIRECTORY — [`set_directory`] fills in a
//!   directory string slot.
//!
//! Strings written into core-visible slots are heap-allocated copies;
//! ownership stays with the embedding frontend, which reclaims them
//! through [`release_owned_string`]. Nothing here frees memory behind
//! the caller's back.
//!
//! The trampoline deliberately diverges from the printf contract of
//! `retro_log_printf_t`: it takes a pre-formatted message and a
//! severity, leaving formatting to the caller. Cores that pass extra
//! varargs will have them ignored rather than substituted.
//!
//! Everything is synchronous and meant for the single thread the
//! frontend drives callbacks on; the one piece of shared state is the
//! sink slot written by [`configure`] and cleared by [`teardown`].

#[doc(hidden)]
pub extern crate libc;
#[doc(hidden)]
pub extern crate libretro_sys;

#[cfg(feature = "logging")]
extern crate log;

mod environment;
mod log_interface;

#[cfg(feature = "logging")]
mod facade;

pub use libretro_sys::{LogCallback, LogLevel, Variable};

pub use environment::{clear_variable_value, release_owned_string, set_directory, set_variable_value};
pub use log_interface::{configure, log_trampoline, teardown, LogSink, MAX_LOG_SIZE};

#[cfg(feature = "logging")]
pub use facade::log_facade_sink;
