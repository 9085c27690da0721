use std::mem;
use std::ptr;
use std::ffi::CStr;

use libc::c_char;
use libretro_sys::{LogCallback, LogLevel, LogPrintfFn};

/// Capacity of the message buffer handed to the sink, terminator included.
pub const MAX_LOG_SIZE: usize = 4096;

/// Destination for messages the frontend pushes through the log callback.
///
/// The message is already formatted and NUL-terminated; it only stays
/// valid for the duration of the call, so the sink has to copy it if it
/// wants to keep it around.
pub type LogSink = unsafe extern "C" fn( level: LogLevel, message: *const c_char );

static mut LOG_SINK: Option< LogSink > = None;

/// Stores `sink` as the process-wide log destination and writes the
/// adapter's trampoline into `target.log`, so that anything the loaded
/// core sends through RETRO_ENVIRONMENT_GET_LOG_INTERFACE ends up at
/// `sink`.
///
/// `target` is the `retro_log_callback` structure the core handed to the
/// environment callback; it must not be null.
pub fn configure( sink: LogSink, target: *mut LogCallback ) {
    assert_ne!( target, ptr::null_mut() );

    unsafe {
        LOG_SINK = Some( sink );

        // The slot's declared type takes printf-style varargs; the
        // trampoline expects the message already formatted. See the
        // crate docs for the contract.
        (*target).log = mem::transmute::< LogSink, LogPrintfFn >( log_trampoline as LogSink );
    }
}

/// Clears the stored sink. Does not touch any `retro_log_callback`
/// structure it was previously written into; the frontend must not log
/// through it afterwards.
pub fn teardown() {
    unsafe {
        LOG_SINK = None;
    }
}

/// Forwarding function installed into `retro_log_callback.log`.
///
/// Copies `message` into a fixed buffer of [`MAX_LOG_SIZE`] bytes,
/// truncating if it doesn't fit, and hands `(level, buffer)` to the
/// configured sink. A no-op when no sink is configured or the message
/// is null.
pub unsafe extern "C" fn log_trampoline( level: LogLevel, message: *const c_char ) {
    let sink = LOG_SINK;
    let sink = match sink {
        Some( sink ) => sink,
        None => return
    };

    if message == ptr::null() {
        return;
    }

    let bytes = CStr::from_ptr( message ).to_bytes();
    let length = if bytes.len() < MAX_LOG_SIZE { bytes.len() } else { MAX_LOG_SIZE - 1 };

    let mut buffer = [0 as u8; MAX_LOG_SIZE];
    buffer[ ..length ].copy_from_slice( &bytes[ ..length ] );

    sink( level, buffer.as_ptr() as *const c_char );
}
