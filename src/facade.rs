use std::ffi::CStr;

use libc::c_char;
use libretro_sys::LogLevel;

/// Ready-made sink that forwards core messages into the `log` facade
/// under the `libretro` target. Pass it to [`configure`](crate::configure)
/// when the embedding frontend already has a `log` backend installed.
pub unsafe extern "C" fn log_facade_sink( level: LogLevel, message: *const c_char ) {
    if message.is_null() {
        return;
    }

    let text = CStr::from_ptr( message ).to_string_lossy();
    let level = match level {
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Error => log::Level::Error,
        _ => log::Level::Info
    };

    log::log!( target: "libretro", level, "{}", text );
}
