//! Colored, timestamped console logging.
//!
//! All macros print to stdout with a `chrono::Utc` wall clock stamp. `event!` is silent
//! unless `LOG_AIP_EVENTS` is set, since it fires on every tick.

#[doc(hidden)]
#[macro_export]
macro_rules! stamped {
    ($style:literal, $tag:literal, $($arg:tt)*) => {
        println!(
            concat!("\x1b[", $style, "m[", $tag, "[{}]\x1b[0m {}"),
            chrono::Utc::now().format("%H:%M:%S"),
            format!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::stamped!("32", "INFO] ", $($arg)*) };
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => { $crate::stamped!("33", "LOG]  ", $($arg)*) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::stamped!("35", "WARN] ", $($arg)*) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::stamped!("31", "ERROR]", $($arg)*) };
}

/// Announces a route handed to the vehicle actuator.
#[macro_export]
macro_rules! nav {
    ($($arg:tt)*) => { $crate::stamped!("1;34", "NAV]  ", $($arg)*) };
}

#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if std::env::var("LOG_AIP_EVENTS").is_ok() {
            $crate::stamped!("36", "EVENT]", $($arg)*)
        }
    };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        panic!(
            "\x1b[1;31m[FATAL][{}]\x1b[0m {}",
            chrono::Utc::now().format("%H:%M:%S"),
            format!($($arg)*)
        )
    };
}
