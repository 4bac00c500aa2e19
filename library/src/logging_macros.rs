// Wrappers around crate::log's logging functions that prepend "[hashgen]" to the log message.
//
// Under #[cfg(test)] they print instead, so test output shows what the driver did
// without a logger being installed.

#[cfg(test)]
#[macro_export]
macro_rules! hashgen_info {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        println!(concat!("[hashgen] ", $fmt), $($($arg)*)?)
    };
}

#[cfg(not(test))]
#[macro_export]
macro_rules! hashgen_info {
    // hashgen_info!("a {} event", "log")
    ($fmt:expr $(, $($arg:tt)*)?) => {
        log::info!(concat!("[hashgen] ", $fmt), $($($arg)*)?)
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! hashgen_debug {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        println!(concat!("[hashgen] ", $fmt), $($($arg)*)?)
    };
}

#[cfg(not(test))]
#[macro_export]
macro_rules! hashgen_debug {
    // hashgen_debug!("a {} event", "log")
    ($fmt:expr $(, $($arg:tt)*)?) => {
        log::debug!(concat!("[hashgen] ", $fmt), $($($arg)*)?)
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! hashgen_warn {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        println!(concat!("[hashgen] ", $fmt), $($($arg)*)?)
    };
}

#[cfg(not(test))]
#[macro_export]
macro_rules! hashgen_warn {
    // hashgen_warn!("a {} event", "log")
    ($fmt:expr $(, $($arg:tt)*)?) => {
        log::warn!(concat!("[hashgen] ", $fmt), $($($arg)*)?)
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! hashgen_error {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        println!(concat!("[hashgen] ", $fmt), $($($arg)*)?)
    };
}

#[cfg(not(test))]
#[macro_export]
macro_rules! hashgen_error {
    // hashgen_error!("a {} event", "log")
    ($fmt:expr $(, $($arg:tt)*)?) => {
        log::error!(concat!("[hashgen] ", $fmt), $($($arg)*)?)
    };
}
