#[cfg(not(test))]
#[cfg(feature = "log")]
macro_rules! sim_log {
    (trace, $($arg:expr),*) => { log::trace!($($arg),*) };
    (debug, $($arg:expr),*) => { log::debug!($($arg),*) };
}

#[cfg(test)]
#[cfg(feature = "log")]
macro_rules! sim_log {
    (trace, $($arg:expr),*) => { std::println!($($arg),*) };
    (debug, $($arg:expr),*) => { std::println!($($arg),*) };
}

#[cfg(not(feature = "log"))]
macro_rules! sim_log {
    ($level:ident, $($arg:expr),*) => {{ $( let _ = &$arg; )* }}
}

macro_rules! sim_trace {
    ($($arg:expr),*) => (sim_log!(trace, $($arg),*));
}

macro_rules! sim_debug {
    ($($arg:expr),*) => (sim_log!(debug, $($arg),*));
}
