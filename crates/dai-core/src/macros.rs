//! Debug output macros
//!
//! Both log at `debug` level and do nothing unless a logger is installed.

/// Log the text of an expression followed by its value
///
/// `dai_pv!(3 + 4)` logs `3 + 4 = 7`.
#[macro_export]
macro_rules! dai_pv {
    ($x:expr) => {
        $crate::__log::debug!("{} = {:?}", stringify!($x), $x)
    };
}

/// Log a debugging message
#[macro_export]
macro_rules! dai_dmsg {
    ($($arg:tt)+) => {
        $crate::__log::debug!($($arg)+)
    };
}
