//! crates/printer/src/macros.rs
//! Printing macros that capture the call site.
//!
//! There is no macro for [`PrintLevel::Silent`](crate::PrintLevel::Silent):
//! it is a threshold, not a message tag.

/// Prints at [`PrintLevel::All`](crate::PrintLevel::All).
///
/// # Example
/// ```
/// printer::print_all!("feature {} tracked for {} frames\n", 12, 4);
/// ```
#[macro_export]
macro_rules! print_all {
    ($($arg:tt)*) => {
        $crate::emit($crate::PrintLevel::All, ::core::file!(), ::core::line!(), ::core::format_args!($($arg)*))
    };
}

/// Prints at [`PrintLevel::Debug`](crate::PrintLevel::Debug).
///
/// # Example
/// ```
/// printer::print_debug!("loaded {} cameras\n", 2);
/// ```
#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {
        $crate::emit($crate::PrintLevel::Debug, ::core::file!(), ::core::line!(), ::core::format_args!($($arg)*))
    };
}

/// Prints at [`PrintLevel::Info`](crate::PrintLevel::Info).
#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {
        $crate::emit($crate::PrintLevel::Info, ::core::file!(), ::core::line!(), ::core::format_args!($($arg)*))
    };
}

/// Prints at [`PrintLevel::Warning`](crate::PrintLevel::Warning).
#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        $crate::emit($crate::PrintLevel::Warning, ::core::file!(), ::core::line!(), ::core::format_args!($($arg)*))
    };
}

/// Prints at [`PrintLevel::Error`](crate::PrintLevel::Error).
///
/// # Example
/// ```
/// use printer::colors::{RED, RESET};
///
/// let path = "estimator_config.yaml";
/// printer::print_error!("{RED}unable to open the configuration file!\n{path}{RESET}\n");
/// ```
#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        $crate::emit($crate::PrintLevel::Error, ::core::file!(), ::core::line!(), ::core::format_args!($($arg)*))
    };
}
