//! Logging hooks for the formatting path.
//!
//! With the `log` feature enabled these forward to `log::trace!`; otherwise
//! they expand to nothing and their arguments are never evaluated.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::log::trace!(target: "formatbuf", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

pub(crate) use trace;
