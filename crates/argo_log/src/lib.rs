//! A wrapper around any logging crate
//! internal argo crates don't directly depend on logging crates such as tracing such that
//! it can very easily be changed.
//!
//! Logging is off unless the `ARGO_LOG` environment variable is set when the first
//! macro is hit, or it has been turned on with [`set_enabled`].

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

#[doc(hidden)]
pub use tracing as __tracing;

pub use tracing::Level;

static ENABLED: OnceCell<AtomicBool> = OnceCell::new();

fn flag() -> &'static AtomicBool {
    ENABLED.get_or_init(|| AtomicBool::new(std::env::var_os("ARGO_LOG").is_some()))
}

/// Whether the logging macros forward to `tracing`.
#[inline]
pub fn enabled() -> bool {
    flag().load(Ordering::Relaxed)
}

/// Overrides the `ARGO_LOG` environment setting.
pub fn set_enabled(enabled: bool) {
    flag().store(enabled, Ordering::Relaxed);
}

#[macro_export]
macro_rules! debug {
    ($($tok:tt)*) => {
        if $crate::enabled() {
            $crate::__tracing::debug!($($tok)*)
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($tok:tt)*) => {
        if $crate::enabled() {
            $crate::__tracing::error!($($tok)*)
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($($tok:tt)*) => {
        if $crate::enabled() {
            $crate::__tracing::warn!($($tok)*)
        }
    };
}

#[macro_export]
macro_rules! span {
    ($($tok:tt)*) => {
        if $crate::enabled() {
            $crate::Span::Enabled($crate::__tracing::span!($($tok)*))
        } else {
            $crate::Span::Disabled
        }
    }
}

#[macro_export]
macro_rules! event {
    ($($tok:tt)*) => {
        if $crate::enabled() {
            $crate::__tracing::event!($($tok)*);
        }
    };
}

pub enum Span {
    Enabled(tracing::Span),
    Disabled,
}

impl Span {
    pub fn enter(&self) -> Entered<'_> {
        match self {
            Self::Enabled(s) => Entered::Enabled(s.enter()),
            Self::Disabled => Entered::Disabled,
        }
    }

    pub fn in_scope<T, F: FnOnce() -> T>(&self, f: F) -> T {
        match self {
            Self::Enabled(s) => s.in_scope(f),
            Self::Disabled => f(),
        }
    }
}

pub enum Entered<'a> {
    Enabled(tracing::span::Entered<'a>),
    Disabled,
}
