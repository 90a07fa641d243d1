use std::fmt;
use std::rc::Rc;

/// Advisory findings that never abort a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A native function consumed fewer arguments than the caller supplied.
    /// Legal under the calling convention, but usually means the native is missing a parameter.
    TrailingArgumentsUnused {
        context: Rc<str>,
        supplied: usize,
        consumed: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrailingArgumentsUnused {
                context,
                supplied,
                consumed,
            } => write!(
                f,
                "not all arguments were unpacked on {context}: supplied {supplied}, consumed {consumed}"
            ),
        }
    }
}
