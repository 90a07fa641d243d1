use std::any::Any;
use std::borrow::Cow;
use std::rc::Rc;

use crate::Vm;

use super::class::{self, Class};
use super::handle::Handle;
use super::object::{NativeClass, Object};
use super::ops::conversions::PreferredType;
use super::Value;

/// A script-level error object (`Error` or one of its subclasses).
#[derive(Debug)]
pub struct Error {
    class: &'static Class,
    error_id: u32,
    message: Rc<str>,
}

impl Error {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::with_class(&class::ERROR, 0, message)
    }

    pub fn with_class<S: Into<String>>(class: &'static Class, error_id: u32, message: S) -> Self {
        debug_assert!(class.is_subclass_of(&class::ERROR));
        Self {
            class,
            error_id,
            message: Rc::from(message.into()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    pub fn message(&self) -> &Rc<str> {
        &self.message
    }

    /// The numeric error code, `0` when the error was not raised by the runtime.
    pub fn error_id(&self) -> u32 {
        self.error_id
    }
}

impl Object for Error {
    fn class(&self) -> &'static Class {
        self.class
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_primitive(&self, vm: &mut Vm, _preferred_type: PreferredType) -> Value {
        if self.message.is_empty() {
            Value::String(vm.intern(self.name()))
        } else {
            Value::String(Rc::from(format!("{}: {}", self.name(), self.message)))
        }
    }
}

impl NativeClass for Error {
    fn static_class() -> &'static Class {
        &class::ERROR
    }
}

macro_rules! error_kind {
    ($($name:ident => $class:path),*) => {
        $(
            /// Constructor for script errors of this class, used by [`throw!`](crate::throw).
            pub struct $name;

            impl $name {
                #[allow(clippy::new_ret_no_self)]
                pub fn new<S: Into<String>>(message: S) -> Error {
                    Error::with_class(&$class, 0, message)
                }
            }
        )*
    };
}

error_kind!(TypeError => class::TYPE_ERROR, RangeError => class::RANGE_ERROR);

/// Failures of the native argument protocol. Both abort the call and surface in the script
/// as an `ArgumentError` (see the `From<ArgumentError> for Value` impl).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// The supplied value is not an instance of the required class.
    #[error("Error #1034: Type Coercion failed: cannot convert {actual} to {expected}.")]
    TypeCheckFailed {
        actual: Cow<'static, str>,
        expected: Cow<'static, str>,
    },
    /// Fewer values were supplied than the native function requires.
    #[error("Error #1063: Argument count mismatch on {context}. Expected {expected}, got {got}.")]
    WrongArgumentCount {
        context: Rc<str>,
        expected: usize,
        got: usize,
    },
}

impl ArgumentError {
    pub const CHECK_TYPE_FAILED: u32 = 1034;
    pub const WRONG_ARGUMENT_COUNT: u32 = 1063;

    pub fn type_check_failed(actual: impl Into<Cow<'static, str>>, expected: impl Into<Cow<'static, str>>) -> Self {
        Self::TypeCheckFailed {
            actual: actual.into(),
            expected: expected.into(),
        }
    }

    pub fn error_id(&self) -> u32 {
        match self {
            Self::TypeCheckFailed { .. } => Self::CHECK_TYPE_FAILED,
            Self::WrongArgumentCount { .. } => Self::WRONG_ARGUMENT_COUNT,
        }
    }

    /// The script error object this failure is thrown as.
    pub fn into_exception(self) -> Error {
        Error::with_class(&class::ARGUMENT_ERROR, self.error_id(), self.to_string())
    }
}

impl From<ArgumentError> for Value {
    fn from(error: ArgumentError) -> Self {
        Value::object(Handle::new(error.into_exception()))
    }
}
