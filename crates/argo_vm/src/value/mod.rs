pub mod boxed;
pub mod class;
pub mod error;
pub mod function;
pub mod handle;
pub mod object;
pub mod ops;
pub mod primitive;
pub mod reference;
pub mod rgb;

use std::rc::Rc;

use self::class::Class;
use self::handle::Handle;
use self::object::{downcast_class, NativeClass};

/// A dynamically typed script value.
///
/// `String` and `Object` are reference counted: cloning a `Value` holding either
/// takes a new reference, dropping it releases one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The undefined type
    Undefined,
    /// The null type
    Null,
    /// The boolean type
    Boolean(bool),
    /// A signed 32-bit integer (`int`)
    Integer(i32),
    /// An unsigned 32-bit integer (`uint`)
    UInteger(u32),
    /// The number type
    Number(f64),
    /// The string type
    String(Rc<str>),
    /// The object type
    Object(Handle),
}

impl Value {
    pub fn undefined() -> Self {
        Self::Undefined
    }

    pub fn null() -> Self {
        Self::Null
    }

    pub fn boolean(b: bool) -> Self {
        Self::Boolean(b)
    }

    pub fn int(i: i32) -> Self {
        Self::Integer(i)
    }

    pub fn uint(u: u32) -> Self {
        Self::UInteger(u)
    }

    pub fn number(n: f64) -> Self {
        Self::Number(n)
    }

    pub fn string(s: Rc<str>) -> Self {
        Self::String(s)
    }

    pub fn object(handle: Handle) -> Self {
        Self::Object(handle)
    }

    /// null or undefined
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::UInteger(_) | Self::Number(_))
    }

    pub fn as_object(&self) -> Option<&Handle> {
        match self {
            Self::Object(handle) => Some(handle),
            _ => None,
        }
    }

    /// The runtime class. Primitives report the class of their box; null and undefined have none.
    pub fn class(&self) -> Option<&'static Class> {
        match self {
            Self::Undefined | Self::Null => None,
            Self::Boolean(_) => Some(&class::BOOLEAN),
            Self::Integer(_) => Some(&class::INT),
            Self::UInteger(_) => Some(&class::UINT),
            Self::Number(_) => Some(&class::NUMBER),
            Self::String(_) => Some(&class::STRING),
            Self::Object(handle) => Some(handle.class()),
        }
    }

    /// Whether the runtime class of this value is `T` or a subclass of `T`.
    pub fn instance_of<T: NativeClass>(&self) -> bool {
        self.class()
            .map_or(false, |class| class.is_subclass_of(T::static_class()))
    }

    pub fn downcast_ref<T: NativeClass>(&self) -> Option<&T> {
        match self {
            Self::Object(handle) => downcast_class::<T>(&**handle),
            _ => None,
        }
    }

    /// The class name used in error messages.
    pub fn class_name(&self) -> &'static str {
        match (self, self.class()) {
            (_, Some(class)) => class.name(),
            (Self::Null, None) => "null",
            (_, None) => "void",
        }
    }

    pub fn type_of(&self) -> Typeof {
        match self {
            Self::Undefined => Typeof::Undefined,
            Self::Null => Typeof::Object,
            Self::Boolean(_) => Typeof::Boolean,
            Self::Integer(_) | Self::UInteger(_) | Self::Number(_) => Typeof::Number,
            Self::String(_) => Typeof::String,
            Self::Object(handle) if handle.class().is_subclass_of(&class::FUNCTION) => Typeof::Function,
            Self::Object(_) => Typeof::Object,
        }
    }

    /// Whether `self` may be stored over `existing` when forwarding an argument as-is.
    ///
    /// Numbers are interchangeable regardless of representation, other primitives need the same tag
    /// and objects need a class equal to or derived from the class of `existing`.
    pub fn is_argument_compatible(&self, existing: &Value) -> bool {
        match (self, existing) {
            (a, b) if a.is_numeric() && b.is_numeric() => true,
            (Self::Boolean(_), Self::Boolean(_)) => true,
            (Self::String(_), Self::String(_)) => true,
            (Self::Object(a), Self::Object(b)) => a.class().is_subclass_of(b.class()),
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Typeof {
    Undefined,
    Object,
    Boolean,
    Number,
    String,
    Function,
}

pub trait ValueContext {
    fn unwrap_or_undefined(self) -> Value;
}

impl ValueContext for Option<Value> {
    fn unwrap_or_undefined(self) -> Value {
        match self {
            Some(x) => x,
            None => Value::undefined(),
        }
    }
}

impl ValueContext for Option<&Value> {
    fn unwrap_or_undefined(self) -> Value {
        match self {
            Some(x) => x.clone(),
            None => Value::undefined(),
        }
    }
}

impl From<Handle> for Value {
    fn from(handle: Handle) -> Self {
        Self::Object(handle)
    }
}

impl From<Rc<str>> for Value {
    fn from(s: Rc<str>) -> Self {
        Self::String(s)
    }
}
