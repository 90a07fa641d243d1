//! Object wrappers around primitive values, produced by ToObject.

use std::rc::Rc;

use crate::native_class;

use super::class;
use super::handle::Handle;
use super::Value;

macro_rules! boxed_primitive {
    ($($name:ident: $t:ty => $class:path, $variant:ident),*) => {
        $(
            #[derive(Debug)]
            pub struct $name {
                inner: $t,
            }

            impl $name {
                pub fn new(value: $t) -> Self {
                    Self { inner: value }
                }

                pub fn value(&self) -> &$t {
                    &self.inner
                }
            }

            native_class!(@impl $name, $class, {
                fn primitive_value(&self) -> Option<Value> {
                    Some(Value::$variant(self.inner.clone()))
                }
            });
        )*
    };
}

boxed_primitive! {
    Number: f64 => class::NUMBER, Number,
    Integer: i32 => class::INT, Integer,
    UInteger: u32 => class::UINT, UInteger,
    Boolean: bool => class::BOOLEAN, Boolean,
    String: Rc<str> => class::STRING, String
}

/// Boxes a primitive value. Objects, null and undefined have no box and yield `None`.
pub fn box_primitive(value: &Value) -> Option<Handle> {
    let boxed = match value {
        Value::Boolean(b) => Handle::new(Boolean::new(*b)),
        Value::Integer(i) => Handle::new(Integer::new(*i)),
        Value::UInteger(u) => Handle::new(UInteger::new(*u)),
        Value::Number(n) => Handle::new(Number::new(*n)),
        Value::String(s) => Handle::new(String::new(Rc::clone(s))),
        Value::Undefined | Value::Null | Value::Object(_) => return None,
    };
    Some(boxed)
}
