use std::rc::Rc;

use crate::value::boxed::box_primitive;
use crate::value::handle::Handle;
use crate::value::primitive::{f64_to_int32, f64_to_int64, f64_to_uint32, number_to_string, string_to_number};
use crate::value::Value;
use crate::Vm;

/// The abstract conversion operations of the scripting language.
///
/// None of these fail: objects are first reduced with [`Object::to_primitive`](crate::value::object::Object::to_primitive),
/// which always produces a primitive.
pub trait ValueConversion {
    fn to_primitive(&self, vm: &mut Vm, preferred_type: Option<PreferredType>) -> Value;

    fn to_number(&self, vm: &mut Vm) -> f64;

    fn to_int32(&self, vm: &mut Vm) -> i32 {
        f64_to_int32(self.to_number(vm))
    }

    fn to_uint32(&self, vm: &mut Vm) -> u32 {
        f64_to_uint32(self.to_number(vm))
    }

    fn to_int64(&self, vm: &mut Vm) -> i64 {
        f64_to_int64(self.to_number(vm))
    }

    fn to_boolean(&self) -> bool;

    fn to_js_string(&self, vm: &mut Vm) -> Rc<str>;

    /// ToObject. Boxes primitives; `None` for null and undefined, where the language would throw.
    fn to_object(&self) -> Option<Handle>;
}

impl ValueConversion for Value {
    fn to_primitive(&self, vm: &mut Vm, preferred_type: Option<PreferredType>) -> Value {
        match self {
            Value::Object(o) => o.to_primitive(vm, preferred_type.unwrap_or(PreferredType::Default)),
            _ => self.clone(),
        }
    }

    fn to_number(&self, vm: &mut Vm) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Boolean(b) => *b as u8 as f64,
            Value::Integer(i) => *i as f64,
            Value::UInteger(u) => *u as f64,
            Value::Number(n) => *n,
            Value::String(s) => string_to_number(s),
            Value::Object(_) => match self.to_primitive(vm, Some(PreferredType::Number)) {
                Value::Object(_) => f64::NAN,
                prim => prim.to_number(vm),
            },
        }
    }

    fn to_int32(&self, vm: &mut Vm) -> i32 {
        match self {
            Value::Integer(i) => *i,
            Value::UInteger(u) => *u as i32,
            _ => f64_to_int32(self.to_number(vm)),
        }
    }

    fn to_uint32(&self, vm: &mut Vm) -> u32 {
        match self {
            Value::Integer(i) => *i as u32,
            Value::UInteger(u) => *u,
            _ => f64_to_uint32(self.to_number(vm)),
        }
    }

    fn to_int64(&self, vm: &mut Vm) -> i64 {
        match self {
            Value::Integer(i) => i64::from(*i),
            Value::UInteger(u) => i64::from(*u),
            _ => f64_to_int64(self.to_number(vm)),
        }
    }

    fn to_boolean(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Integer(i) => *i != 0,
            Value::UInteger(u) => *u != 0,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Object(_) => true,
        }
    }

    fn to_js_string(&self, vm: &mut Vm) -> Rc<str> {
        match self {
            Value::Undefined => vm.statics().undefined_str.clone(),
            Value::Null => vm.statics().null_str.clone(),
            Value::Boolean(true) => vm.statics().get_true(),
            Value::Boolean(false) => vm.statics().get_false(),
            Value::Integer(i) => Rc::from(i.to_string()),
            Value::UInteger(u) => Rc::from(u.to_string()),
            Value::Number(n) => number_to_js_string(vm, *n),
            Value::String(s) => Rc::clone(s),
            Value::Object(o) => match self.to_primitive(vm, Some(PreferredType::String)) {
                Value::Object(_) => vm.intern(&format!("[object {}]", o.class_name())),
                prim => prim.to_js_string(vm),
            },
        }
    }

    fn to_object(&self) -> Option<Handle> {
        match self {
            Value::Object(o) => Some(o.clone()),
            other => box_primitive(other),
        }
    }
}

fn number_to_js_string(vm: &Vm, n: f64) -> Rc<str> {
    let statics = vm.statics();
    if n.is_nan() {
        statics.nan_str.clone()
    } else if n == 0.0 {
        statics.zero_str.clone()
    } else if n == f64::INFINITY {
        statics.infinity_str.clone()
    } else if n == f64::NEG_INFINITY {
        statics.neg_infinity_str.clone()
    } else {
        Rc::from(number_to_string(n))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    Default,
    String,
    Number,
}
