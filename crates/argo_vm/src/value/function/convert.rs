//! Conversions between script values and native Rust types.
//!
//! Each supported native type implements [`NativeConversion`] once. Adding a type means adding
//! an impl; nothing here dispatches over a closed set of types.

use std::rc::Rc;

use crate::value::class;
use crate::value::error::ArgumentError;
use crate::value::handle::Handle;
use crate::value::object::NativeClass;
use crate::value::ops::conversions::ValueConversion;
use crate::value::reference::Ref;
use crate::value::rgb::Rgb;
use crate::value::Value;
use crate::Vm;

pub trait NativeConversion: Sized {
    /// Converts a script value into `Self`.
    ///
    /// Primitive targets coerce and never fail. Object targets type check the value
    /// and take a new reference on success; the caller's reference is left alone.
    fn to_native(vm: &mut Vm, value: &Value) -> Result<Self, ArgumentError>;

    /// Like [`NativeConversion::to_native`], for a value about to replace `current`.
    fn to_native_over(vm: &mut Vm, value: &Value, _current: &Self) -> Result<Self, ArgumentError> {
        Self::to_native(vm, value)
    }

    /// Converts `self` into a script value. Never fails; counted values gain one reference.
    fn to_dynamic(&self, vm: &mut Vm) -> Value;
}

impl NativeConversion for f64 {
    fn to_native(vm: &mut Vm, value: &Value) -> Result<Self, ArgumentError> {
        Ok(value.to_number(vm))
    }

    fn to_dynamic(&self, _vm: &mut Vm) -> Value {
        Value::number(*self)
    }
}

impl NativeConversion for i32 {
    fn to_native(vm: &mut Vm, value: &Value) -> Result<Self, ArgumentError> {
        Ok(value.to_int32(vm))
    }

    fn to_dynamic(&self, _vm: &mut Vm) -> Value {
        Value::int(*self)
    }
}

impl NativeConversion for u32 {
    fn to_native(vm: &mut Vm, value: &Value) -> Result<Self, ArgumentError> {
        Ok(value.to_uint32(vm))
    }

    fn to_dynamic(&self, _vm: &mut Vm) -> Value {
        Value::uint(*self)
    }
}

impl NativeConversion for i64 {
    fn to_native(vm: &mut Vm, value: &Value) -> Result<Self, ArgumentError> {
        Ok(value.to_int64(vm))
    }

    fn to_dynamic(&self, _vm: &mut Vm) -> Value {
        match i32::try_from(*self) {
            Ok(i) => Value::int(i),
            Err(_) => Value::number(*self as f64),
        }
    }
}

impl NativeConversion for bool {
    fn to_native(_vm: &mut Vm, value: &Value) -> Result<Self, ArgumentError> {
        Ok(value.to_boolean())
    }

    fn to_dynamic(&self, _vm: &mut Vm) -> Value {
        Value::boolean(*self)
    }
}

impl NativeConversion for Rc<str> {
    fn to_native(vm: &mut Vm, value: &Value) -> Result<Self, ArgumentError> {
        Ok(value.to_js_string(vm))
    }

    fn to_dynamic(&self, _vm: &mut Vm) -> Value {
        Value::string(Rc::clone(self))
    }
}

impl NativeConversion for String {
    fn to_native(vm: &mut Vm, value: &Value) -> Result<Self, ArgumentError> {
        Ok(String::from(&*value.to_js_string(vm)))
    }

    fn to_dynamic(&self, _vm: &mut Vm) -> Value {
        Value::string(Rc::from(self.as_str()))
    }
}

impl NativeConversion for Rgb {
    fn to_native(vm: &mut Vm, value: &Value) -> Result<Self, ArgumentError> {
        Ok(Rgb::from_uint(value.to_uint32(vm)))
    }

    fn to_dynamic(&self, _vm: &mut Vm) -> Value {
        Value::uint(self.to_uint())
    }
}

/// Any object. Primitives are boxed, null and undefined are rejected.
impl NativeConversion for Handle {
    fn to_native(_vm: &mut Vm, value: &Value) -> Result<Self, ArgumentError> {
        value
            .to_object()
            .ok_or_else(|| ArgumentError::type_check_failed(value.class_name(), class::OBJECT.qualified_name()))
    }

    fn to_dynamic(&self, _vm: &mut Vm) -> Value {
        Value::object(self.clone())
    }
}

/// Instances of `T` or a subclass. Primitives qualify through the class of their box, and are boxed.
impl<T: NativeClass> NativeConversion for Ref<T> {
    fn to_native(_vm: &mut Vm, value: &Value) -> Result<Self, ArgumentError> {
        let handle = if value.instance_of::<T>() { value.to_object() } else { None };

        handle
            .and_then(|handle| Ref::from_handle(&handle))
            .ok_or_else(|| ArgumentError::type_check_failed(value.class_name(), T::static_class().qualified_name()))
    }

    fn to_dynamic(&self, _vm: &mut Vm) -> Value {
        Value::object(self.handle().clone())
    }
}

/// Nullable parameters: null and undefined become `None`, `None` becomes null.
impl<T: NativeConversion> NativeConversion for Option<T> {
    fn to_native(vm: &mut Vm, value: &Value) -> Result<Self, ArgumentError> {
        if value.is_nullish() {
            return Ok(None);
        }
        T::to_native(vm, value).map(Some)
    }

    fn to_native_over(vm: &mut Vm, value: &Value, current: &Self) -> Result<Self, ArgumentError> {
        match current {
            Some(current) if !value.is_nullish() => T::to_native_over(vm, value, current).map(Some),
            _ => Self::to_native(vm, value),
        }
    }

    fn to_dynamic(&self, vm: &mut Vm) -> Value {
        match self {
            Some(value) => value.to_dynamic(vm),
            None => Value::null(),
        }
    }
}

/// Passthrough: the value is forwarded as is, with a new reference.
impl NativeConversion for Value {
    fn to_native(_vm: &mut Vm, value: &Value) -> Result<Self, ArgumentError> {
        Ok(value.clone())
    }

    fn to_native_over(vm: &mut Vm, value: &Value, current: &Self) -> Result<Self, ArgumentError> {
        if !value.is_nullish() && !current.is_nullish() && !value.is_argument_compatible(current) {
            return Err(ArgumentError::type_check_failed(value.class_name(), current.class_name()));
        }
        Self::to_native(vm, value)
    }

    fn to_dynamic(&self, _vm: &mut Vm) -> Value {
        self.clone()
    }
}
