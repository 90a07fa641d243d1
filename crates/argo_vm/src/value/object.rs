use std::any::Any;
use std::fmt::Debug;

use crate::Vm;

use super::class::{Class, OBJECT};
use super::ops::conversions::PreferredType;
use super::Value;

pub trait Object: Debug + 'static {
    /// The runtime class of this object.
    fn class(&self) -> &'static Class;

    fn as_any(&self) -> &dyn Any;

    /// The embedded state of the superclass, if this object's class extends another native class.
    fn super_object(&self) -> Option<&dyn Object> {
        None
    }

    /// The wrapped value, for boxed primitives.
    fn primitive_value(&self) -> Option<Value> {
        None
    }

    fn to_primitive(&self, vm: &mut Vm, _preferred_type: PreferredType) -> Value {
        match self.primitive_value() {
            Some(value) => value,
            None => Value::String(vm.intern(&format!("[object {}]", self.class().name()))),
        }
    }

    fn class_name(&self) -> &'static str {
        self.class().name()
    }
}

/// A native type with a fixed script class.
pub trait NativeClass: Object + Sized {
    fn static_class() -> &'static Class;
}

/// Finds the `T` part of `object`, which is either `object` itself
/// or the embedded state of one of its superclasses.
pub fn downcast_class<T: NativeClass>(object: &dyn Object) -> Option<&T> {
    let mut current = object;
    loop {
        if let Some(found) = current.as_any().downcast_ref::<T>() {
            return Some(found);
        }
        current = current.super_object()?;
    }
}

/// An instance of the root `Object` class without any native state.
///
/// Not a [`NativeClass`]: every object's class derives from `Object`, but only this struct is a `NamedObject`.
/// Use [`Handle`](super::handle::Handle) to accept any object.
#[derive(Debug, Default)]
pub struct NamedObject;

impl NamedObject {
    pub fn new() -> Self {
        Self
    }
}

impl Object for NamedObject {
    fn class(&self) -> &'static Class {
        &OBJECT
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
