use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use super::handle::Handle;
use super::object::{downcast_class, NativeClass};

/// A counted reference to an object whose class is `T`'s class or derives from it.
///
/// Subclasses embed the state of their superclass (see [`native_class!`](crate::native_class)),
/// which is what makes the `T` part reachable from any such object.
pub struct Ref<T: NativeClass> {
    handle: Handle,
    _marker: PhantomData<T>,
}

/// A [`Ref`] that may be absent, the native side of a nullable object parameter.
pub type NullableRef<T> = Option<Ref<T>>;

impl<T: NativeClass> Ref<T> {
    /// Takes a new reference to `handle` if its class is `T`'s class or derives from it.
    pub fn from_handle(handle: &Handle) -> Option<Self> {
        if !handle.class().is_subclass_of(T::static_class()) {
            return None;
        }
        // A derived class that does not embed `T` is a broken `native_class!` declaration
        downcast_class::<T>(&**handle)?;
        Some(Self {
            handle: handle.clone(),
            _marker: PhantomData,
        })
    }

    pub fn new(object: T) -> Self {
        Self {
            handle: Handle::new(object),
            _marker: PhantomData,
        }
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn refcount(&self) -> usize {
        self.handle.refcount()
    }

    pub fn ptr_eq(&self, other: &Ref<T>) -> bool {
        self.handle.ptr_eq(&other.handle)
    }
}

impl<T: NativeClass> Deref for Ref<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match downcast_class::<T>(&*self.handle) {
            Some(object) => object,
            None => unreachable!("Ref<{}> holds a {}", T::static_class().name(), self.handle.class_name()),
        }
    }
}

impl<T: NativeClass> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: NativeClass> PartialEq for Ref<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: NativeClass> fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ref").field(&self.handle).finish()
    }
}
