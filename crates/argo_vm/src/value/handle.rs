use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use super::object::Object;

/// A counted reference to a script object.
///
/// Cloning a handle is the "increment" and dropping it is the matching "decrement":
/// every holder owns exactly one count and releases it when it goes out of scope.
#[derive(Clone)]
pub struct Handle(Rc<dyn Object>);

impl Handle {
    pub fn new<O: Object>(object: O) -> Self {
        Self(Rc::new(object))
    }

    /// Number of live references to the object, this one included.
    pub fn refcount(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    pub fn ptr_eq(&self, other: &Handle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Handle {
    type Target = dyn Object;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Handle {}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
