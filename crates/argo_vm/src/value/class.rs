use std::borrow::Cow;
use std::fmt;
use std::ptr;

/// Static description of a class bound to native code.
///
/// Classes form a single-inheritance chain through `super_class`.
/// Identity is by address: every class is a `static`.
pub struct Class {
    name: &'static str,
    package: &'static str,
    super_class: Option<&'static Class>,
}

impl Class {
    pub const fn new(name: &'static str, package: &'static str, super_class: Option<&'static Class>) -> Self {
        Self {
            name,
            package,
            super_class,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn super_class(&self) -> Option<&'static Class> {
        self.super_class
    }

    /// `package::Name`, or just `Name` for top level classes
    pub fn qualified_name(&self) -> Cow<'static, str> {
        if self.package.is_empty() {
            Cow::Borrowed(self.name)
        } else {
            Cow::Owned(format!("{}::{}", self.package, self.name))
        }
    }

    /// Whether `self` is `other` or derives from it.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        self.ancestors().any(|class| ptr::eq(class, other))
    }

    /// `self` followed by each superclass, up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &Class> {
        std::iter::successors(Some(self), |class| class.super_class)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.qualified_name())
    }
}

pub static OBJECT: Class = Class::new("Object", "", None);
pub static FUNCTION: Class = Class::new("Function", "", Some(&OBJECT));
pub static NUMBER: Class = Class::new("Number", "", Some(&OBJECT));
pub static INT: Class = Class::new("int", "", Some(&OBJECT));
pub static UINT: Class = Class::new("uint", "", Some(&OBJECT));
pub static BOOLEAN: Class = Class::new("Boolean", "", Some(&OBJECT));
pub static STRING: Class = Class::new("String", "", Some(&OBJECT));
pub static ERROR: Class = Class::new("Error", "", Some(&OBJECT));
pub static ARGUMENT_ERROR: Class = Class::new("ArgumentError", "", Some(&ERROR));
pub static TYPE_ERROR: Class = Class::new("TypeError", "", Some(&ERROR));
pub static RANGE_ERROR: Class = Class::new("RangeError", "", Some(&ERROR));
