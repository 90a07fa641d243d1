/// Returns early from a native function with a script-level error object.
///
/// `throw!(TypeError, "{} is not a function", name)`
#[macro_export]
macro_rules! throw {
    ($err:ident, $msg:expr) => {
        return Err({
            let err = $crate::value::error::$err::new($msg);
            $crate::value::Value::object($crate::value::handle::Handle::new(err))
        })
    };
    ($err:ident, $msg:expr, $($arg:expr),*) => {
        return Err({
            let err = $crate::value::error::$err::new(format!($msg, $($arg),*));
            $crate::value::Value::object($crate::value::handle::Handle::new(err))
        })
    };
}

/// Implements [`Object`](crate::value::object::Object) and
/// [`NativeClass`](crate::value::object::NativeClass) for a struct bound to a static [`Class`](crate::value::class::Class).
///
/// Subclasses embed the state of their superclass in a field and name it with `extends`,
/// which is what lets a `Ref<Base>` be taken from a subclass instance:
///
/// ```ignore
/// static SPRITE: Class = Class::new("Sprite", "flash.display", Some(&DISPLAY_OBJECT));
///
/// #[derive(Debug)]
/// struct Sprite {
///     base: DisplayObject,
/// }
///
/// native_class!(Sprite, SPRITE, extends base);
/// ```
#[macro_export]
macro_rules! native_class {
    (@impl $ty:ty, $class:path, { $($extra:tt)* }) => {
        impl $crate::value::object::Object for $ty {
            fn class(&self) -> &'static $crate::value::class::Class {
                &$class
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            $($extra)*
        }

        impl $crate::value::object::NativeClass for $ty {
            fn static_class() -> &'static $crate::value::class::Class {
                &$class
            }
        }
    };
    ($ty:ty, $class:path) => {
        $crate::native_class!(@impl $ty, $class, {});
    };
    ($ty:ty, $class:path, extends $field:ident) => {
        $crate::native_class!(@impl $ty, $class, {
            fn super_object(&self) -> Option<&dyn $crate::value::object::Object> {
                Some(&self.$field)
            }
        });
    };
}
