use std::fmt;
use std::rc::Rc;

use crate::native_class;
use crate::throw;
use crate::value::class::FUNCTION;
use crate::value::Value;
use crate::Vm;

use self::args::CallArgs;
use self::native::{CallContext, NativeFunction};

pub mod args;
pub mod convert;
pub mod native;

/// A native function exposed to scripts.
pub struct Function {
    name: Rc<str>,
    fun: NativeFunction,
}

impl Function {
    pub fn new(name: Rc<str>, fun: NativeFunction) -> Self {
        Self { name, fun }
    }

    pub fn name(&self) -> &Rc<str> {
        &self.name
    }

    pub fn call(&self, vm: &mut Vm, this: Value, args: impl Into<CallArgs>) -> Result<Value, Value> {
        let span = argo_log::span!(argo_log::Level::DEBUG, "native_call", name = %self.name);
        let _entered = span.enter();

        let result = (self.fun)(CallContext::call(args.into(), vm, this, Rc::clone(&self.name)));
        if let Err(err) = &result {
            argo_log::debug!("{} threw {}", self.name, err.class_name());
        }
        result
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}

native_class!(Function, FUNCTION);

impl Value {
    /// Calls this value, which must be a function.
    pub fn apply(&self, vm: &mut Vm, this: Value, args: impl Into<CallArgs>) -> Result<Value, Value> {
        match self.downcast_ref::<Function>() {
            Some(fun) => fun.call(vm, this, args),
            None => throw!(TypeError, "{} is not a function", self.class_name()),
        }
    }
}
