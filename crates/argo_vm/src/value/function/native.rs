use std::rc::Rc;

use crate::throw;
use crate::value::error::ArgumentError;
use crate::value::handle::Handle;
use crate::value::object::NativeClass;
use crate::value::reference::Ref;
use crate::value::Value;
use crate::Vm;

use super::args::{ArgUnpacker, CallArgs, ParamList, TrailingPolicy};
use super::Function;

pub type NativeFunction = fn(cx: CallContext) -> Result<Value, Value>;

pub fn register_native_fn(vm: &mut Vm, name: &str, fun: NativeFunction) -> Handle {
    let name = vm.intern(name);
    Handle::new(Function::new(name, fun))
}

#[derive(Debug)]
pub struct CallContext<'c> {
    pub args: CallArgs,
    pub vm: &'c mut Vm,
    pub this: Value,
    /// Name of the native being called, used to label argument errors.
    pub name: Rc<str>,
}

impl<'c> CallContext<'c> {
    pub fn call(args: CallArgs, vm: &'c mut Vm, this: Value, name: Rc<str>) -> Self {
        Self { args, vm, this, name }
    }

    pub fn unpacker(&mut self, policy: TrailingPolicy) -> ArgUnpacker<'_> {
        ArgUnpacker::new(self.vm, &self.args, policy).with_context(Rc::clone(&self.name))
    }

    /// Unpacks all arguments, reporting any left over.
    pub fn unpack<P: ParamList>(&mut self, params: P) -> Result<P::Output, ArgumentError> {
        self.unpacker(TrailingPolicy::Strict).unpack(params)
    }

    /// Unpacks the leading arguments, ignoring any left over.
    pub fn unpack_lenient<P: ParamList>(&mut self, params: P) -> Result<P::Output, ArgumentError> {
        self.unpacker(TrailingPolicy::Lenient).unpack(params)
    }

    /// The receiver, which must be an instance of `T`.
    pub fn this_as<T: NativeClass>(&self) -> Result<Ref<T>, Value> {
        if let Value::Object(handle) = &self.this {
            if let Some(this) = Ref::from_handle(handle) {
                return Ok(this);
            }
        }

        throw!(
            TypeError,
            "{} called on incompatible receiver {}",
            self.name,
            self.this.class_name()
        )
    }
}
