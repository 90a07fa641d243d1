use std::marker::PhantomData;
use std::ops::Deref;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::diagnostics::Diagnostic;
use crate::value::error::ArgumentError;
use crate::value::Value;
use crate::Vm;

use super::convert::NativeConversion;

pub type SmallArgsRepr = SmallVec<[Value; 3]>;

#[derive(Default, Clone, Debug)]
pub struct CallArgs(SmallArgsRepr);

impl CallArgs {
    pub fn empty() -> Self {
        Self(SmallArgsRepr::new())
    }
}

impl<const N: usize> From<[Value; N]> for CallArgs {
    fn from(value: [Value; N]) -> Self {
        CallArgs(SmallVec::from_iter(value))
    }
}

impl From<&[Value]> for CallArgs {
    fn from(value: &[Value]) -> Self {
        CallArgs(SmallVec::from(value))
    }
}

impl From<Vec<Value>> for CallArgs {
    fn from(v: Vec<Value>) -> Self {
        Self(SmallVec::from_vec(v))
    }
}

impl FromIterator<Value> for CallArgs {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self(SmallVec::from_iter(iter))
    }
}

impl<'a> IntoIterator for &'a CallArgs {
    type Item = &'a Value;

    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Deref for CallArgs {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// What to do about arguments left over once a native function is done unpacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingPolicy {
    /// Report leftovers as a [`Diagnostic::TrailingArgumentsUnused`].
    #[default]
    Strict,
    /// The function deliberately ignores extra arguments.
    Lenient,
}

/// Cursor over the arguments of one native call.
///
/// Each `required`/`bind` call consumes the next argument and converts it to the requested
/// native type. The first failure is returned to the caller, who is expected to abort the call
/// with `?`. When the unpacker is finished (explicitly or by going out of scope) under
/// [`TrailingPolicy::Strict`], leftover arguments are reported to the [`Vm`].
/// Nothing is reported once a bind has failed, including on a type check failure
/// that leaves arguments behind it unread.
///
/// ```ignore
/// let mut args = ArgUnpacker::new(vm, &cx.args, TrailingPolicy::Strict);
/// let lock_center: bool = args.or_default(false)?;
/// let left: f64 = args.or_default(0.0)?;
/// ```
pub struct ArgUnpacker<'a> {
    vm: &'a mut Vm,
    remaining: &'a [Value],
    supplied: usize,
    min_expected: usize,
    policy: TrailingPolicy,
    context: Option<Rc<str>>,
    failed: bool,
    finished: bool,
}

impl<'a> ArgUnpacker<'a> {
    pub fn new(vm: &'a mut Vm, args: &'a [Value], policy: TrailingPolicy) -> Self {
        Self {
            vm,
            remaining: args,
            supplied: args.len(),
            min_expected: 0,
            policy,
            context: None,
            failed: false,
            finished: false,
        }
    }

    /// Names the function being unpacked for, used in errors and diagnostics.
    pub fn with_context(mut self, context: Rc<str>) -> Self {
        self.context = Some(context);
        self
    }

    /// Number of arguments not consumed yet.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn consumed(&self) -> usize {
        self.supplied - self.remaining.len()
    }

    pub fn supplied(&self) -> usize {
        self.supplied
    }

    pub fn policy(&self) -> TrailingPolicy {
        self.policy
    }

    pub fn vm(&mut self) -> &mut Vm {
        self.vm
    }

    fn context(&self) -> Rc<str> {
        match &self.context {
            Some(context) => Rc::clone(context),
            None => Rc::clone(&self.vm.statics().object_str),
        }
    }

    fn fail(&mut self, error: ArgumentError) -> ArgumentError {
        argo_log::debug!("unpacking argument {} failed: {}", self.consumed(), error);
        self.failed = true;
        error
    }

    fn take(&mut self) -> Option<&'a Value> {
        let (first, rest) = self.remaining.split_first()?;
        self.remaining = rest;
        Some(first)
    }

    fn missing(&mut self) -> ArgumentError {
        let error = ArgumentError::WrongArgumentCount {
            context: self.context(),
            expected: self.min_expected.max(self.consumed() + 1),
            got: self.supplied,
        };
        self.fail(error)
    }

    /// Consumes the next argument, which must be present.
    pub fn required<T: NativeConversion>(&mut self) -> Result<T, ArgumentError> {
        let value = match self.take() {
            Some(value) => value,
            None => return Err(self.missing()),
        };
        T::to_native(self.vm, value).map_err(|e| self.fail(e))
    }

    /// Consumes the next argument if present, otherwise yields `default`.
    pub fn or_default<T: NativeConversion>(&mut self, default: T) -> Result<T, ArgumentError> {
        match self.take() {
            Some(value) => T::to_native(self.vm, value).map_err(|e| self.fail(e)),
            None => Ok(default),
        }
    }

    /// Consumes the next argument, which must be present, into `slot`.
    ///
    /// `slot` is only overwritten on success.
    pub fn bind<T: NativeConversion>(&mut self, slot: &mut T) -> Result<&mut Self, ArgumentError> {
        let value = match self.take() {
            Some(value) => value,
            None => return Err(self.missing()),
        };
        *slot = T::to_native_over(self.vm, value, slot).map_err(|e| self.fail(e))?;
        Ok(self)
    }

    /// Consumes the next argument into `slot` if present, otherwise stores `default`.
    pub fn bind_or<T: NativeConversion>(&mut self, slot: &mut T, default: T) -> Result<&mut Self, ArgumentError> {
        match self.take() {
            Some(value) => *slot = T::to_native_over(self.vm, value, slot).map_err(|e| self.fail(e))?,
            None => *slot = default,
        }
        Ok(self)
    }

    /// Unpacks a whole parameter list at once.
    pub fn unpack<P: ParamList>(&mut self, params: P) -> Result<P::Output, ArgumentError> {
        self.min_expected = self.consumed() + params.required_count();
        params.bind_all(self)
    }

    /// Ends unpacking, returning the trailing arguments diagnostic if one was reported.
    pub fn finish(mut self) -> Option<Diagnostic> {
        self.complete()
    }

    fn complete(&mut self) -> Option<Diagnostic> {
        if self.finished {
            return None;
        }
        self.finished = true;

        // Leftovers are expected after a failure aborted unpacking
        if self.failed || self.policy == TrailingPolicy::Lenient || self.remaining.is_empty() {
            return None;
        }

        let diagnostic = Diagnostic::TrailingArgumentsUnused {
            context: self.context(),
            supplied: self.supplied,
            consumed: self.consumed(),
        };
        self.vm.report(diagnostic.clone());
        Some(diagnostic)
    }
}

impl Drop for ArgUnpacker<'_> {
    fn drop(&mut self) {
        self.complete();
    }
}

/// One entry of a declarative parameter list.
pub trait Param {
    type Output;

    /// Whether a missing argument is an error.
    const REQUIRED: bool;

    fn bind(self, args: &mut ArgUnpacker<'_>) -> Result<Self::Output, ArgumentError>;
}

pub struct Required<T>(PhantomData<fn() -> T>);

/// A parameter that must be supplied.
pub fn required<T: NativeConversion>() -> Required<T> {
    Required(PhantomData)
}

impl<T: NativeConversion> Param for Required<T> {
    type Output = T;
    const REQUIRED: bool = true;

    fn bind(self, args: &mut ArgUnpacker<'_>) -> Result<T, ArgumentError> {
        args.required()
    }
}

pub struct Defaulted<T>(T);

/// A parameter that falls back to `default` when not supplied.
pub fn defaulted<T: NativeConversion>(default: T) -> Defaulted<T> {
    Defaulted(default)
}

impl<T: NativeConversion> Param for Defaulted<T> {
    type Output = T;
    const REQUIRED: bool = false;

    fn bind(self, args: &mut ArgUnpacker<'_>) -> Result<T, ArgumentError> {
        args.or_default(self.0)
    }
}

/// A tuple of [`Param`]s, bound left to right.
pub trait ParamList {
    type Output;

    fn required_count(&self) -> usize;

    fn bind_all(self, args: &mut ArgUnpacker<'_>) -> Result<Self::Output, ArgumentError>;
}

impl ParamList for () {
    type Output = ();

    fn required_count(&self) -> usize {
        0
    }

    fn bind_all(self, _args: &mut ArgUnpacker<'_>) -> Result<(), ArgumentError> {
        Ok(())
    }
}

macro_rules! impl_param_list {
    ($($name:ident),+) => {
        impl<$($name: Param),+> ParamList for ($($name,)+) {
            type Output = ($($name::Output,)+);

            fn required_count(&self) -> usize {
                0 $(+ $name::REQUIRED as usize)+
            }

            #[allow(non_snake_case)]
            fn bind_all(self, args: &mut ArgUnpacker<'_>) -> Result<Self::Output, ArgumentError> {
                let ($($name,)+) = self;
                Ok(($($name.bind(args)?,)+))
            }
        }
    };
}

impl_param_list!(A);
impl_param_list!(A, B);
impl_param_list!(A, B, C);
impl_param_list!(A, B, C, D);
impl_param_list!(A, B, C, D, E);
impl_param_list!(A, B, C, D, E, F);
impl_param_list!(A, B, C, D, E, F, G);
impl_param_list!(A, B, C, D, E, F, G, H);

/// Unpacks `args` against `params` in one go.
///
/// ```ignore
/// let (x, flag) = unpack(vm, &args, TrailingPolicy::Strict, (required::<i32>(), defaulted(false)))?;
/// ```
pub fn unpack<P: ParamList>(
    vm: &mut Vm,
    args: &[Value],
    policy: TrailingPolicy,
    params: P,
) -> Result<P::Output, ArgumentError> {
    ArgUnpacker::new(vm, args, policy).unpack(params)
}
