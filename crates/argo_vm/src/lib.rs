use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use self::diagnostics::Diagnostic;
use self::params::VmParams;
use self::statics::Statics;

mod macros;

pub mod diagnostics;
pub mod params;
pub mod statics;
pub mod value;

#[cfg(test)]
mod test;

/// Execution context that native functions and conversions run against.
///
/// A `Vm` is not `Send`: every string and object it hands out is reference counted with `Rc`.
/// Embedders with several execution contexts create one `Vm` per context.
pub struct Vm {
    statics: Statics,
    params: VmParams,
    strings: FxHashSet<Rc<str>>,
    diagnostics: Vec<Diagnostic>,
}

impl Vm {
    pub fn new(params: VmParams) -> Self {
        let statics = Statics::new();
        let mut strings = FxHashSet::default();
        for s in statics.strings() {
            strings.insert(s.clone());
        }

        Self {
            statics,
            params,
            strings,
            diagnostics: Vec::new(),
        }
    }

    pub fn statics(&self) -> &Statics {
        &self.statics
    }

    pub fn params(&self) -> &VmParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut VmParams {
        &mut self.params
    }

    /// Returns the shared copy of `s`, allocating it on first use.
    pub fn intern(&mut self, s: &str) -> Rc<str> {
        if let Some(s) = self.strings.get(s) {
            return Rc::clone(s);
        }

        let s: Rc<str> = Rc::from(s);
        self.strings.insert(Rc::clone(&s));
        s
    }

    /// Records an advisory diagnostic.
    /// Dropped silently unless [`VmParams::verbose_diagnostics`] is set.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        if !self.params.verbose_diagnostics() {
            return;
        }

        argo_log::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new(VmParams::default())
    }
}

impl fmt::Debug for Vm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Vm")
    }
}
