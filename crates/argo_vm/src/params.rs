#[derive(Debug, Clone)]
pub struct VmParams {
    verbose_diagnostics: bool,
}

impl Default for VmParams {
    fn default() -> Self {
        Self {
            verbose_diagnostics: cfg!(debug_assertions),
        }
    }
}

impl VmParams {
    pub fn new() -> Self {
        VmParams::default()
    }

    /// Whether advisory diagnostics (such as arguments a native function never looked at)
    /// are recorded and logged. Defaults to on in debug builds.
    pub fn set_verbose_diagnostics(mut self, verbose: bool) -> Self {
        self.verbose_diagnostics = verbose;
        self
    }

    pub fn verbose_diagnostics(&self) -> bool {
        self.verbose_diagnostics
    }
}
