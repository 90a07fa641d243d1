use std::rc::Rc;

pub struct Statics {
    pub empty_str: Rc<str>,
    pub undefined_str: Rc<str>,
    pub null_str: Rc<str>,
    // Boolean strings
    pub true_lit: Rc<str>,
    pub false_lit: Rc<str>,
    // Number strings
    pub nan_str: Rc<str>,
    pub infinity_str: Rc<str>,
    pub neg_infinity_str: Rc<str>,
    pub zero_str: Rc<str>,
    /// Default label for calls that were not given a name
    pub object_str: Rc<str>,
}

impl Statics {
    pub fn new() -> Self {
        Self {
            empty_str: "".into(),
            undefined_str: "undefined".into(),
            null_str: "null".into(),
            true_lit: "true".into(),
            false_lit: "false".into(),
            nan_str: "NaN".into(),
            infinity_str: "Infinity".into(),
            neg_infinity_str: "-Infinity".into(),
            zero_str: "0".into(),
            object_str: "object".into(),
        }
    }

    pub fn get_true(&self) -> Rc<str> {
        self.true_lit.clone()
    }

    pub fn get_false(&self) -> Rc<str> {
        self.false_lit.clone()
    }

    pub(crate) fn strings(&self) -> [&Rc<str>; 10] {
        [
            &self.empty_str,
            &self.undefined_str,
            &self.null_str,
            &self.true_lit,
            &self.false_lit,
            &self.nan_str,
            &self.infinity_str,
            &self.neg_infinity_str,
            &self.zero_str,
            &self.object_str,
        ]
    }
}

impl Default for Statics {
    fn default() -> Self {
        Self::new()
    }
}
