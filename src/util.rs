use hashbrown::HashMap;

/// A builtin function: a pure mapping from a fixed number of arguments to
/// one result.
///
/// The registry in [`struct@FUNCTIONS`] is built once and never mutated;
/// every entry currently has arity 1.
pub struct Function {
    arity: usize,
    func: fn(&[f64]) -> f64,
}

impl Function {
    pub(crate) fn new(arity: usize, func: fn(&[f64]) -> f64) -> Self {
        Function { arity, func }
    }

    /// The number of arguments this function accepts
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Apply the function. `args` must hold exactly [`arity`](Self::arity)
    /// values; the evaluator enforces this while parsing the call.
    #[must_use]
    pub fn call(&self, args: &[f64]) -> f64 {
        (self.func)(args)
    }
}

lazy_static! {
    /// The builtin functions, resolvable by name from any expression
    pub static ref FUNCTIONS: HashMap<String, Function> = {
        let mut map = HashMap::new();
        map.insert("sqrt".into(), Function::new(1, |args| libm::sqrt(args[0])));
        map.insert("log".into(), Function::new(1, |args| libm::log(args[0])));
        map.insert("exp".into(), Function::new(1, |args| libm::exp(args[0])));
        map.insert("log10".into(), Function::new(1, |args| libm::log10(args[0])));
        map.insert("sin".into(), Function::new(1, |args| libm::sin(args[0])));
        map.insert("cos".into(), Function::new(1, |args| libm::cos(args[0])));
        map.insert("tan".into(), Function::new(1, |args| libm::tan(args[0])));
        map.insert("asin".into(), Function::new(1, |args| libm::asin(args[0])));
        map.insert("acos".into(), Function::new(1, |args| libm::acos(args[0])));
        map.insert("atan".into(), Function::new(1, |args| libm::atan(args[0])));
        map.shrink_to_fit();
        map
    };
}
