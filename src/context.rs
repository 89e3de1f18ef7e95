use crate::error::ErrorKind;
use crate::util::{Function, FUNCTIONS};
use std::collections::HashMap;

/// Default cap on the number of variables a [`Context`] will hold,
/// builtin constants included.
pub const DEFAULT_VARIABLE_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq)]
struct Variable {
    value: f64,
    constant: bool,
}

/// The persistent state shared by successive evaluations: a table of
/// variables plus access to the builtin function registry.
///
/// A fresh context holds the immutable constants `pi` and `e`. Variables
/// created by assignment stay for the lifetime of the context; a slot is
/// only ever reassigned, never removed.
///
/// # Examples
///
/// ```
/// use reckon::{evaluate, Context};
///
/// let mut context = Context::new();
/// evaluate("x = 5", &mut context);
/// assert_eq!(evaluate("x + 1", &mut context).value, 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    variables: HashMap<String, Variable>,
    limit: usize,
}

impl Context {
    /// Create a context holding `pi` and `e`, with the default variable cap
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_VARIABLE_LIMIT)
    }

    /// Create a context with a custom cap on the variable table. The two
    /// builtin constants count toward the cap.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        let mut variables = HashMap::new();
        variables.insert(
            "pi".to_string(),
            Variable {
                value: std::f64::consts::PI,
                constant: true,
            },
        );
        variables.insert(
            "e".to_string(),
            Variable {
                value: std::f64::consts::E,
                constant: true,
            },
        );
        Context { variables, limit }
    }

    /// Look `name` up among the variables
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).map(|variable| variable.value)
    }

    /// Look `name` up in the builtin function registry
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&'static Function> {
        FUNCTIONS.get(name)
    }

    /// Assign `value` to the variable `name`, creating it if needed.
    ///
    /// Fails with [`ErrorKind::AssignToConstant`] when `name` is one of the
    /// builtin constants, and with [`ErrorKind::NoMoreVariables`] when a new
    /// variable would push the table past its cap. A failed assignment
    /// leaves the table exactly as it was.
    pub fn set(&mut self, name: &str, value: f64) -> Result<(), ErrorKind> {
        if let Some(variable) = self.variables.get_mut(name) {
            if variable.constant {
                return Err(ErrorKind::AssignToConstant);
            }
            variable.value = value;
            return Ok(());
        }
        if self.variables.len() >= self.limit {
            return Err(ErrorKind::NoMoreVariables);
        }
        self.variables.insert(
            name.to_string(),
            Variable {
                value,
                constant: false,
            },
        );
        Ok(())
    }

    /// The number of variables currently defined, constants included
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if the context holds no variables at all. Never true for a
    /// context built by [`new`](Self::new), which preloads the constants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        let context = Context::new();
        assert_eq!(context.get("pi"), Some(std::f64::consts::PI));
        assert_eq!(context.get("e"), Some(std::f64::consts::E));
        assert_eq!(context.get("tau"), None);
    }

    #[test]
    fn constants_are_immutable() {
        let mut context = Context::new();
        assert_eq!(context.set("pi", 3.0), Err(ErrorKind::AssignToConstant));
        assert_eq!(context.get("pi"), Some(std::f64::consts::PI));
    }

    #[test]
    fn assignment() {
        let mut context = Context::new();
        assert_eq!(context.set("a", 1.5), Ok(()));
        assert_eq!(context.get("a"), Some(1.5));
        assert_eq!(context.set("a", -3.0), Ok(()));
        assert_eq!(context.get("a"), Some(-3.0));
    }

    #[test]
    fn table_exhaustion() {
        // pi and e already occupy two of the three slots
        let mut context = Context::with_limit(3);
        assert_eq!(context.set("a", 1.0), Ok(()));
        assert_eq!(context.set("b", 2.0), Err(ErrorKind::NoMoreVariables));
        // the full table is untouched, and existing slots still reassign
        assert_eq!(context.get("a"), Some(1.0));
        assert_eq!(context.get("b"), None);
        assert_eq!(context.set("a", 4.0), Ok(()));
    }

    #[test]
    fn functions() {
        let context = Context::new();
        let sqrt = context.function("sqrt").unwrap();
        assert_eq!(sqrt.arity(), 1);
        assert_eq!(sqrt.call(&[16.0]), 4.0);
        assert!(context.function("frobnicate").is_none());
    }
}
