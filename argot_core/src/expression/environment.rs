use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

#[cfg(any(test, feature = "unit_test"))]
use std::cell::RefCell;

/// The name to value lookup context which expressions are evaluated against.
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::{expand, FnEnvironment};
///
/// let environment = FnEnvironment(|name: &str| match name {
///     "program" => Some("argot".to_string()),
///     _ => None,
/// });
/// assert_eq!(expand(&environment, "usage: {$program}").unwrap(), "usage: argot");
/// ```
pub trait Environment {
    /// Look up the value of the variable `name`, if it is defined.
    fn variable(&self, name: &str) -> Option<String>;
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn variable(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn variable(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// An environment in which no variables are defined.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoVariables;

impl Environment for NoVariables {
    fn variable(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Adapts a lookup function into an [`Environment`].
#[derive(Debug, Clone, Copy)]
pub struct FnEnvironment<F>(pub F);

impl<F> Environment for FnEnvironment<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn variable(&self, name: &str) -> Option<String> {
        (self.0)(name)
    }
}

/// *Available using 'unit_test' crate feature only.*</br></br>
/// Wraps an [`Environment`], recording the name of every variable looked up.
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::{expand, NoVariables, RecordingEnvironment};
///
/// let environment = RecordingEnvironment::new(NoVariables);
/// expand(&environment, r#"{"a" + "b"} {$c}"#).unwrap();
/// assert_eq!(environment.lookups(), vec!["c".to_string()]);
/// ```
#[cfg(any(test, feature = "unit_test"))]
#[derive(Debug)]
pub struct RecordingEnvironment<E> {
    inner: E,
    lookups: RefCell<Vec<String>>,
}

#[cfg(any(test, feature = "unit_test"))]
impl<E: Environment> RecordingEnvironment<E> {
    /// Record the lookups made against `inner`.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            lookups: RefCell::new(Vec::default()),
        }
    }

    /// The names looked up so far, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

#[cfg(any(test, feature = "unit_test"))]
impl<E: Environment> Environment for RecordingEnvironment<E> {
    fn variable(&self, name: &str) -> Option<String> {
        self.lookups.borrow_mut().push(name.to_string());
        self.inner.variable(name)
    }
}
