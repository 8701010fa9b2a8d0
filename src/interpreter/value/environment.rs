use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle to an environment frame.
///
/// Closures clone this handle when they capture their defining scope, so a
/// frame stays alive for as long as any function value references it,
/// directly or through an outer chain.
pub type Env = Rc<RefCell<Environment>>;

/// Stores the bindings of one lexical scope.
///
/// Lookup walks the chain of outer frames; writes always land in the local
/// frame, so a binding inside a function body never touches the captured
/// scope it shadows.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a fresh top-level environment.
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an environment whose lookups fall back to `outer`.
    ///
    /// Used for function application: parameters are bound in the new frame
    /// while the function's captured scope stays reachable (and untouched)
    /// behind it.
    #[must_use]
    pub fn new_enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(), outer: Some(outer) }))
    }

    /// Resolves a name, walking the outer chain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this frame, shadowing any outer binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
