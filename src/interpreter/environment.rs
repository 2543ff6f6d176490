//! Lexical environments for the Lazel interpreter.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::thunk::Thunk;

/// A shared handle to a chain of binding frames.
///
/// A new frame is created per lambda application (parameter bindings) and
/// per record construction (mutually-visible field bindings). Cloning an
/// `Env` clones the handle, not the frame, so every closure created inside
/// the same scope shares it. Frames are populated once during construction;
/// the only mutation reachable through an environment afterwards is thunk
/// memoization.
#[derive(Clone)]
pub struct Env {
    frame: Rc<Frame>,
}

struct Frame {
    /// Ordered name -> thunk bindings; order is the binding order
    bindings: RefCell<Vec<(String, Rc<Thunk>)>>,
    parent: Option<Env>,
}

impl Env {
    /// Create a root environment with no parent
    pub fn root() -> Self {
        Self {
            frame: Rc::new(Frame {
                bindings: RefCell::new(Vec::new()),
                parent: None,
            }),
        }
    }

    /// Create a child environment with a fresh innermost frame
    pub fn child(&self) -> Self {
        Self {
            frame: Rc::new(Frame {
                bindings: RefCell::new(Vec::new()),
                parent: Some(self.clone()),
            }),
        }
    }

    /// Bind a name in the innermost frame
    pub fn define(&self, name: impl Into<String>, thunk: Rc<Thunk>) {
        self.frame.bindings.borrow_mut().push((name.into(), thunk));
    }

    /// Look up a name, walking from the innermost frame to the root
    pub fn lookup(&self, name: &str) -> Option<Rc<Thunk>> {
        self.lookup_local(name)
            .or_else(|| self.frame.parent.as_ref().and_then(|p| p.lookup(name)))
    }

    /// Look up a name in the innermost frame only.
    ///
    /// Record projection uses this: a field access must match one of the
    /// record's own fields, never something from an enclosing scope.
    pub fn lookup_local(&self, name: &str) -> Option<Rc<Thunk>> {
        self.frame
            .bindings
            .borrow()
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, thunk)| Rc::clone(thunk))
    }

    /// Names bound in the innermost frame, in binding order
    pub fn local_names(&self) -> Vec<String> {
        self.frame
            .bindings
            .borrow()
            .iter()
            .map(|(bound, _)| bound.clone())
            .collect()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env")
            .field("bindings", &self.local_names())
            .field("has_parent", &self.frame.parent.is_some())
            .finish()
    }
}
