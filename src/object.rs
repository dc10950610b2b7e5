//! Runtime values and lexical environments for the Pig evaluator.
//!
//! [`Value`] is the closed set of things a Pig expression can evaluate to.
//! [`Environment`] is the lexical scope chain used to resolve identifiers.
//!
//! # Singleton interning
//!
//! `true`, `false`, and `null` are each represented by exactly one
//! `Rc<Value>`, created once in [`singletons`] and cloned (a refcount bump,
//! not an allocation) everywhere the evaluator needs one. This is what
//! makes `==`/`!=` on non-integer operands in [`crate::evaluator`] a
//! pointer comparison rather than a structural one.
//!
//! # Shared, mutable scopes
//!
//! Once function values exist, an `Environment` must be reachable both from
//! the scope that defines a closure and from every later call of it, and
//! `let` must be able to mutate the environment a closure is still holding
//! a reference to. `Rc<RefCell<Environment>>` is the standard single
//! threaded Rust idiom for that: no concurrency is ever introduced here, so
//! `Arc`/`Mutex` would only add overhead.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};

/// A reference-counted handle to a runtime value. Cheap to clone; this is
/// the type every evaluator function passes and returns.
pub type ValueRef = Rc<Value>;

/// A shared, mutable lexical scope. See the module docs for why this is
/// `Rc<RefCell<_>>` rather than a bare `Environment`.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A closure: the parameters and body of a [`crate::ast::FunctionLiteral`]
/// together with the environment that was active when the literal was
/// evaluated.
pub struct FunctionValue {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: EnvRef,
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .field("env", &"<captured environment>")
            .finish()
    }
}

impl PartialEq for FunctionValue {
    /// Two closures are the same value only if they share the exact same
    /// captured environment and AST; this deliberately never recurses into
    /// the environment's own bindings, which may reference this very
    /// function (see `Environment`'s module docs on recursive closures).
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.env, &other.env)
            && self.parameters == other.parameters
            && self.body == other.body
    }
}

/// A runtime value, and the type-tag strings an error message may quote.
#[derive(Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    /// Wraps a non-`ReturnValue` inner value; a `ReturnValue` never wraps
    /// another `ReturnValue`.
    ReturnValue(ValueRef),
    Error(String),
    Function(FunctionValue),
}

impl Value {
    /// The uppercase type tag used in error messages.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::ReturnValue(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
        }
    }

    /// Renders the value the way the REPL prints it.
    pub fn inspect(&self) -> String {
        match self {
            Value::Integer(v) => v.to_string(),
            Value::Boolean(v) => v.to_string(),
            Value::Null => "null".to_string(),
            Value::ReturnValue(inner) => inner.inspect(),
            Value::Error(msg) => format!("ERROR: {msg}"),
            Value::Function(f) => {
                let params: Vec<String> = f.parameters.iter().map(|p| p.to_string()).collect();
                format!("fn({}) {{ {} }}", params.join(", "), f.body)
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

/// The process-wide singleton `true`, `false`, and `null` values.
///
/// `thread_local!` rather than a plain `static` because `Rc` is neither
/// `Sync` nor `Send`; the interpreter is single-threaded by design, so this
/// costs nothing in practice while keeping the singletons genuinely shared
/// for the lifetime of the thread.
pub mod singletons {
    use super::*;

    thread_local! {
        static TRUE: ValueRef = Rc::new(Value::Boolean(true));
        static FALSE: ValueRef = Rc::new(Value::Boolean(false));
        static NULL: ValueRef = Rc::new(Value::Null);
    }

    pub fn truth() -> ValueRef {
        TRUE.with(Rc::clone)
    }

    pub fn falsehood() -> ValueRef {
        FALSE.with(Rc::clone)
    }

    pub fn null() -> ValueRef {
        NULL.with(Rc::clone)
    }

    /// Returns the canonical singleton for `b`.
    pub fn native_bool(b: bool) -> ValueRef {
        if b {
            truth()
        } else {
            falsehood()
        }
    }
}

/// A lexical scope: a name-to-value mapping with an optional enclosing
/// scope.
pub struct Environment {
    store: HashMap<String, ValueRef>,
    outer: Option<EnvRef>,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.store.keys().collect::<Vec<_>>())
            .field("has_outer", &self.outer.is_some())
            .finish()
    }
}

impl Environment {
    /// Creates an empty top-level scope with no enclosing environment.
    pub fn new() -> EnvRef {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }

    /// Creates an empty scope enclosed by `outer`.
    pub fn new_enclosed(outer: EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks up `name` in this scope, then recursively in each enclosing
    /// scope.
    pub fn get(&self, name: &str) -> Option<ValueRef> {
        match self.store.get(name) {
            Some(value) => Some(Rc::clone(value)),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` to `value` in this scope, overwriting any existing
    /// binding. Never mutates an enclosing scope.
    pub fn set(&mut self, name: impl Into<String>, value: ValueRef) {
        self.store.insert(name.into(), value);
    }
}

/// Creates a fresh top-level environment for a new evaluation session.
pub fn new_environment() -> EnvRef {
    Environment::new()
}
