//! Evaluation of tuple forms.
//!
//! The evaluator is a thin bridge: it decodes a form into a tree and
//! hands the tree to an execution primitive together with an
//! [`Environment`]. The primitive is an injected function parameter;
//! [`exec_node`] is the built-in one, and the default environment binds
//! arithmetic, comparison, and a few math natives. No semantic
//! validation happens here, and primitive failures are wrapped once,
//! message preserved.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::error::Error;
use crate::form::{decode, Form};
use crate::interner::Symbol;
use crate::numeric::Numeric;
use crate::tree::{heads, Atom, TreeNode};

// ============================================================================
// Values
// ============================================================================

/// Native function type - Rust functions callable from evaluated expressions
pub type NativeFn = fn(&[Value], &mut Environment) -> Result<Value, String>;

/// The result of evaluating an expression.
#[derive(Clone, Debug)]
pub enum Value {
    Atom(Atom),
    NativeFn(NativeFn),
    Nil,
}

// Manual PartialEq implementation because function pointers need special handling
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Atom(a), Value::Atom(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::NativeFn(a), Value::NativeFn(b)) => std::ptr::fn_addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Atom(atom) => write!(f, "{atom}"),
            Value::NativeFn(_) => write!(f, "<native-fn>"),
            Value::Nil => write!(f, "nil"),
        }
    }
}

impl Value {
    /// A numeric value.
    pub fn number(n: Numeric) -> Self {
        Value::Atom(Atom::Number(n))
    }

    /// An integer value.
    pub fn int(n: i64) -> Self {
        Value::number(Numeric::Int(n))
    }
}

// ============================================================================
// Environment
// ============================================================================

/// A namespace in which symbols resolve to bindings. Lookup walks the
/// parent chain; definition copies on write, so extended environments
/// never mutate their parents.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    bindings: Rc<FxHashMap<Symbol, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// An empty environment with no bindings at all.
    pub fn new() -> Self {
        Environment {
            bindings: Rc::new(FxHashMap::default()),
            parent: None,
        }
    }

    /// A child environment whose lookups fall back to `self`.
    pub fn child(&self) -> Self {
        Environment {
            bindings: Rc::new(FxHashMap::default()),
            parent: Some(Rc::new(self.clone())),
        }
    }

    /// Bind `name` to `value` in this environment.
    pub fn define(&mut self, name: &str, value: Value) {
        let mut new_bindings = (*self.bindings).clone();
        new_bindings.insert(Symbol::intern(name), value);
        self.bindings = Rc::new(new_bindings);
    }

    /// Resolve a symbol, walking the parent chain.
    pub fn lookup(&self, sym: Symbol) -> Option<Value> {
        if let Some(value) = self.bindings.get(&sym) {
            Some(value.clone())
        } else if let Some(ref parent) = self.parent {
            parent.lookup(sym)
        } else {
            None
        }
    }

    /// The designated default context: arithmetic, comparison, a few math
    /// functions, and `pi`.
    pub fn default_env() -> Self {
        let mut env = Environment::new();
        env.define("+", Value::NativeFn(native_add));
        env.define("-", Value::NativeFn(native_sub));
        env.define("*", Value::NativeFn(native_mul));
        env.define("/", Value::NativeFn(native_div));
        env.define("<", Value::NativeFn(native_lt));
        env.define(">", Value::NativeFn(native_gt));
        env.define("<=", Value::NativeFn(native_le));
        env.define(">=", Value::NativeFn(native_ge));
        env.define("=", Value::NativeFn(native_eq));
        env.define("sin", Value::NativeFn(native_sin));
        env.define("cos", Value::NativeFn(native_cos));
        env.define("sqrt", Value::NativeFn(native_sqrt));
        env.define("abs", Value::NativeFn(native_abs));
        env.define("pi", Value::number(Numeric::Float(std::f64::consts::PI)));
        env
    }
}

// ============================================================================
// Execution Primitive
// ============================================================================

/// The execution primitive signature: runs a decoded tree in a context.
pub type ExecPrimitive = fn(&TreeNode, &mut Environment) -> Result<Value, String>;

/// The built-in execution primitive. Literals self-evaluate, symbols
/// resolve through the environment, `call` branches apply native
/// functions, `block` branches yield their last child's value, and line
/// markers evaluate to nil.
pub fn exec_node(node: &TreeNode, env: &mut Environment) -> Result<Value, String> {
    match node {
        TreeNode::Leaf(Atom::Symbol(sym)) => env
            .lookup(*sym)
            .ok_or_else(|| format!("unbound symbol: {sym}")),
        TreeNode::Leaf(atom) => Ok(Value::Atom(atom.clone())),
        TreeNode::Branch { head, children } => match head.resolve().as_str() {
            heads::CALL => {
                let Some((callee, args)) = children.split_first() else {
                    return Err("call: missing callee".to_string());
                };
                let func = exec_node(callee, env)?;
                let mut arg_vals = Vec::with_capacity(args.len());
                for arg in args {
                    arg_vals.push(exec_node(arg, env)?);
                }
                match func {
                    Value::NativeFn(f) => f(&arg_vals, env),
                    other => Err(format!("cannot apply non-function: {other}")),
                }
            }
            heads::BLOCK => {
                let mut result = Value::Nil;
                for child in children {
                    result = exec_node(child, env)?;
                }
                Ok(result)
            }
            heads::LINE => Ok(Value::Nil),
            other => Err(format!("cannot execute head: {other}")),
        },
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Evaluate a form with an explicitly injected execution primitive.
pub fn evaluate_with(
    form: &Form,
    env: &mut Environment,
    primitive: ExecPrimitive,
) -> Result<Value, Error> {
    let node = decode(form)?;
    log::debug!("evaluating {node}");
    primitive(&node, env).map_err(Error::evaluation)
}

/// Evaluate a form in a caller-supplied context with the built-in
/// primitive.
pub fn evaluate_in(form: &Form, env: &mut Environment) -> Result<Value, Error> {
    evaluate_with(form, env, exec_node)
}

/// Evaluate a form in the designated default context.
pub fn evaluate(form: &Form) -> Result<Value, Error> {
    let mut env = Environment::default_env();
    evaluate_in(form, &mut env)
}

// ============================================================================
// Native Functions
// ============================================================================

/// Extract a numeric from a Value
fn extract_number(op_name: &str, value: &Value) -> Result<Numeric, String> {
    match value {
        Value::Atom(Atom::Number(n)) => Ok(n.clone()),
        _ => Err(format!("{op_name}: expected number, got {value}")),
    }
}

/// Fold a variadic numeric operation over at least one argument.
fn fold_arithmetic<F>(op_name: &str, args: &[Value], op: F) -> Result<Value, String>
where
    F: Fn(&Numeric, &Numeric) -> Result<Numeric, String>,
{
    let Some((first, rest)) = args.split_first() else {
        return Err(format!("{op_name}: expected at least 1 argument"));
    };
    let mut acc = extract_number(op_name, first)?;
    for arg in rest {
        acc = op(&acc, &extract_number(op_name, arg)?)?;
    }
    Ok(Value::number(acc))
}

/// A binary numeric comparison.
fn compare<F>(op_name: &str, args: &[Value], op: F) -> Result<Value, String>
where
    F: Fn(&Numeric, &Numeric) -> bool,
{
    match args {
        [a, b] => {
            let a = extract_number(op_name, a)?;
            let b = extract_number(op_name, b)?;
            Ok(Value::Atom(Atom::Bool(op(&a, &b))))
        }
        _ => Err(format!("{op_name}: expected 2 arguments, got {}", args.len())),
    }
}

/// A unary float function.
fn float_fn(op_name: &str, args: &[Value], op: fn(f64) -> f64) -> Result<Value, String> {
    match args {
        [a] => {
            let n = extract_number(op_name, a)?;
            Ok(Value::number(Numeric::Float(op(n.to_f64()))))
        }
        _ => Err(format!("{op_name}: expected 1 argument, got {}", args.len())),
    }
}

fn native_add(args: &[Value], _env: &mut Environment) -> Result<Value, String> {
    fold_arithmetic("+", args, |a, b| a.add(b))
}

fn native_sub(args: &[Value], _env: &mut Environment) -> Result<Value, String> {
    // Unary minus negates
    if let [a] = args {
        let n = extract_number("-", a)?;
        return Ok(Value::number(Numeric::Int(0).sub(&n)?));
    }
    fold_arithmetic("-", args, |a, b| a.sub(b))
}

fn native_mul(args: &[Value], _env: &mut Environment) -> Result<Value, String> {
    fold_arithmetic("*", args, |a, b| a.mul(b))
}

fn native_div(args: &[Value], _env: &mut Environment) -> Result<Value, String> {
    if args.len() < 2 {
        return Err(format!("/: expected at least 2 arguments, got {}", args.len()));
    }
    fold_arithmetic("/", args, |a, b| a.div(b))
}

fn native_lt(args: &[Value], _env: &mut Environment) -> Result<Value, String> {
    compare("<", args, |a, b| a < b)
}

fn native_gt(args: &[Value], _env: &mut Environment) -> Result<Value, String> {
    compare(">", args, |a, b| a > b)
}

fn native_le(args: &[Value], _env: &mut Environment) -> Result<Value, String> {
    compare("<=", args, |a, b| a <= b)
}

fn native_ge(args: &[Value], _env: &mut Environment) -> Result<Value, String> {
    compare(">=", args, |a, b| a >= b)
}

fn native_eq(args: &[Value], _env: &mut Environment) -> Result<Value, String> {
    compare("=", args, |a, b| a == b)
}

fn native_sin(args: &[Value], _env: &mut Environment) -> Result<Value, String> {
    float_fn("sin", args, f64::sin)
}

fn native_cos(args: &[Value], _env: &mut Environment) -> Result<Value, String> {
    float_fn("cos", args, f64::cos)
}

fn native_sqrt(args: &[Value], _env: &mut Environment) -> Result<Value, String> {
    float_fn("sqrt", args, f64::sqrt)
}

fn native_abs(args: &[Value], _env: &mut Environment) -> Result<Value, String> {
    float_fn("abs", args, f64::abs)
}
