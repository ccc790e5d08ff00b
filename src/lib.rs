//! Expression-tree introspection utilities.
//!
//! Models code expressions as trees ([`TreeNode`]), converts them to and
//! from a nested-tuple encoding ([`Form`], [`encode`], [`decode`] with an
//! implicit-call shorthand), evaluates tuple forms against an execution
//! context ([`evaluate`]), and renders trees in human-readable indented
//! form ([`write_expr`], [`write_texpr`], [`write_tree`],
//! [`print_subtypes`]).
//!
//! ```
//! use metatree::{evaluate, parse, Value};
//!
//! let form = parse("(:call, :+, 2, 3)").unwrap();
//! assert_eq!(evaluate(&form).unwrap(), Value::int(5));
//! ```

pub mod error;
pub mod eval;
pub mod form;
pub mod hierarchy;
pub mod interner;
pub mod numeric;
pub mod parse;
pub mod print;
pub mod tree;

// Re-export the public surface for convenience
pub use error::{Error, ErrorKind};
pub use eval::{
    evaluate, evaluate_in, evaluate_with, exec_node, Environment, ExecPrimitive, NativeFn, Value,
};
pub use form::{decode, encode, Form};
pub use hierarchy::{print_subtypes, show_subtypes};
pub use interner::Symbol;
pub use numeric::Numeric;
pub use parse::parse;
pub use print::{
    head_label_strict, print_tree, show_expr, show_texpr, show_tree, write_expr, write_texpr,
    write_tree, PrintConfig, TRUNCATION_MARKER,
};
pub use tree::{heads, is_registered_head, registered_heads, Atom, TreeNode};
