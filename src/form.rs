//! The tuple-form encoding and its codec.
//!
//! A [`Form`] is the nested-tuple ("lisp-like") counterpart of a
//! [`TreeNode`]: an atom, or a list whose first slot conventionally names
//! the head. [`encode`] always emits explicit heads; [`decode`] accepts
//! the implicit-call shorthand, where a list starting with anything other
//! than a registered head symbol is read as a call with that element as
//! the callee:
//!
//! ```
//! use metatree::{decode, Form};
//!
//! let explicit = Form::list(vec![
//!     Form::sym("call"),
//!     Form::sym("sin"),
//!     Form::list(vec![Form::sym("call"), Form::sym("/"), Form::from(6)]),
//! ]);
//! let shorthand = Form::list(vec![
//!     Form::sym("sin"),
//!     Form::list(vec![Form::sym("/"), Form::from(6)]),
//! ]);
//! assert_eq!(decode(&explicit).unwrap(), decode(&shorthand).unwrap());
//! ```
//!
//! The shorthand trades a small ambiguity for conciseness: a registered
//! head name (`call`, `block`, `line`) cannot appear as a bare callee,
//! since a list starting with it is always read as that explicit form.

use std::fmt;

use crate::error::Error;
use crate::interner::Symbol;
use crate::numeric::Numeric;
use crate::tree::{heads, is_registered_head, Atom, TreeNode};

// ============================================================================
// Form
// ============================================================================

/// A nested-tuple value: an atom or an ordered list of forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Form {
    Atom(Atom),
    List(Vec<Form>),
}

impl Form {
    /// A symbol atom.
    pub fn sym(name: &str) -> Self {
        Form::Atom(Atom::Symbol(Symbol::intern(name)))
    }

    /// A list form.
    pub fn list(items: Vec<Form>) -> Self {
        Form::List(items)
    }
}

impl From<Atom> for Form {
    fn from(atom: Atom) -> Self {
        Form::Atom(atom)
    }
}

impl From<Numeric> for Form {
    fn from(n: Numeric) -> Self {
        Form::Atom(Atom::Number(n))
    }
}

impl From<i64> for Form {
    fn from(n: i64) -> Self {
        Form::Atom(Atom::from(n))
    }
}

impl From<f64> for Form {
    fn from(x: f64) -> Self {
        Form::Atom(Atom::from(x))
    }
}

impl From<bool> for Form {
    fn from(b: bool) -> Self {
        Form::Atom(Atom::Bool(b))
    }
}

// A bare string literal is a string atom; symbols go through `Form::sym`.
impl From<&str> for Form {
    fn from(s: &str) -> Self {
        Form::Atom(Atom::from(s))
    }
}

impl fmt::Display for Form {
    /// Compact single-line rendering; the pretty printers live in
    /// [`crate::print`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Atom(atom) => write!(f, "{atom}"),
            Form::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

// ============================================================================
// Codec
// ============================================================================

/// Encode a tree as a tuple form. A leaf becomes its atom unchanged (not
/// wrapped in a list); a branch becomes a list led by its head symbol.
/// The output never relies on the implicit-call shorthand, so it is
/// unambiguous and `decode` inverts it exactly.
pub fn encode(node: &TreeNode) -> Form {
    match node {
        TreeNode::Leaf(atom) => Form::Atom(atom.clone()),
        TreeNode::Branch { head, children } => {
            let mut items = Vec::with_capacity(children.len() + 1);
            items.push(Form::Atom(Atom::Symbol(*head)));
            items.extend(children.iter().map(encode));
            Form::List(items)
        }
    }
}

/// Decode a tuple form into a tree. Atoms become leaves. A list led by a
/// registered head symbol becomes a branch with that head; any other
/// non-empty list is an implicit call. An empty list is malformed.
pub fn decode(form: &Form) -> Result<TreeNode, Error> {
    match form {
        Form::Atom(atom) => Ok(TreeNode::Leaf(atom.clone())),
        Form::List(items) => {
            let Some((first, rest)) = items.split_first() else {
                return Err(Error::malformed("empty tuple"));
            };
            if let Form::Atom(Atom::Symbol(sym)) = first {
                if is_registered_head(*sym) {
                    let children = rest.iter().map(decode).collect::<Result<_, _>>()?;
                    return Ok(TreeNode::Branch {
                        head: *sym,
                        children,
                    });
                }
            }
            // Implicit call: the first element is itself the callee
            log::trace!("implicit call shorthand for {form}");
            let children = items.iter().map(decode).collect::<Result<_, _>>()?;
            Ok(TreeNode::Branch {
                head: Symbol::intern(heads::CALL),
                children,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn leaf_encodes_to_bare_atom() {
        let form = encode(&TreeNode::leaf(Numeric::Int(7)));
        assert_eq!(form, Form::from(7));
    }

    #[test]
    fn empty_list_is_malformed() {
        let err = decode(&Form::list(vec![])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedForm);
    }

    #[test]
    fn nested_empty_list_is_malformed() {
        let form = Form::list(vec![Form::sym("call"), Form::sym("f"), Form::list(vec![])]);
        assert_eq!(decode(&form).unwrap_err().kind, ErrorKind::MalformedForm);
    }
}
