//! The expression-tree model shared by every other component.
//!
//! A tree is either a `Leaf` holding an atomic datum or a `Branch` with a
//! head tag and an ordered sequence of children. Trees are built once and
//! read thereafter; owned children make cycles unrepresentable.

use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

use crate::error::Error;
use crate::interner::Symbol;
use crate::numeric::Numeric;

// ============================================================================
// Head Vocabulary
// ============================================================================

/// The registered head symbols the decoder treats as explicit. This set is
/// stable: it defines the boundary of the implicit-call shorthand, so a
/// tuple starting with any of these names is always an explicit form.
pub mod heads {
    /// Function application: `(call callee args...)`
    pub const CALL: &str = "call";
    /// Sequential block: `(block expr...)`, value of the last child
    pub const BLOCK: &str = "block";
    /// Source-position annotation: `(line file number)`
    pub const LINE: &str = "line";

    pub(crate) const ALL: [&str; 3] = [CALL, BLOCK, LINE];
}

static REGISTERED: Lazy<FxHashSet<Symbol>> =
    Lazy::new(|| heads::ALL.iter().map(|h| Symbol::intern(h)).collect());

/// Whether `sym` is one of the registered head symbols.
pub fn is_registered_head(sym: Symbol) -> bool {
    REGISTERED.contains(&sym)
}

/// The registered head symbols, in declaration order.
pub fn registered_heads() -> Vec<Symbol> {
    heads::ALL.iter().map(|h| Symbol::intern(h)).collect()
}

// ============================================================================
// Atoms
// ============================================================================

/// An atomic datum carried by a leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Symbol(Symbol),
    Number(Numeric),
    Str(String),
    Bool(bool),
}

impl From<Symbol> for Atom {
    fn from(s: Symbol) -> Self {
        Atom::Symbol(s)
    }
}

impl From<Numeric> for Atom {
    fn from(n: Numeric) -> Self {
        Atom::Number(n)
    }
}

impl From<i64> for Atom {
    fn from(n: i64) -> Self {
        Atom::Number(Numeric::Int(n))
    }
}

impl From<f64> for Atom {
    fn from(x: f64) -> Self {
        Atom::Number(Numeric::Float(x))
    }
}

impl From<bool> for Atom {
    fn from(b: bool) -> Self {
        Atom::Bool(b)
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Atom::Str(s.to_string())
    }
}

fn escape_string(s: &str) -> String {
    let mut result = String::new();
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            c => result.push(c),
        }
    }
    result
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The sigil keeps symbols readable back through the reader
            Atom::Symbol(s) => write!(f, ":{s}"),
            Atom::Number(n) => write!(f, "{n}"),
            Atom::Str(s) => write!(f, "\"{}\"", escape_string(s)),
            Atom::Bool(b) => write!(f, "{b}"),
        }
    }
}

// ============================================================================
// TreeNode
// ============================================================================

/// An expression tree: a leaf atom or a head-tagged branch with ordered
/// children.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Leaf(Atom),
    Branch { head: Symbol, children: Vec<TreeNode> },
}

impl TreeNode {
    /// Build a leaf from anything convertible to an atom.
    pub fn leaf(atom: impl Into<Atom>) -> Self {
        TreeNode::Leaf(atom.into())
    }

    /// Build a leaf holding a symbol.
    pub fn sym(name: &str) -> Self {
        TreeNode::Leaf(Atom::Symbol(Symbol::intern(name)))
    }

    /// Build a branch with the given head tag.
    pub fn branch(head: &str, children: Vec<TreeNode>) -> Self {
        TreeNode::Branch {
            head: Symbol::intern(head),
            children,
        }
    }

    /// Build an explicit call branch.
    pub fn call(children: Vec<TreeNode>) -> Self {
        TreeNode::branch(heads::CALL, children)
    }

    /// Build a line-marker branch (`file`, `line`).
    pub fn line_marker(file: &str, line: i64) -> Self {
        TreeNode::branch(heads::LINE, vec![TreeNode::leaf(file), TreeNode::leaf(line)])
    }

    /// The head tag of a branch. Fails on a leaf: leaves carry data, not
    /// operations.
    pub fn head_of(&self) -> Result<Symbol, Error> {
        match self {
            TreeNode::Branch { head, .. } => Ok(*head),
            TreeNode::Leaf(atom) => Err(Error::not_a_branch(format!(
                "head_of: leaf {atom} has no head"
            ))),
        }
    }

    /// The children of a branch; a leaf has none.
    pub fn children_of(&self) -> &[TreeNode] {
        match self {
            TreeNode::Branch { children, .. } => children,
            TreeNode::Leaf(_) => &[],
        }
    }

    /// Whether this node is a source-position annotation.
    pub fn is_line_marker(&self) -> bool {
        matches!(self, TreeNode::Branch { head, .. } if head.resolve() == heads::LINE)
    }
}

impl fmt::Display for TreeNode {
    /// Compact single-line tuple rendering, mainly for messages and logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeNode::Leaf(atom) => write!(f, "{atom}"),
            TreeNode::Branch { head, children } => {
                write!(f, "(:{head}")?;
                for child in children {
                    write!(f, ", {child}")?;
                }
                write!(f, ")")
            }
        }
    }
}
