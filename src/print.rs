//! Tree rendering.
//!
//! Two textual styles for expression trees share one recursive engine:
//!
//! - nested-call style ([`write_expr`]): `head(child, child, ...)`, with
//!   nested branches wrapped to new lines indented one unit past the
//!   column of the parent's head token;
//! - lisp/tuple style ([`write_texpr`]): `(:head, child, ...)`, mirroring
//!   [`crate::encode`]'s shape, with nested branches indented one unit
//!   past the parent's open-paren column. Its output reads back through
//!   [`crate::parse`].
//!
//! The anchor difference between the two styles is part of the contract,
//! not an accident. A third renderer, [`print_tree`], is generic over a
//! label function and a children function and draws connector glyphs
//! (`├─`, `│`, `└─`); [`write_tree`] instantiates it for expression trees
//! and [`crate::hierarchy::print_subtypes`] for type hierarchies.

use std::io::{self, Write};

use crate::error::Error;
use crate::interner::Symbol;
use crate::tree::{heads, TreeNode};

/// Marker emitted in place of branches elided by a depth bound.
pub const TRUNCATION_MARKER: &str = "...";

// ============================================================================
// Configuration
// ============================================================================

/// Options shared by every printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintConfig {
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Render line-marker branches instead of skipping them
    pub show_line_markers: bool,
    /// Elide branches nested deeper than this
    pub max_depth: Option<usize>,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            indent_width: 4,
            show_line_markers: false,
            max_depth: None,
        }
    }
}

impl PrintConfig {
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn show_line_markers(mut self, show: bool) -> Self {
        self.show_line_markers = show;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

// ============================================================================
// Head Labels
// ============================================================================

/// The canonical label for a registered head. Callers that must not
/// render unknown vocabulary get `UnsupportedHead` here; the printers
/// themselves fall back to the raw head token instead.
pub fn head_label_strict(head: Symbol) -> Result<&'static str, Error> {
    match head.resolve().as_str() {
        heads::CALL => Ok(heads::CALL),
        heads::BLOCK => Ok(heads::BLOCK),
        heads::LINE => Ok(heads::LINE),
        other => Err(Error::unsupported_head(other)),
    }
}

fn head_label(head: Symbol) -> String {
    match head_label_strict(head) {
        Ok(label) => label.to_string(),
        // Deterministic fallback: the raw head token
        Err(_) => head.resolve(),
    }
}

// ============================================================================
// Indented Styles
// ============================================================================

#[derive(Clone, Copy)]
enum Style {
    /// `head(child, ...)` - children anchored at the head token's column
    Call,
    /// `(:head, child, ...)` - children anchored at the open-paren column
    Tuple,
}

/// Render `node` in nested-call style.
pub fn write_expr(w: &mut impl Write, node: &TreeNode, config: &PrintConfig) -> io::Result<()> {
    write_styled(w, node, Style::Call, config, 0, 0)
}

/// Render `node` in lisp/tuple style.
pub fn write_texpr(w: &mut impl Write, node: &TreeNode, config: &PrintConfig) -> io::Result<()> {
    write_styled(w, node, Style::Tuple, config, 0, 0)
}

/// `col` is the column this node starts at: the head token's column in
/// call style, the open-paren column in tuple style. Each style anchors
/// its children one indent unit past its own column.
fn write_styled(
    w: &mut impl Write,
    node: &TreeNode,
    style: Style,
    config: &PrintConfig,
    col: usize,
    depth: usize,
) -> io::Result<()> {
    let (head, children) = match node {
        TreeNode::Leaf(atom) => return write!(w, "{atom}"),
        TreeNode::Branch { head, children } => (head, children),
    };

    let mut wrote_any = match style {
        Style::Call => {
            write!(w, "{}(", head_label(*head))?;
            false
        }
        Style::Tuple => {
            write!(w, "(:{}", head_label(*head))?;
            true
        }
    };

    let child_col = col + config.indent_width;
    for child in children {
        if !config.show_line_markers && child.is_line_marker() {
            continue;
        }
        if wrote_any {
            write!(w, ",")?;
        }
        match child {
            TreeNode::Leaf(atom) => {
                if wrote_any {
                    write!(w, " ")?;
                }
                write!(w, "{atom}")?;
            }
            TreeNode::Branch { .. } => {
                if config.max_depth.is_some_and(|d| depth + 1 > d) {
                    if wrote_any {
                        write!(w, " ")?;
                    }
                    write!(w, "{TRUNCATION_MARKER}")?;
                } else {
                    write!(w, "\n{:child_col$}", "")?;
                    write_styled(w, child, style, config, child_col, depth + 1)?;
                }
            }
        }
        wrote_any = true;
    }
    write!(w, ")")
}

/// [`write_expr`] to standard output, with a trailing newline.
pub fn show_expr(node: &TreeNode, config: &PrintConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_expr(&mut handle, node, config)?;
    writeln!(handle)
}

/// [`write_texpr`] to standard output, with a trailing newline.
pub fn show_texpr(node: &TreeNode, config: &PrintConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_texpr(&mut handle, node, config)?;
    writeln!(handle)
}

// ============================================================================
// Generic Connector Printer
// ============================================================================

/// Render any tree shape with connector glyphs, one node per line. The
/// caller supplies how to label a node and how to enumerate its
/// children; the walk tracks, per ancestor level, whether that ancestor
/// still has unvisited siblings, and draws `│` continuation bars only
/// beneath those. Exactly one child per level - the last - gets the `└─`
/// connector.
pub fn print_tree<T, W, L, C>(
    w: &mut W,
    root: &T,
    label: L,
    children: C,
    max_depth: Option<usize>,
) -> io::Result<()>
where
    W: Write,
    L: Fn(&T) -> String,
    C: Fn(&T) -> Vec<T>,
{
    writeln!(w, "{}", label(root))?;
    let mut prefix = String::new();
    connect(w, root, &label, &children, &mut prefix, 1, max_depth)
}

fn connect<T, W, L, C>(
    w: &mut W,
    node: &T,
    label: &L,
    children: &C,
    prefix: &mut String,
    depth: usize,
    max_depth: Option<usize>,
) -> io::Result<()>
where
    W: Write,
    L: Fn(&T) -> String,
    C: Fn(&T) -> Vec<T>,
{
    let kids = children(node);
    if kids.is_empty() {
        return Ok(());
    }
    if max_depth.is_some_and(|d| depth > d) {
        return writeln!(w, "{prefix}└─ {TRUNCATION_MARKER}");
    }
    let last_index = kids.len() - 1;
    for (i, kid) in kids.iter().enumerate() {
        let last = i == last_index;
        let connector = if last { "└─ " } else { "├─ " };
        writeln!(w, "{prefix}{connector}{}", label(kid))?;
        let saved = prefix.len();
        prefix.push_str(if last { "   " } else { "│  " });
        connect(w, kid, label, children, prefix, depth + 1, max_depth)?;
        prefix.truncate(saved);
    }
    Ok(())
}

/// Connector-style rendering of an expression tree: branches are labeled
/// by their head, leaves by their atom.
pub fn write_tree(w: &mut impl Write, node: &TreeNode, config: &PrintConfig) -> io::Result<()> {
    let show_markers = config.show_line_markers;
    print_tree(
        w,
        node,
        |n| match n {
            TreeNode::Branch { head, .. } => head_label(*head),
            TreeNode::Leaf(atom) => atom.to_string(),
        },
        |n| {
            n.children_of()
                .iter()
                .filter(|c| show_markers || !c.is_line_marker())
                .cloned()
                .collect()
        },
        config.max_depth,
    )
}

/// [`write_tree`] to standard output.
pub fn show_tree(node: &TreeNode, config: &PrintConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_tree(&mut handle, node, config)
}
