//! Type-hierarchy walking.
//!
//! The reflection facility that enumerates direct subtypes is an external
//! collaborator, injected as a function. This module only walks: it
//! deduplicates each reported subtype list (first occurrence wins, so the
//! reported order is preserved) and renders depth-first through the
//! generic connector printer.
//!
//! ```
//! use metatree::print_subtypes;
//!
//! let mut out = Vec::new();
//! print_subtypes(&mut out, &"Number", |t| match *t {
//!     "Number" => vec!["Integer", "Real"],
//!     "Integer" => vec!["Signed", "Unsigned"],
//!     _ => vec![],
//! }, None).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Number\n\
//!      ├─ Integer\n\
//!      │  ├─ Signed\n\
//!      │  └─ Unsigned\n\
//!      └─ Real\n",
//! );
//! ```

use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

use rustc_hash::FxHashSet;

use crate::print::print_tree;

/// Depth-first, connector-drawn rendering of the subtype hierarchy rooted
/// at `root`. `subtypes` reports the direct subtypes of a type; repeats
/// within one report are dropped, keeping the first occurrence.
pub fn print_subtypes<T, W, S>(
    w: &mut W,
    root: &T,
    subtypes: S,
    max_depth: Option<usize>,
) -> io::Result<()>
where
    T: Clone + Eq + Hash + Display,
    W: Write,
    S: Fn(&T) -> Vec<T>,
{
    print_tree(
        w,
        root,
        |t| t.to_string(),
        |t| dedup_first_seen(subtypes(t)),
        max_depth,
    )
}

/// [`print_subtypes`] to standard output.
pub fn show_subtypes<T, S>(root: &T, subtypes: S, max_depth: Option<usize>) -> io::Result<()>
where
    T: Clone + Eq + Hash + Display,
    S: Fn(&T) -> Vec<T>,
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    print_subtypes(&mut handle, root, subtypes, max_depth)
}

fn dedup_first_seen<T: Clone + Eq + Hash>(items: Vec<T>) -> Vec<T> {
    let mut seen = FxHashSet::default();
    items.into_iter().filter(|t| seen.insert(t.clone())).collect()
}
