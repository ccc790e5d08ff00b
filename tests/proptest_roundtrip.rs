use metatree::{decode, encode, parse, Atom, Numeric, TreeNode};
use proptest::prelude::*;

// ============================================================================
// Strategies for Generating Trees
// ============================================================================

/// Symbol names that never collide with the registered head vocabulary.
fn symbol_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_filter("must not be a registered head", |s| {
        s != "call" && s != "block" && s != "line"
    })
}

fn atom() -> impl Strategy<Value = Atom> {
    prop_oneof![
        symbol_name().prop_map(|s| Atom::Symbol(metatree::Symbol::intern(&s))),
        (-1_000_000i64..1_000_000i64).prop_map(|n| Atom::Number(Numeric::Int(n))),
        any::<bool>().prop_map(Atom::Bool),
        "[ -~]{0,12}".prop_map(Atom::Str),
    ]
}

/// Trees up to a few levels deep; branch heads are drawn from the
/// registered vocabulary, so encoding and decoding are exact inverses.
fn tree() -> impl Strategy<Value = TreeNode> {
    let leaf = atom().prop_map(TreeNode::Leaf);
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            prop_oneof![Just("call"), Just("block")],
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(head, children)| TreeNode::branch(head, children))
    })
}

// ============================================================================
// Round-Trip Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn decode_inverts_encode(node in tree()) {
        prop_assert_eq!(decode(&encode(&node)).unwrap(), node);
    }

    #[test]
    fn texpr_text_reads_back(node in tree()) {
        let mut out = Vec::new();
        metatree::write_texpr(&mut out, &node, &metatree::PrintConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), encode(&node));
    }

    #[test]
    fn compact_display_reads_back(node in tree()) {
        let form = encode(&node);
        prop_assert_eq!(parse(&form.to_string()).unwrap(), form);
    }
}
