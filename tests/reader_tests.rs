use metatree::{decode, parse, Atom, ErrorKind, Form, Numeric};

// ============================================================================
// Atoms
// ============================================================================

#[test]
fn reads_sigiled_and_bare_symbols() {
    assert_eq!(parse(":sin").unwrap(), Form::sym("sin"));
    assert_eq!(parse("sin").unwrap(), Form::sym("sin"));
    assert_eq!(parse(":+").unwrap(), Form::sym("+"));
}

#[test]
fn reads_numbers() {
    assert_eq!(parse("42").unwrap(), Form::from(42));
    assert_eq!(parse("-7").unwrap(), Form::from(-7));
    assert_eq!(parse("-2.5").unwrap(), Form::from(-2.5));
    assert_eq!(parse("-5/2").unwrap(), Form::from(Numeric::Ratio(-5, 2)));
    assert_eq!(parse("2.5").unwrap(), Form::from(2.5));
    assert_eq!(parse("1e-3").unwrap(), Form::from(1e-3));
    assert_eq!(parse("5/2").unwrap(), Form::from(Numeric::Ratio(5, 2)));
    // Ratios reduce on read
    assert_eq!(parse("6/4").unwrap(), Form::from(Numeric::Ratio(3, 2)));
    assert_eq!(parse("6/2").unwrap(), Form::from(3));
}

#[test]
fn reads_strings_with_escapes() {
    assert_eq!(
        parse("\"a\\nb\"").unwrap(),
        Form::Atom(Atom::Str("a\nb".to_string()))
    );
}

#[test]
fn reads_bools() {
    assert_eq!(parse("true").unwrap(), Form::from(true));
    assert_eq!(parse("false").unwrap(), Form::from(false));
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn reads_nested_lists() {
    let form = parse("(:call, :sin, (:call, :/, :pi, 6))").unwrap();
    assert_eq!(
        form,
        Form::list(vec![
            Form::sym("call"),
            Form::sym("sin"),
            Form::list(vec![
                Form::sym("call"),
                Form::sym("/"),
                Form::sym("pi"),
                Form::from(6),
            ]),
        ])
    );
}

#[test]
fn commas_are_optional() {
    assert_eq!(
        parse("(:+ 2 3)").unwrap(),
        parse("(:+, 2, 3)").unwrap()
    );
}

#[test]
fn empty_list_parses_but_does_not_decode() {
    let form = parse("()").unwrap();
    assert_eq!(form, Form::list(vec![]));
    assert_eq!(decode(&form).unwrap_err().kind, ErrorKind::MalformedForm);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn empty_input_is_malformed() {
    assert_eq!(parse("").unwrap_err().kind, ErrorKind::MalformedForm);
    assert_eq!(parse("   ").unwrap_err().kind, ErrorKind::MalformedForm);
}

#[test]
fn unclosed_list_is_malformed() {
    assert_eq!(parse("(:+, 2").unwrap_err().kind, ErrorKind::MalformedForm);
}

#[test]
fn stray_close_paren_is_malformed() {
    assert_eq!(parse(")").unwrap_err().kind, ErrorKind::MalformedForm);
}

#[test]
fn trailing_tokens_are_malformed() {
    assert_eq!(
        parse("(:+, 1, 2) 3").unwrap_err().kind,
        ErrorKind::MalformedForm
    );
}

#[test]
fn unterminated_string_is_malformed() {
    assert_eq!(parse("\"abc").unwrap_err().kind, ErrorKind::MalformedForm);
}

#[test]
fn unknown_escape_is_malformed() {
    assert_eq!(parse("\"a\\qb\"").unwrap_err().kind, ErrorKind::MalformedForm);
}

#[test]
fn bare_sigil_is_malformed() {
    assert_eq!(parse(":").unwrap_err().kind, ErrorKind::MalformedForm);
}
