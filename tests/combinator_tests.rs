use pretty_assertions::assert_eq;
use rstest::rstest;

use parsley::parse;
use parsley::parser::{
    ParseError, PartialParse, between, braces, brackets, character, choice, constant, digit,
    ignore, many, many1, optional, quotes, sep_by, sep_by1, sequence, skip_whitespace, str,
    symbol, whitespace, whitespace1,
};

#[rstest]
#[case(" x", true)]
#[case("\tx", true)]
#[case("\nx", true)]
#[case("\u{00a0}x", true)]
#[case("xx", false)]
#[case("", false)]
fn whitespace1_classifies(#[case] input: &str, #[case] matches: bool) {
    assert_eq!(whitespace1().run_step(input).is_ok(), matches);
}

#[test]
fn whitespace_collects_zero_or_more() {
    assert_eq!(
        whitespace().run_step(" \t x"),
        Ok(PartialParse {
            rest: "x",
            value: vec![' ', '\t', ' ']
        })
    );
    assert_eq!(
        whitespace().run_step("x"),
        Ok(PartialParse {
            rest: "x",
            value: vec![]
        })
    );
    assert_eq!(
        skip_whitespace().run_step("   y"),
        Ok(PartialParse { rest: "y", value: () })
    );
}

#[rstest]
#[case("0", true)]
#[case("9", true)]
#[case("a", false)]
#[case("٣", false)]
fn digit_is_ascii_only(#[case] input: &str, #[case] matches: bool) {
    assert_eq!(parse(&digit(), input).is_ok(), matches);
}

#[test]
fn digit_error_names_the_character() {
    assert_eq!(parse(&digit(), "q"), Err(ParseError::new("digit", "q")));
}

#[test]
fn str_matches_literal_and_trailing_whitespace() {
    assert_eq!(
        str("let").run_step("let  x"),
        Ok(PartialParse {
            rest: "x",
            value: "let".to_string()
        })
    );
    assert_eq!(str("let").run_step("lex"), Err(ParseError::new("t", "x")));
}

#[test]
fn symbol_skips_whitespace() {
    assert_eq!(parse(&symbol(","), ",   "), Ok(",".to_string()));
}

#[test]
fn choice_takes_first_match() {
    let p = choice("letter", vec![character('a'), character('b'), character('c')]);
    assert_eq!(parse(&p, "b"), Ok('b'));
}

#[test]
fn choice_reports_aggregate_error() {
    let p = choice("letter", vec![character('a'), character('b')]);
    assert_eq!(parse(&p, "z"), Err(ParseError::new("letter", "no match")));

    let empty = choice::<char>("anything", vec![]);
    assert_eq!(parse(&empty, ""), Err(ParseError::new("anything", "no match")));
}

#[test]
fn sequence_collects_in_order() {
    let p = sequence(vec![character('a'), digit(), character('c')]);
    assert_eq!(parse(&p, "a1c"), Ok(vec!['a', '1', 'c']));
    assert_eq!(parse(&sequence::<char>(vec![]), ""), Ok(vec![]));
}

#[test]
fn sequence_fails_with_element_error() {
    let p = sequence(vec![character('a'), digit(), character('c')]);
    assert_eq!(parse(&p, "axc"), Err(ParseError::new("digit", "x")));
}

#[test]
fn ignore_discards_value() {
    assert_eq!(parse(&ignore(digit()), "4"), Ok(()));
}

#[test]
fn optional_falls_back_to_default() {
    let p = optional(digit(), '0');
    assert_eq!(parse(&p, "7"), Ok('7'));
    assert_eq!(parse(&p, ""), Ok('0'));
}

#[test]
fn many_and_many1() {
    assert_eq!(parse(&many(digit()), "123"), Ok(vec!['1', '2', '3']));
    assert_eq!(parse(&many(digit()), ""), Ok(vec![]));
    assert_eq!(parse(&many1(digit()), "42"), Ok(vec!['4', '2']));
    assert_eq!(
        parse(&many1(digit()), ""),
        Err(ParseError::new("any character", "end of input"))
    );
}

#[test]
fn many_handles_long_runs() {
    let digits = "7".repeat(100_000);
    assert_eq!(parse(&many(digit()), &digits).map(|ds| ds.len()), Ok(100_000));
    assert_eq!(parse(&many1(digit()), &digits).map(|ds| ds.len()), Ok(100_000));

    let list = format!("1{}", ",2".repeat(10_000));
    assert_eq!(
        parse(&sep_by(digit(), character(',')), &list).map(|ds| ds.len()),
        Ok(10_001)
    );
}

#[test]
fn many1_fails_with_first_attempt_error() {
    assert_eq!(parse(&many1(digit()), "x1"), Err(ParseError::new("digit", "x")));
}

#[test]
fn many_stops_before_non_matching_input() {
    assert_eq!(
        many(digit()).run_step("12ab"),
        Ok(PartialParse {
            rest: "ab",
            value: vec!['1', '2']
        })
    );
}

#[test]
fn sep_by_drops_separators() {
    let list = sep_by(digit(), symbol(","));
    assert_eq!(parse(&list, "1, 2,3"), Ok(vec!['1', '2', '3']));
    assert_eq!(parse(&list, ""), Ok(vec![]));
}

#[test]
fn sep_by1_requires_one_element() {
    let list = sep_by1(digit(), symbol(","));
    assert_eq!(parse(&list, "5"), Ok(vec!['5']));
    assert!(parse(&list, "").is_err());
}

#[test]
fn sep_by_leaves_trailing_separator_unconsumed() {
    let list = sep_by(digit(), character(','));
    assert_eq!(
        list.run_step("1,2,"),
        Ok(PartialParse {
            rest: ",",
            value: vec!['1', '2']
        })
    );
}

#[test]
fn between_returns_inner_value() {
    let p = between(character('<'), character('>'), digit());
    assert_eq!(parse(&p, "<8>"), Ok('8'));
    assert_eq!(
        parse(&p, "<8"),
        Err(ParseError::new("any character", "end of input"))
    );
}

#[test]
fn bracketing_helpers() {
    // digits do not skip whitespace, so the closing bracket sees a space
    assert_eq!(
        parse(&brackets(many(digit())), "[ 12 ] "),
        Err(ParseError::new("]", " "))
    );
    assert_eq!(parse(&brackets(many(digit())), "[ 12] "), Ok(vec!['1', '2']));
    assert_eq!(parse(&braces(digit()), "{ 3}"), Ok('3'));
    assert_eq!(parse(&quotes(str("hi")), "\" hi \""), Ok("hi".to_string()));
}

#[test]
fn sequence_accepts_constant_elements() {
    let p = sequence(vec![constant('x'), digit()]);
    assert_eq!(parse(&p, "5"), Ok(vec!['x', '5']));
}
