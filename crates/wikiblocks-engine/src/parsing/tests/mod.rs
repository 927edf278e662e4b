//! End-to-end tests for the parsing pipeline.
//!
//! Fixture snapshots live in the crate's `tests/` directory; these cover
//! exact output for small inputs and properties over generated ones.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::{
    error::ParseError,
    parsing::{
        Block, BlockKind, CommentMode, HeaderMode, ParseOptions, parse, parse_document,
        parse_with_options, snapshot,
    },
};

fn text_of(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Text && !b.skip)
        .map(|b| b.text.as_str())
        .collect()
}

fn with(headers: HeaderMode, comments: CommentMode) -> ParseOptions {
    ParseOptions {
        headers,
        comments,
        ..ParseOptions::default()
    }
}

#[test]
fn nested_list_closes_inner_level_first() {
    let blocks = parse("* a\n** b\n* c\n").unwrap();
    assert_eq!(
        blocks,
        vec![Block::text(
            "<ul><li> a\n<ul><li> b\n</li></ul>\n</li><li> c\n</li></ul>\n"
        )]
    );
}

#[test]
fn outer_list_marker_change_closes_with_new_tag() {
    let blocks = parse("* a\n#* b\n").unwrap();
    assert_eq!(
        blocks,
        vec![Block::text(
            "<ul><li> a\n<ul><li> b\n</li></ul>\n</li></ol>\n"
        )]
    );
}

#[test]
fn bold_and_italic_pairs() {
    let blocks = parse("'''bold''' normal ''italic''").unwrap();
    assert_eq!(
        text_of(&blocks),
        "<p><b>bold</b> normal <i>italic</i>\n</p>\n"
    );
}

#[test]
fn bare_heading_run_is_literal_text() {
    let blocks = parse("====\n").unwrap();
    assert!(blocks.iter().all(|b| b.kind != BlockKind::Header));
    assert_eq!(text_of(&blocks), "<p>====\n</p>\n");
}

#[test]
fn isbn_is_extracted_cleaned() {
    let blocks = parse("isbn 0-123-45678-9").unwrap();
    assert_eq!(
        blocks,
        vec![
            Block::text("<p>"),
            Block::new(BlockKind::Isbn, "0123456789"),
            Block::text("\n</p>\n"),
        ]
    );
}

#[test]
fn header_leaves_an_elided_empty_paragraph() {
    let blocks = parse("== Title ==\ntext").unwrap();
    let mut empty = Block::text("<p></p>\n");
    empty.skip = true;
    assert_eq!(
        blocks,
        vec![
            empty,
            Block::header(2, "Title"),
            Block::text("\n<p>text\n</p>\n"),
        ]
    );
}

#[test]
fn header_closes_running_paragraph() {
    let blocks = parse("intro\n= Top =\n").unwrap();
    assert_eq!(
        blocks,
        vec![
            Block::text("<p>intro\n</p>\n"),
            Block::header(1, "Top"),
            Block::text("\n"),
        ]
    );
}

#[test]
fn line_header_mode_renders_inline() {
    let blocks = parse_with_options(
        "== Title ==\ntext",
        &with(HeaderMode::Line, CommentMode::Drop),
    )
    .unwrap();
    assert_eq!(
        blocks,
        vec![Block::text("<h2> Title </h2>\n<p>text\n</p>\n")]
    );
}

#[test]
fn comments_are_dropped_by_default() {
    let blocks = parse("a <!-- note --> b").unwrap();
    assert_eq!(blocks, vec![Block::text("<p>a  b\n</p>\n")]);
}

#[test]
fn comments_become_blocks_on_request() {
    let blocks = parse_with_options(
        "a <!-- note --> b",
        &with(HeaderMode::Block, CommentMode::Block),
    )
    .unwrap();
    assert_eq!(
        blocks,
        vec![
            Block::text("<p>a "),
            Block::new(BlockKind::Comment, " note "),
            Block::text(" b\n</p>\n"),
        ]
    );
}

#[test]
fn template_and_link_capture() {
    let blocks = parse("{{cite web|url=x}} see [[Main Page|home]]").unwrap();
    let extracted: Vec<_> = blocks
        .into_iter()
        .filter(|b| b.kind != BlockKind::Text)
        .collect();
    assert_eq!(
        extracted,
        vec![
            Block::template(Some("cite".into()), "web|url=x"),
            Block::new(BlockKind::Link, "Main Page|home"),
        ]
    );
}

#[test]
fn nowiki_content_is_not_parsed() {
    let blocks = parse("<nowiki>''x'' <b></nowiki>").unwrap();
    assert_eq!(blocks[1], Block::new(BlockKind::RawText, "''x'' <b>"));
    assert_eq!(text_of(&blocks), "<p>\n</p>\n");
}

#[test]
fn unterminated_nowiki_takes_the_rest() {
    let blocks = parse("a <nowiki>b\n''c''").unwrap();
    assert_eq!(
        blocks,
        vec![
            Block::text("<p>a "),
            Block::new(BlockKind::RawText, "b\n''c''"),
            Block::text("\n</p>\n"),
        ]
    );
}

#[test]
fn multi_line_template_joins_lines() {
    let blocks = parse("{{infobox\n| name = x\n}} after").unwrap();
    assert_eq!(blocks[1], Block::template(Some("infobox".into()), "| name = x"));
    assert_eq!(blocks[2], Block::text(" after\n</p>\n"));
}

#[test]
fn blank_line_separates_paragraphs() {
    assert_eq!(
        text_of(&parse("one\n\ntwo").unwrap()),
        "<p>one\n</p>\n<p>two\n</p>\n"
    );
}

#[test]
fn empty_input_has_no_blocks() {
    assert!(parse("").unwrap().is_empty());
}

#[rstest]
#[case("a\rb\r\rc '''d'''\r")]
#[case("a\r\nb\r\n\r\nc '''d'''\r\n")]
#[case("a\n\rb\n\r\n\rc '''d'''\n\r")]
fn line_ending_conventions_agree(#[case] input: &str) {
    assert_eq!(
        parse(input).unwrap(),
        parse("a\nb\n\nc '''d'''\n").unwrap()
    );
}

#[test]
fn separator_avoids_input_collisions() {
    let doc = parse_document("a @@0@@ b {{t}}", &ParseOptions::default()).unwrap();
    assert_eq!(doc.separator.token(), "@@1@@");
    assert_eq!(doc.blocks[0].text, "<p>a @@0@@ b ");
    snapshot::invariants(&doc);
}

#[test]
fn glued_separator_triggers_retry() {
    // dropping the comments splices `@@0@@` together
    let doc = parse_document("@@<!-- -->0@@", &ParseOptions::default()).unwrap();
    assert_eq!(doc.separator.token(), "@@1@@");
    assert_eq!(doc.blocks, vec![Block::text("<p>@@0@@\n</p>\n")]);
}

#[test]
fn forged_placeholder_triggers_retry() {
    let input = "{{t}} @@0<!-- -->@@_0_@@0<!-- -->@@ x";
    let doc = parse_document(input, &ParseOptions::default()).unwrap();
    assert_eq!(doc.separator.token(), "@@1@@");
    assert_eq!(
        doc.blocks,
        vec![
            Block::text("<p>"),
            Block::template(Some("t".into()), ""),
            Block::text(" @@0@@_0_@@0@@ x\n</p>\n"),
        ]
    );
}

#[test]
fn separator_budget_is_enforced() {
    let options = ParseOptions {
        separator_attempts: 2,
        ..ParseOptions::default()
    };
    let err = parse_document("@@0@@ @@1@@", &options).unwrap_err();
    assert!(matches!(err, ParseError::SeparatorCollision { attempts: 2 }));

    let options = ParseOptions {
        separator_attempts: 1,
        ..ParseOptions::default()
    };
    let err = parse_document("@@<!-- -->0@@", &options).unwrap_err();
    assert!(matches!(err, ParseError::SeparatorCollision { attempts: 1 }));
}

#[test]
fn skipped_blocks_keep_their_index() {
    let blocks = parse("== A ==\n== B ==\n").unwrap();
    let kinds: Vec<_> = blocks.iter().map(|b| (b.kind, b.skip)).collect();
    assert_eq!(
        kinds,
        vec![
            (BlockKind::Text, true),
            (BlockKind::Header, false),
            (BlockKind::Text, true),
            (BlockKind::Header, false),
            (BlockKind::Text, false),
        ]
    );
}

#[test]
fn isbns_register_after_their_lines_global_tags() {
    let doc = parse_document("isbn 1 {{t}}\n[[L]]", &ParseOptions::default()).unwrap();
    let kinds: Vec<_> = doc
        .blocks
        .iter()
        .filter(|b| b.kind != BlockKind::Text)
        .map(|b| b.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![BlockKind::Isbn, BlockKind::Template, BlockKind::Link]
    );
    assert_eq!(doc.extracted, 3);
    assert_eq!(doc.order, vec![1, 0, 2]);
    snapshot::invariants(&doc);
}

#[test]
#[should_panic(expected = "do not cover")]
fn lost_placeholder_breaks_invariants() {
    let mut doc = parse_document("a {{t}} b", &ParseOptions::default()).unwrap();
    doc.blocks.remove(1);
    doc.order.clear();
    snapshot::invariants(&doc);
}

#[rstest]
#[case("[[{{", 0)]
#[case("{{\n", 0)]
#[case("<!--[[", 0)]
#[case("[[a]]", 100_000)]
fn long_lines_parse_in_linear_time(#[case] unit: &str, #[case] extracted: usize) {
    // rescanning to the end of input per token took minutes at this size
    let input = unit.repeat(100_000);
    let started = std::time::Instant::now();
    let doc = parse_document(&input, &ParseOptions::default()).unwrap();
    let elapsed = started.elapsed();
    assert!(
        elapsed < std::time::Duration::from_secs(5),
        "{} bytes took {elapsed:?}",
        input.len()
    );
    assert_eq!(doc.extracted, extracted);
}

// Property tests

const FRAGMENTS: &[&str] = &[
    "\n", "''", "'''", "'''''", "<b>", "</i>", "<br>", "<p>", "</p>", "<center>",
    "isbn 12-3", "{{", "}}", "[[", "]]", "<nowiki>", "</nowiki>", "<!--", "-->", "==",
    "=", "\n* ", "\n# ", "\n**", "\n:", "\n;", "\n ", "\n----", "@@", "0", "_", "<",
    ">", "\r",
];

fn wiki_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{1,6}",
        prop::sample::select(FRAGMENTS).prop_map(str::to_owned),
    ]
}

fn wiki_text() -> impl Strategy<Value = String> {
    prop::collection::vec(wiki_fragment(), 0..60).prop_map(|parts| parts.concat())
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// `<ul>` and `<ol>` are counted together: a changed outer list marker
// closes the list with the other tag
fn assert_balanced(html: &str) {
    assert_eq!(count(html, "<p>"), count(html, "</p>"), "{html:?}");
    assert_eq!(count(html, "<b>"), count(html, "</b>"), "{html:?}");
    assert_eq!(count(html, "<i>"), count(html, "</i>"), "{html:?}");
    assert_eq!(
        count(html, "<ul>") + count(html, "<ol>"),
        count(html, "</ul>") + count(html, "</ol>"),
        "{html:?}"
    );
}

proptest! {
    #[test]
    fn any_input_parses_to_well_formed_blocks(input in wiki_text()) {
        for options in [
            ParseOptions::default(),
            with(HeaderMode::Line, CommentMode::Block),
        ] {
            let doc = parse_document(&input, &options).unwrap();
            snapshot::invariants(&doc);
        }
    }

    #[test]
    fn formatting_is_balanced_and_stays_balanced_on_reparse(input in wiki_text()) {
        let first = text_of(&parse(&input).unwrap());
        assert_balanced(&first);
        let second = text_of(&parse(&first).unwrap());
        assert_balanced(&second);
    }

    #[test]
    fn plain_text_escapes_only_angle_brackets(input in "[ac-hj-oq-z][ac-hj-oq-z <>&\"]{0,40}") {
        let blocks = parse(&input).unwrap();
        let escaped = input.replace('<', "&lt;").replace('>', "&gt;");
        prop_assert_eq!(blocks, vec![Block::text(format!("<p>{escaped}\n</p>\n"))]);
    }

    #[test]
    fn every_template_resolves_once_in_order(
        names in prop::collection::vec("[a-z]{1,8}", 1..12),
    ) {
        let input: String = names.iter().map(|n| format!("x {{{{{n}}}}} ")).collect();
        let opcodes: Vec<_> = parse(&input)
            .unwrap()
            .into_iter()
            .filter(|b| b.kind == BlockKind::Template)
            .map(|b| b.opcode.unwrap_or_default())
            .collect();
        prop_assert_eq!(opcodes, names);
    }
}
