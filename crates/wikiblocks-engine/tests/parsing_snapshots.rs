use wikiblocks_engine::{
    CommentMode, HeaderMode, ParseOptions,
    parsing::{parse_document, snapshot},
    render,
};

#[test]
fn fixture_article() {
    insta::assert_snapshot!(fixture("article", &ParseOptions::default()), @r#"
    0 text skip "<p></p>\n"
    1 header(2) "History"
    2 text "\n<p>The <b>city</b> was founded in <i>1200</i>.\n</p>\n<ul><li> first\n</li><li> second\n</li></ul>\n"
    "#);
}

#[test]
fn fixture_templates() {
    insta::assert_snapshot!(fixture("templates", &ParseOptions::default()), @r#"
    0 text "<p>"
    1 curly[infobox] "| name = Rome"
    2 text "\nRome is in "
    3 link "Italy"
    4 text ".\n</p>\n"
    "#);
}

#[test]
fn fixture_structure() {
    insta::assert_snapshot!(fixture("structure", &ParseOptions::default()), @r#"0 text "<p>intro\n</p>\n<hr />\n<pre>code <i>here</i>\nmore\n</pre>\n<dl><dt> term </dt><dd> definition</dd></dl>\n<dl><dd> indented</dd></dl>\n<ol><li> one\n<ol><li> two\n</li></ol>\n</li></ol>\n""#);
}

#[test]
fn fixture_line_mode() {
    let options = ParseOptions {
        headers: HeaderMode::Line,
        comments: CommentMode::Block,
        ..ParseOptions::default()
    };
    insta::assert_snapshot!(fixture("line_mode", &options), @r#"
    0 text "<h1> Top </h1>\n<p>text "
    1 comment " hidden "
    2 text " more\n</p>\n"
    "#);
}

#[test]
fn fixture_article_renders_to_html() {
    let doc = parse_document(&read_fixture("article"), &ParseOptions::default()).unwrap();
    insta::assert_snapshot!(render::html(&doc.blocks), @r"
    <h2>History</h2>
    <p>The <b>city</b> was founded in <i>1200</i>.
    </p>
    <ul><li> first
    </li><li> second
    </li></ul>
    ");
}

#[test]
fn fixture_templates_debug_listing() {
    let doc = parse_document(&read_fixture("templates"), &ParseOptions::default()).unwrap();
    insta::assert_snapshot!(render::debug_listing(&doc.blocks), @r"
    { type => 'text', content => '<p>' }
    { type => 'curly', content => '| name = Rome' }
    { type => 'text', content => '\nRome is in ' }
    { type => 'link', content => 'Italy' }
    { type => 'text', content => '.\n</p>\n' }
    ");
}

/// Every fixture yields the same blocks whatever line-ending convention the
/// file was saved with.
#[test]
fn fixtures_survive_crlf() {
    for name in ["article", "templates", "structure"] {
        let lf = read_fixture(name);
        let crlf = lf.replace('\n', "\r\n");
        let options = ParseOptions::default();
        assert_eq!(
            parse_document(&lf, &options).unwrap(),
            parse_document(&crlf, &options).unwrap(),
            "{name}"
        );
    }
}

fn read_fixture(name: &str) -> String {
    // normalise checkouts that rewrote line endings
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.wiki",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
    .replace("\r\n", "\n")
}

fn fixture(name: &str, options: &ParseOptions) -> String {
    let doc = parse_document(&read_fixture(name), options).unwrap();
    snapshot::invariants(&doc);
    snapshot::normalize(&doc.blocks)
}
