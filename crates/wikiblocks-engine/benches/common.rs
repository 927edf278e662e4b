// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_wiki_content(size: usize) -> String {
    let base = "== Section ==\n\nParagraph with '''bold''', ''italic'' and a [[Main Page|link]].\n\n* Bullet point\n** Nested item\n* Another item\n\n{{cite web|url=http://example.com}} see isbn 0-123-45678-9\n\n preformatted line\n second line\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_lists(items: usize, depth: usize) -> String {
    let mut content = String::new();
    for i in 0..items {
        let marker = if i % 2 == 0 { '*' } else { '#' };
        let level = i % depth + 1;
        content.push_str(&marker.to_string().repeat(level));
        content.push_str(&format!(" item {i} with <b>markup</b>\n"));
    }
    content
}

#[allow(dead_code)]
pub fn generate_template_heavy(templates: usize) -> String {
    (0..templates)
        .map(|i| format!("{{{{infobox{i}\n| name = x\n| value = {i}\n}}}} <!-- note {i} -->\n"))
        .collect()
}
