use crate::parsing::{
    ParsedDoc, is_empty_paragraph,
    refs::{Block, BlockKind},
};

/// Panics if `doc` breaks any structural rule of parser output.
pub fn check(doc: &ParsedDoc) {
    let token = doc.separator.token();
    for (i, block) in doc.blocks.iter().enumerate() {
        check_block(i, block);
        if block.kind == BlockKind::Text {
            assert!(
                !block.text.contains(token),
                "block {i}: separator {token} leaked into text {:?}",
                block.text
            );
        }
    }
    check_placeholders(doc);
}

/// Every registered block comes back exactly once. Global tags and ISBNs
/// are registered in document order, but a line's ISBNs only after its
/// global tags, so each group is ordered on its own.
fn check_placeholders(doc: &ParsedDoc) {
    let extracted: Vec<&Block> = doc
        .blocks
        .iter()
        .filter(|b| b.kind != BlockKind::Text)
        .collect();
    assert_eq!(
        extracted.len(),
        doc.order.len(),
        "{} non-text blocks for {} placeholders",
        extracted.len(),
        doc.order.len()
    );
    let mut indices = doc.order.clone();
    indices.sort_unstable();
    assert!(
        indices.iter().copied().eq(0..doc.extracted),
        "placeholders {:?} do not cover the {} extracted blocks once each",
        doc.order,
        doc.extracted
    );
    for isbn in [false, true] {
        let group: Vec<usize> = extracted
            .iter()
            .zip(&doc.order)
            .filter(|(block, _)| (block.kind == BlockKind::Isbn) == isbn)
            .map(|(_, &index)| index)
            .collect();
        assert!(
            group.is_sorted(),
            "placeholders out of registration order: {group:?}"
        );
    }
}

fn check_block(i: usize, block: &Block) {
    assert_ne!(block.kind, BlockKind::Unknown, "block {i}: unknown kind");
    match block.kind {
        BlockKind::Header => assert!(
            (1..=4).contains(&block.level),
            "block {i}: header level {} out of range",
            block.level
        ),
        _ => assert_eq!(block.level, 0, "block {i}: level on non-header"),
    }
    if block.kind != BlockKind::Template {
        assert!(block.opcode.is_none(), "block {i}: opcode on non-template");
    }
    if matches!(block.kind, BlockKind::Header | BlockKind::Link) {
        assert!(
            !block.text.is_empty() && block.text.trim_matches(' ') == block.text,
            "block {i}: untrimmed or empty {:?}",
            block.text
        );
    }
    if block.kind == BlockKind::Isbn {
        assert!(
            block.text.starts_with(|c: char| c.is_ascii_digit()) && !block.text.contains('-'),
            "block {i}: malformed isbn {:?}",
            block.text
        );
    }
    let elidable = block.kind == BlockKind::Text && is_empty_paragraph(&block.text);
    assert_eq!(block.skip, elidable, "block {i}: skip flag mismatch {block:?}");
}
