/// What a global tag turns into once extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalKind {
    /// `<nowiki>...</nowiki>`
    NoWiki,
    /// `<!-- ... -->`
    Comment,
    /// `{{...}}`
    Template,
    /// `[[...]]`
    Link,
    /// `=`..`====` headings, with their level.
    Header(u8),
}

/// Matching constraints for a global tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleFlags {
    /// Without an end token anywhere in the remaining input the rule is skipped.
    pub requires_end: bool,
    /// The end token must sit on the same physical line as the start token.
    pub same_line: bool,
    /// Close any open paragraph before the placeholder.
    pub breaks_paragraph: bool,
    /// Only match at the first character of a line.
    pub line_start: bool,
}

impl RuleFlags {
    pub const OPTIONAL_END: Self = Self {
        requires_end: false,
        same_line: false,
        breaks_paragraph: false,
        line_start: false,
    };
    pub const PAIRED: Self = Self {
        requires_end: true,
        ..Self::OPTIONAL_END
    };
    pub const PAIRED_SAME_LINE: Self = Self {
        same_line: true,
        ..Self::PAIRED
    };
    pub const HEADING: Self = Self {
        breaks_paragraph: true,
        line_start: true,
        ..Self::PAIRED_SAME_LINE
    };
}

/// A block-level construct: start token, end token and the kind it produces.
#[derive(Debug, PartialEq, Eq)]
pub struct GlobalRule {
    pub start: &'static str,
    pub end: &'static str,
    pub flags: RuleFlags,
    pub kind: GlobalKind,
}

impl GlobalRule {
    pub fn is_header(&self) -> bool {
        matches!(self.kind, GlobalKind::Header(_))
    }
}

/// Every global rule in precedence order.
///
/// Order matters for tokens sharing a prefix: longer heading runs come first.
pub static GLOBAL_RULES: &[GlobalRule] = &[
    GlobalRule {
        start: "<nowiki>",
        end: "</nowiki>",
        flags: RuleFlags::OPTIONAL_END,
        kind: GlobalKind::NoWiki,
    },
    GlobalRule {
        start: "<!--",
        end: "-->",
        flags: RuleFlags::PAIRED,
        kind: GlobalKind::Comment,
    },
    GlobalRule {
        start: "{{",
        end: "}}",
        flags: RuleFlags::PAIRED,
        kind: GlobalKind::Template,
    },
    GlobalRule {
        start: "[[",
        end: "]]",
        flags: RuleFlags::PAIRED_SAME_LINE,
        kind: GlobalKind::Link,
    },
    GlobalRule {
        start: "====",
        end: "====",
        flags: RuleFlags::HEADING,
        kind: GlobalKind::Header(4),
    },
    GlobalRule {
        start: "===",
        end: "===",
        flags: RuleFlags::HEADING,
        kind: GlobalKind::Header(3),
    },
    GlobalRule {
        start: "==",
        end: "==",
        flags: RuleFlags::HEADING,
        kind: GlobalKind::Header(2),
    },
    GlobalRule {
        start: "=",
        end: "=",
        flags: RuleFlags::HEADING,
        kind: GlobalKind::Header(1),
    },
];
