//! Line kinds with their owned prefix characters.
//!
//! Each kind exposes an `apply` taking the line (which may run on past its
//! newline) and returning the bytes consumed.

pub mod definition;
pub mod heading;
pub mod indent;
pub mod list;
pub mod paragraph;
pub mod preformatted;
pub mod rule;

pub use definition::Definition;
pub use heading::Heading;
pub use indent::Indent;
pub use list::List;
pub use paragraph::Paragraph;
pub use preformatted::Preformatted;
pub use rule::HorizontalRule;
