pub mod extract;
pub mod meta;
pub mod sections;
pub mod text;

// Pipeline per page: markdown → sections (→ subsections) → metadata / PDF
// split → slug + preview → records. Everything in here is pure.
pub use extract::{projects, publications, zen};
