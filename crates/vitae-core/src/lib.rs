//! vitae-core - form state, templating, and PDF export for the CV builder
//!
//! This crate provides the working half of the vitae CV builder on top of
//! the types in `vitae-domain`:
//!
//! - **Store**: ordered, id-addressed list stores for every résumé section,
//!   mutated through tagged single-field updates
//! - **Publications**: the compound store holding both publication entry
//!   modes behind a shared mode flag
//! - **Builder**: the top-level coordinator owning all section state and
//!   composing the `ResumeData` snapshot
//! - **Format**: the date/citation formatting contract shared by all
//!   templates
//! - **Templates**: three interchangeable layout strategies producing Typst
//!   documents
//! - **Render**: Typst-based PDF compilation (requires the `typst-render`
//!   feature; a stub renderer is used otherwise)
//! - **Photo**: data-URL encoding for the profile photo
//! - **Export**: the validation-gated export flow producing the named PDF
//!   artifact

pub mod builder;
pub mod export;
pub mod format;
pub mod photo;
pub mod publications;
pub mod render;
pub mod store;
pub mod templates;

pub use builder::*;
pub use export::*;
pub use format::*;
pub use photo::*;
pub use publications::*;
pub use render::*;
pub use store::*;
pub use templates::*;
