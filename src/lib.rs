//! # folio
//!
//! An in-memory model of paginated documents: descriptive metadata, a
//! structural layout, and an ordered sequence of opaque page surfaces.
//!
//! ## Features
//!
//! - **Metadata**: title, author, description, unique keywords, creation date
//! - **Structure**: page format (A4, A3, Letter, Legal) and orientation
//!   (portrait, landscape, square), with the page count derived from the
//!   live page sequence
//! - **Page management**: append and delete page placeholders with
//!   bounds-checked removal
//! - **Pluggable surfaces**: page surfaces come from an injected factory,
//!   keeping the model decoupled from any rendering environment
//! - **Serde support**: optional serialization of metadata and structure
//!   records behind the `serde` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::{Document, DocumentMetadata, Orientation, PageFormat, Structure};
//!
//! # fn main() -> folio::Result<()> {
//! // Describe the document
//! let metadata = DocumentMetadata::new("Sample").with_author("Paul G.");
//!
//! // Lay it out: ten landscape Legal pages
//! let mut doc = Document::with_structure(
//!     metadata,
//!     Structure {
//!         number_of_pages: 10,
//!         format: PageFormat::Legal,
//!         orientation: Orientation::Landscape,
//!     },
//! );
//!
//! doc.add_keywords(["sample", "document"]);
//! doc.delete_page(1)?;
//! assert_eq!(doc.page_count(), 9);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`document`] - Document creation, metadata, and page management
//! - [`structure`] - Page format, orientation, and layout records
//! - [`page`] - Page placeholders and the surface-factory seam
//! - [`error`] - Error and result types

pub mod document;
pub mod error;
pub mod page;
pub mod structure;

pub use document::{Document, DocumentMetadata};
pub use error::{FolioError, Result};
pub use page::{BlankSurface, BlankSurfaceFactory, Page, Surface, SurfaceFactory};
pub use structure::{Orientation, PageFormat, Structure};

/// Current version of folio
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_default_document() {
        let doc = Document::new(DocumentMetadata::new("Untitled"));
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
    }
}
