//! Page placeholders and the rendering-surface seam.
//!
//! The document model is content-agnostic: a page only needs a backing
//! surface to exist and a position in the document's page sequence. Where
//! that surface comes from is the hosting environment's business, so
//! surface creation sits behind a pluggable factory trait.
//!
//! # Example
//!
//! ```rust
//! use folio::{BlankSurfaceFactory, SurfaceFactory};
//!
//! let factory = BlankSurfaceFactory::new();
//! let surface = factory.create_surface();
//! println!("created {:?}", surface);
//! ```

use std::fmt;

/// An opaque rendering surface backing a single page.
///
/// No drawing operations are modeled here. Hosting environments implement
/// this for their concrete surface type (a raster canvas, a display list,
/// a print context).
pub trait Surface: fmt::Debug + Send {}

/// Produces one surface per page on demand.
///
/// A document invokes its factory once per page at construction and once
/// per appended page. Implementations must not fail: handing out a
/// placeholder is infallible by contract.
pub trait SurfaceFactory: Send {
    /// Create a fresh surface for a new page.
    fn create_surface(&self) -> Box<dyn Surface>;
}

/// A surface with no backing environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankSurface;

impl Surface for BlankSurface {}

/// Factory producing [`BlankSurface`] placeholders.
///
/// This is the default factory used by [`Document::new`] and
/// [`Document::with_structure`], and a convenient stand-in for tests.
///
/// [`Document::new`]: crate::Document::new
/// [`Document::with_structure`]: crate::Document::with_structure
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankSurfaceFactory;

impl BlankSurfaceFactory {
    /// Create a new blank surface factory
    pub fn new() -> Self {
        Self
    }
}

impl SurfaceFactory for BlankSurfaceFactory {
    fn create_surface(&self) -> Box<dyn Surface> {
        Box::new(BlankSurface)
    }
}

/// A single page in a document.
///
/// Pages are placeholders: each owns exactly one rendering surface and is
/// identified only by its position in the owning document's sequence.
#[derive(Debug)]
pub struct Page {
    surface: Box<dyn Surface>,
}

impl Page {
    pub(crate) fn new(surface: Box<dyn Surface>) -> Self {
        Self { surface }
    }

    /// The surface backing this page.
    pub fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }
}
