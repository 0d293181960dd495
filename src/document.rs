use crate::error::{FolioError, Result};
use crate::page::{BlankSurfaceFactory, Page, SurfaceFactory};
use crate::structure::{Orientation, PageFormat, Structure};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, warn};

/// A paginated document combining metadata, a layout structure, and an
/// ordered sequence of page placeholders.
///
/// # Example
///
/// ```rust
/// use folio::{Document, DocumentMetadata, PageFormat};
///
/// let mut doc = Document::new(DocumentMetadata::new("My Document"));
/// doc.set_author("John Doe");
/// doc.set_format(PageFormat::Letter);
///
/// doc.add_page();
/// assert_eq!(doc.page_count(), 2);
/// ```
pub struct Document {
    pub(crate) pages: Vec<Page>,
    pub(crate) metadata: DocumentMetadata,
    // Stored structure excludes the page count, which is derived from
    // `pages` at read time.
    pub(crate) format: PageFormat,
    pub(crate) orientation: Orientation,
    factory: Box<dyn SurfaceFactory>,
}

/// Metadata for a document.
///
/// Only the title is required; every other field starts absent. The
/// keyword set is created lazily on first insertion and holds unique
/// values in no particular order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DocumentMetadata {
    /// Document title
    pub title: String,
    /// Document author
    pub author: Option<String>,
    /// A brief description of the document
    pub description: Option<String>,
    /// Keywords associated with the document
    pub keywords: Option<HashSet<String>>,
    /// Date and time the document was created
    pub creation_date: Option<DateTime<Utc>>,
}

impl DocumentMetadata {
    /// Creates metadata with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            description: None,
            keywords: None,
            creation_date: None,
        }
    }

    /// Sets the author, builder style.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the description, builder style.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the keyword set, builder style.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the creation date, builder style.
    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }
}

impl Document {
    /// Creates a document with the default structure (one A4 portrait
    /// page) and blank placeholder surfaces.
    pub fn new(metadata: DocumentMetadata) -> Self {
        Self::with_factory(metadata, Structure::default(), Box::new(BlankSurfaceFactory))
    }

    /// Creates a document with an explicit structure configuration.
    ///
    /// `structure.number_of_pages` sizes the initial page sequence, with a
    /// floor of one page. The requested count is not retained afterwards;
    /// [`structure`](Self::structure) always derives the count from the
    /// live sequence.
    pub fn with_structure(metadata: DocumentMetadata, structure: Structure) -> Self {
        Self::with_factory(metadata, structure, Box::new(BlankSurfaceFactory))
    }

    /// Creates a document whose page surfaces come from `factory`.
    ///
    /// The factory is invoked once per initial page and once per page
    /// appended later.
    pub fn with_factory(
        metadata: DocumentMetadata,
        structure: Structure,
        factory: Box<dyn SurfaceFactory>,
    ) -> Self {
        let initial_pages = structure.number_of_pages.max(1);
        let pages = (0..initial_pages)
            .map(|_| Page::new(factory.create_surface()))
            .collect();
        debug!(title = %metadata.title, pages = initial_pages, "created document");
        Self {
            pages,
            metadata,
            format: structure.format,
            orientation: structure.orientation,
            factory,
        }
    }

    /// Returns the document's metadata.
    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Returns the document's metadata for in-place mutation.
    pub fn metadata_mut(&mut self) -> &mut DocumentMetadata {
        &mut self.metadata
    }

    /// Sets the document title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = title.into();
    }

    /// Sets the document author.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.metadata.author = Some(author.into());
    }

    /// Sets the document description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.metadata.description = Some(description.into());
    }

    /// Sets the document creation date.
    pub fn set_creation_date(&mut self, date: DateTime<Utc>) {
        self.metadata.creation_date = Some(date);
    }

    /// Adds keywords to the document's metadata.
    ///
    /// Initializes the keyword set on first use; duplicates are absorbed
    /// by set semantics.
    pub fn add_keywords<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = self.metadata.keywords.get_or_insert_with(HashSet::new);
        for keyword in keywords {
            set.insert(keyword.into());
        }
    }

    /// Returns the document's structure, including the current page count.
    ///
    /// The count is derived from the live page sequence at the time of the
    /// call, never cached.
    pub fn structure(&self) -> Structure {
        Structure {
            number_of_pages: self.page_count(),
            format: self.format,
            orientation: self.orientation,
        }
    }

    /// Sets the document's page format.
    pub fn set_format(&mut self, format: PageFormat) {
        self.format = format;
    }

    /// Sets the document's page orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Gets the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Read-only view of the page sequence.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Appends one page to the document.
    pub fn add_page(&mut self) {
        self.add_pages(1);
    }

    /// Appends `count` pages to the document.
    ///
    /// A count of zero is a no-op. There is no upper bound.
    pub fn add_pages(&mut self, count: usize) {
        for _ in 0..count {
            self.pages.push(Page::new(self.factory.create_surface()));
        }
        debug!(added = count, total = self.pages.len(), "appended pages");
    }

    /// Deletes the page at the given zero-based index, shifting later
    /// pages down by one position.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::PageIndexOutOfBounds`] when `index` falls
    /// outside the current sequence. The sequence is untouched on error.
    pub fn delete_page(&mut self, index: usize) -> Result<()> {
        if index >= self.pages.len() {
            warn!(index, page_count = self.pages.len(), "rejected page deletion");
            return Err(FolioError::PageIndexOutOfBounds(index, self.pages.len()));
        }
        self.pages.remove(index);
        debug!(index, remaining = self.pages.len(), "deleted page");
        Ok(())
    }
}
