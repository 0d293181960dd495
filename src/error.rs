use thiserror::Error;

/// Errors raised by the document model.
#[derive(Error, Debug)]
pub enum FolioError {
    /// The requested page index falls outside `[0, page_count)`.
    ///
    /// Carries the rejected index and the page count at the time of the
    /// call. The display text is the stable part of the contract; the
    /// fields are for programmatic inspection.
    #[error("Page index out of bounds")]
    PageIndexOutOfBounds(usize, usize),
}

pub type Result<T> = std::result::Result<T, FolioError>;
