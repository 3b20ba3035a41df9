use thiserror::Error;

/// Failures surfaced by the gallery core. Configuration gaps (missing
/// captions, nav region, adjacency flags) never reach this type; they degrade
/// to "feature absent" instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    /// A browsing session is already open; only one may exist at a time.
    #[error("a browsing session is already open")]
    AlreadyBrowsing,

    /// No browsing session is open to operate on.
    #[error("no browsing session is open")]
    NotBrowsing,

    /// A session was requested at an index outside the item list.
    #[error("item index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
