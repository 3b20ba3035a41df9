//! Core of a responsive justified media gallery: the browsing-session state
//! machine, the overlay-geometry engine and the layout orchestration that
//! recomputes box placement on resize.
//!
//! The crate is headless. Rendering, the header region and page-level
//! navigation are reached through the traits in [`surface`]; hosts feed
//! resize, click and keyboard events into [`gallery::GalleryController`] and
//! apply the resulting element operations however they draw.

pub mod browser;
pub mod debounce;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod header;
pub mod keys;
pub mod layout;
pub mod models;
pub mod surface;

pub use browser::{hit_band, BrowserSession, NavOutcome, NavVerb};
pub use debounce::Debouncer;
pub use error::GalleryError;
pub use gallery::GalleryController;
pub use geometry::{contain_fit, Rect, Size};
pub use header::HeaderController;
pub use keys::Key;
pub use layout::{LayoutBox, LayoutConfig, LayoutEngine, LayoutResult, Packer, RowPacker};
pub use models::{CollectionInfo, MediaItem, MediaType};
pub use surface::{CollectionNavigator, HeaderSurface, NavControl, RenderSurface};
