//! Boundaries to the host: rendering, the header region, and page-level
//! navigation. The core decides *what* happens and *when*; how elements are
//! actually drawn or how a sibling collection is reached stays external.

use crate::geometry::{Rect, Size};
use crate::models::MediaType;

/// Navigation controls that may exist in the header's nav sub-region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    Prev,
    Next,
    Exit,
}

/// Render boundary. The core creates/destroys/positions opaque visual
/// elements of two kinds (image, video) through this trait; input events
/// travel the other way, as calls into the controller.
pub trait RenderSurface: Send {
    /// Current viewport dimensions in pixels.
    fn viewport_size(&self) -> Size;

    /// Creates the grid element for one item, tagged with its index. Called
    /// once per item at startup.
    fn create_grid_item(&mut self, index: usize, media_type: MediaType, source: &str);

    /// Positions an existing grid element.
    fn place_grid_item(&mut self, index: usize, rect: Rect);

    /// Applies the packed container height to the grid region.
    fn set_grid_height(&mut self, height: f32);

    fn set_grid_visible(&mut self, visible: bool);

    fn set_browser_visible(&mut self, visible: bool);

    /// Locks or unlocks outer document scrolling while browsing.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Mounts the single browser view element. At most one view element
    /// exists at a time; the session removes the old one before mounting a
    /// different type.
    fn mount_view(&mut self, media_type: MediaType, source: &str);

    /// Swaps the source of the mounted view, preserving element identity.
    fn set_view_source(&mut self, source: &str);

    /// Removes the mounted view element, if any.
    fn remove_view(&mut self);

    fn set_caption(&mut self, text: &str);

    /// Positions the caption box over the contain-fitted media rectangle.
    fn place_caption(&mut self, rect: Rect);

    /// Drops any caption placement tied to a previous image overlay.
    fn clear_caption_placement(&mut self);
}

/// The fixed header region. The nav sub-region may be entirely absent, in
/// which case every nav-related call is a silent no-op.
pub trait HeaderSurface: Send {
    fn set_visible(&mut self, visible: bool);

    /// Height the header currently occupies, 0 when hidden.
    fn rendered_height(&self) -> f32;

    fn render_title(&mut self, text: &str);

    fn render_date(&mut self, text: &str);

    /// Whether a nav sub-region exists at all.
    fn has_nav_region(&self) -> bool;

    /// Removes one nav control from the region (capability absent).
    fn remove_nav_control(&mut self, control: NavControl);
}

/// Page-level navigation boundary: full collection changes, typically a page
/// redirect. The core only decides when to call it.
pub trait CollectionNavigator: Send {
    fn open_collection(&mut self, target: &str);
}
