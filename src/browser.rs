use tokio::sync::oneshot;

use crate::debounce::Debouncer;
use crate::error::GalleryError;
use crate::geometry::{contain_fit, Rect, Size};
use crate::header::HeaderController;
use crate::keys::Key;
use crate::models::{CollectionInfo, MediaItem, MediaType};
use crate::surface::{HeaderSurface, RenderSurface};

/// Number of horizontal click bands inside the browser region.
const CLICK_BANDS: u32 = 3;

/// Navigational actions inside an open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVerb {
    Prev,
    Next,
    First,
    Last,
    Exit,
}

/// What a dispatched event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Switched to a different item
    Moved(usize),
    /// Nothing changed (saturated at an end, or a no-op key)
    Unchanged,
    /// The session closed; the owner must drop it
    Exited,
}

/// For a region of `width` split into `bands` equal strips, the strip that
/// `pos` falls into. May return `bands` for `pos == width`; callers treat
/// out-of-range bands as a miss.
pub fn hit_band(bands: u32, width: f32, pos: f32) -> u32 {
    if width <= 0.0 || bands == 0 {
        return 0;
    }
    (pos / (width / bands as f32)).floor().max(0.0) as u32
}

/// Saturating index arithmetic for `navigate`; None means exit.
fn target_index(verb: NavVerb, current: usize, len: usize) -> Option<usize> {
    match verb {
        NavVerb::Prev => Some(current.saturating_sub(1)),
        NavVerb::Next => Some((current + 1).min(len - 1)),
        NavVerb::First => Some(0),
        NavVerb::Last => Some(len - 1),
        NavVerb::Exit => None,
    }
}

/// Single-item full-viewport browsing session.
///
/// Exists only while open; the gallery controller creates it on a grid click
/// and drops it once an event returns [`NavOutcome::Exited`]. All rendering
/// side effects go through the surfaces passed into each call, so the session
/// itself holds nothing but its state, the overlay-resize debouncer and the
/// completion sender.
pub struct BrowserSession {
    index: usize,
    media_type: MediaType,
    natural: Option<Size>,
    overlay: Option<Rect>,
    overlay_resize: Debouncer,
    done: Option<oneshot::Sender<()>>,
}

impl BrowserSession {
    /// Opens a session at `index`. Side effects in order: hide the grid, lock
    /// scrolling, show the browser region, save-and-hide the header, mount
    /// the typed view element, set the caption, compute overlay geometry
    /// (deferred while the natural size is unknown). `overlay_resize` is the
    /// already-wired debouncer for viewport resizes during the session.
    pub(crate) fn open<S, H>(
        index: usize,
        items: &[MediaItem],
        info: &CollectionInfo,
        surface: &mut S,
        header: &mut HeaderController<H>,
        overlay_resize: Debouncer,
    ) -> Result<(Self, oneshot::Receiver<()>), GalleryError>
    where
        S: RenderSurface,
        H: HeaderSurface,
    {
        let Some(item) = items.get(index) else {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        };
        tracing::info!(index, name = %item.name, "Opening browser session");

        surface.set_grid_visible(false);
        surface.set_scroll_locked(true);
        surface.set_browser_visible(true);
        header.save_and_hide();

        surface.mount_view(item.media_type, &item.name);
        surface.set_caption(info.caption_for(&item.name));

        let (done_tx, done_rx) = oneshot::channel();
        let mut session = Self {
            index,
            media_type: item.media_type,
            natural: natural_size_of(item),
            overlay: None,
            overlay_resize,
            done: Some(done_tx),
        };
        session.refresh_overlay(surface);
        Ok((session, done_rx))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn overlay(&self) -> Option<Rect> {
        self.overlay
    }

    /// Re-arms the debounced overlay recompute; called by the owner on every
    /// viewport resize while the session is open.
    pub(crate) fn resize_occurred(&self) {
        self.overlay_resize.trigger();
    }

    /// Switches to item `m`. Same media type keeps the view element and swaps
    /// its source; a differing type replaces the element. Caption and overlay
    /// geometry are recomputed either way.
    fn switch_to<S>(
        &mut self,
        m: usize,
        items: &[MediaItem],
        info: &CollectionInfo,
        surface: &mut S,
    ) where
        S: RenderSurface,
    {
        let item = &items[m];
        tracing::debug!(from = self.index, to = m, "Switching browser item");

        if item.media_type != self.media_type {
            surface.remove_view();
            surface.mount_view(item.media_type, &item.name);
        } else {
            surface.set_view_source(&item.name);
        }

        self.index = m;
        self.media_type = item.media_type;
        self.natural = natural_size_of(item);
        surface.set_caption(info.caption_for(&item.name));
        self.refresh_overlay(surface);
    }

    /// Applies a navigational verb with saturation at both ends. A target
    /// equal to the current index is a no-op; `Exit` always closes.
    pub(crate) fn navigate<S, H>(
        &mut self,
        verb: NavVerb,
        items: &[MediaItem],
        info: &CollectionInfo,
        surface: &mut S,
        header: &mut HeaderController<H>,
    ) -> NavOutcome
    where
        S: RenderSurface,
        H: HeaderSurface,
    {
        match target_index(verb, self.index, items.len()) {
            None => {
                self.close(surface, header);
                NavOutcome::Exited
            }
            Some(m) if m == self.index => NavOutcome::Unchanged,
            Some(m) => {
                self.switch_to(m, items, info, surface);
                NavOutcome::Moved(m)
            }
        }
    }

    /// Keyboard dispatch while the session is open. Every key listed here is
    /// consumed; anything else is swallowed without effect, since no other
    /// handler may run during a session.
    pub(crate) fn handle_key<S, H>(
        &mut self,
        key: Key,
        items: &[MediaItem],
        info: &CollectionInfo,
        surface: &mut S,
        header: &mut HeaderController<H>,
    ) -> NavOutcome
    where
        S: RenderSurface,
        H: HeaderSurface,
    {
        let verb = match key {
            Key::ArrowLeft | Key::ArrowUp => NavVerb::Prev,
            Key::ArrowRight | Key::ArrowDown => NavVerb::Next,
            Key::Home => NavVerb::First,
            Key::End => NavVerb::Last,
            Key::Escape => NavVerb::Exit,
            Key::Enter => return NavOutcome::Unchanged,
        };
        self.navigate(verb, items, info, surface, header)
    }

    /// Mouse dispatch: the region splits into three equal bands mapping to
    /// prev / exit / next. Video elements keep their native controls, so
    /// clicks on them are never intercepted.
    pub(crate) fn handle_click<S, H>(
        &mut self,
        x: f32,
        items: &[MediaItem],
        info: &CollectionInfo,
        surface: &mut S,
        header: &mut HeaderController<H>,
    ) -> NavOutcome
    where
        S: RenderSurface,
        H: HeaderSurface,
    {
        if self.media_type == MediaType::Video {
            return NavOutcome::Unchanged;
        }
        let width = surface.viewport_size().width;
        let verb = match hit_band(CLICK_BANDS, width, x) {
            0 => NavVerb::Prev,
            1 => NavVerb::Exit,
            2 => NavVerb::Next,
            _ => return NavOutcome::Unchanged,
        };
        self.navigate(verb, items, info, surface, header)
    }

    /// Completes the deferred overlay computation once the host learns the
    /// displayed item's natural dimensions.
    pub(crate) fn metadata_ready<S>(&mut self, width: u32, height: u32, surface: &mut S)
    where
        S: RenderSurface,
    {
        if width == 0 || height == 0 {
            return;
        }
        self.natural = Some(Size::new(width as f32, height as f32));
        self.refresh_overlay(surface);
    }

    /// Recomputes the contain-fit rectangle for the current item against the
    /// current viewport and repositions the caption. Video items carry no
    /// image overlay; any placement left over from an image is cleared.
    pub(crate) fn refresh_overlay<S>(&mut self, surface: &mut S)
    where
        S: RenderSurface,
    {
        if self.media_type == MediaType::Video {
            self.overlay = None;
            surface.clear_caption_placement();
            return;
        }
        match self
            .natural
            .and_then(|natural| contain_fit(surface.viewport_size(), natural))
        {
            Some(rect) => {
                self.overlay = Some(rect);
                surface.place_caption(rect);
            }
            None => {
                tracing::debug!(
                    index = self.index,
                    "Natural size unknown, deferring overlay geometry"
                );
                self.overlay = None;
            }
        }
    }

    /// Tears the session down. The pending overlay-resize timer is cancelled
    /// first, before the view element goes away, so a stale recompute can
    /// never fire against a torn-down view.
    pub(crate) fn close<S, H>(&mut self, surface: &mut S, header: &mut HeaderController<H>)
    where
        S: RenderSurface,
        H: HeaderSurface,
    {
        tracing::info!(index = self.index, "Closing browser session");
        self.overlay_resize.cancel();

        surface.set_caption("");
        surface.clear_caption_placement();
        surface.remove_view();
        surface.set_scroll_locked(false);
        surface.set_browser_visible(false);
        surface.set_grid_visible(true);
        header.restore();

        if let Some(done) = self.done.take() {
            // The receiver may already be gone; that only means nobody awaits.
            let _ = done.send(());
        }
    }
}

impl std::fmt::Debug for BrowserSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserSession")
            .field("index", &self.index)
            .field("media_type", &self.media_type)
            .field("overlay", &self.overlay)
            .finish()
    }
}

fn natural_size_of(item: &MediaItem) -> Option<Size> {
    item.natural_size()
        .map(|(w, h)| Size::new(w as f32, h as f32))
}
