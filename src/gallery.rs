use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::browser::{BrowserSession, NavOutcome};
use crate::debounce::Debouncer;
use crate::error::GalleryError;
use crate::geometry::Rect;
use crate::header::HeaderController;
use crate::keys::Key;
use crate::layout::{LayoutConfig, LayoutEngine};
use crate::models::{CollectionInfo, MediaItem};
use crate::surface::{CollectionNavigator, HeaderSurface, NavControl, RenderSurface};

/// Debounce delay for grid relayout on resize.
const GRID_RESIZE_DEBOUNCE: Duration = Duration::from_millis(300);
/// Debounce delay for overlay geometry recompute while browsing.
const OVERLAY_RESIZE_DEBOUNCE: Duration = Duration::from_millis(50);

struct Inner<S, H>
where
    S: RenderSurface,
    H: HeaderSurface,
{
    items: Vec<MediaItem>,
    info: CollectionInfo,
    engine: LayoutEngine,
    surface: S,
    header: HeaderController<H>,
    session: Option<BrowserSession>,
    viewport_width: f32,
}

impl<S, H> Inner<S, H>
where
    S: RenderSurface,
    H: HeaderSurface,
{
    /// Recomputes box placement from current truth and applies it, shifting
    /// every box down by the header's rendered height so the grid never sits
    /// under a visible header.
    fn relayout(&mut self) {
        let width = self.surface.viewport_size().width;
        self.viewport_width = width;

        let layout = self.engine.compute(&self.items, width);
        let header_offset = self.header.height();
        for (index, b) in layout.boxes.iter().enumerate() {
            self.surface
                .place_grid_item(index, Rect::new(b.left, b.top + header_offset, b.width, b.height));
        }
        self.surface
            .set_grid_height(layout.container_height + header_offset);
        tracing::debug!(
            width,
            boxes = layout.boxes.len(),
            container_height = layout.container_height,
            "Grid relayout"
        );
    }

    /// Debounced resize path: skipped while a session owns the viewport and
    /// when the width did not actually change.
    fn resize_relayout(&mut self) {
        if self.session.is_some() {
            return;
        }
        if self.surface.viewport_size().width == self.viewport_width {
            return;
        }
        self.relayout();
    }

    /// Post-close bookkeeping: the header may have reappeared, so vertical
    /// offsets must be recomputed unconditionally.
    fn finish_session(&mut self) {
        self.session = None;
        self.relayout();
    }
}

/// Top-level orchestrator: owns the item list, the layout engine, the header
/// controller and the browsing-session lifecycle, and routes resize, click
/// and keyboard events between them.
///
/// All methods take `&self`; state lives behind a mutex so the debounced
/// timer actions can reach it from the runtime.
pub struct GalleryController<S, H, N>
where
    S: RenderSurface,
    H: HeaderSurface,
    N: CollectionNavigator,
{
    inner: Arc<Mutex<Inner<S, H>>>,
    navigator: Arc<Mutex<N>>,
    grid_resize: Debouncer,
}

impl<S, H, N> GalleryController<S, H, N>
where
    S: RenderSurface + 'static,
    H: HeaderSurface + 'static,
    N: CollectionNavigator + 'static,
{
    /// Builds the grid (one typed, index-tagged element per item), renders
    /// header texts, prunes and binds navigation controls, and computes the
    /// initial layout.
    pub fn new(
        items: Vec<MediaItem>,
        info: CollectionInfo,
        config: LayoutConfig,
        mut surface: S,
        header_surface: H,
        navigator: N,
    ) -> Self {
        let navigator = Arc::new(Mutex::new(navigator));

        let mut header = HeaderController::new(header_surface, &info);
        if let Some(title) = &info.title {
            header.set_title(title);
        }
        if let Some(date) = &info.date {
            header.set_date(date);
        }
        {
            let nav = Arc::clone(&navigator);
            let (prev, next, exit) = (info.prev.clone(), info.next.clone(), info.exit.clone());
            header.bind_navigation(move |control| {
                let target = match control {
                    NavControl::Prev => prev.as_deref(),
                    NavControl::Next => next.as_deref(),
                    NavControl::Exit => exit.as_deref(),
                };
                if let Some(target) = target {
                    nav.lock().open_collection(target);
                }
            });
        }

        for (index, item) in items.iter().enumerate() {
            surface.create_grid_item(index, item.media_type, &item.name);
        }

        let viewport_width = surface.viewport_size().width;
        let inner = Arc::new(Mutex::new(Inner {
            items,
            info,
            engine: LayoutEngine::new(config),
            surface,
            header,
            session: None,
            viewport_width,
        }));
        inner.lock().relayout();

        let weak = Arc::downgrade(&inner);
        let grid_resize = Debouncer::new(GRID_RESIZE_DEBOUNCE, move || {
            if let Some(inner) = weak.upgrade() {
                inner.lock().resize_relayout();
            }
        });

        Self {
            inner,
            navigator,
            grid_resize,
        }
    }

    /// Viewport resize notification. While a session is open only its overlay
    /// geometry is recomputed (debounced); otherwise the grid relayout timer
    /// is re-armed.
    pub fn resize_occurred(&self) {
        let inner = self.inner.lock();
        match &inner.session {
            Some(session) => session.resize_occurred(),
            None => self.grid_resize.trigger(),
        }
    }

    /// Forces an immediate layout recompute.
    pub fn relayout(&self) {
        self.inner.lock().relayout();
    }

    /// Click on the grid. `target` is the index tag of the clicked element,
    /// None for background clicks. Background, video elements and clicks
    /// while a session is already open are ignored. On success the returned
    /// receiver resolves once the session closes.
    pub fn grid_clicked(&self, target: Option<usize>) -> Option<oneshot::Receiver<()>> {
        let target = target?;
        {
            let inner = self.inner.lock();
            if inner.session.is_some() {
                tracing::debug!("Ignoring grid click while browsing");
                return None;
            }
            match inner.items.get(target) {
                Some(item) if item.is_video() => return None,
                Some(_) => {}
                None => {
                    tracing::warn!(target, "Grid click with out-of-range index tag");
                    return None;
                }
            }
        }
        self.open_browser(target).ok()
    }

    /// Opens a browsing session at `index`. Fails when one is already open or
    /// the index is out of range; the receiver resolves on close.
    pub fn open_browser(&self, index: usize) -> Result<oneshot::Receiver<()>, GalleryError> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        if inner.session.is_some() {
            tracing::warn!("Rejecting browser open: session already active");
            return Err(GalleryError::AlreadyBrowsing);
        }

        let weak = Arc::downgrade(&self.inner);
        let overlay_resize = Debouncer::new(OVERLAY_RESIZE_DEBOUNCE, move || {
            if let Some(inner) = weak.upgrade() {
                let mut guard = inner.lock();
                let inner = &mut *guard;
                if let Some(session) = inner.session.as_mut() {
                    session.refresh_overlay(&mut inner.surface);
                }
            }
        });

        let (session, done_rx) = BrowserSession::open(
            index,
            &inner.items,
            &inner.info,
            &mut inner.surface,
            &mut inner.header,
            overlay_resize,
        )?;
        inner.session = Some(session);
        Ok(done_rx)
    }

    /// Keyboard routing. While a session is open the session consumes every
    /// key; otherwise arrows move between sibling collections, Escape exits
    /// to the parent and Enter starts browsing at the first item. Returns
    /// whether the key was consumed.
    pub fn handle_key(&self, key: Key) -> bool {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        if let Some(session) = inner.session.as_mut() {
            let outcome = session.handle_key(
                key,
                &inner.items,
                &inner.info,
                &mut inner.surface,
                &mut inner.header,
            );
            if outcome == NavOutcome::Exited {
                inner.finish_session();
            }
            return true;
        }

        match key {
            Key::ArrowRight => {
                if let Some(target) = inner.info.next.clone() {
                    self.navigator.lock().open_collection(&target);
                }
                true
            }
            Key::ArrowLeft => {
                if let Some(target) = inner.info.prev.clone() {
                    self.navigator.lock().open_collection(&target);
                }
                true
            }
            Key::Escape => {
                if let Some(target) = inner.info.exit.clone() {
                    self.navigator.lock().open_collection(&target);
                }
                true
            }
            Key::Enter => {
                if !inner.items.is_empty() {
                    drop(guard);
                    // Receiver intentionally dropped; close bookkeeping is
                    // internal and keyboard hosts have nothing to await.
                    let _ = self.open_browser(0);
                }
                true
            }
            _ => false,
        }
    }

    /// Click inside the open browser region at horizontal offset `x`.
    pub fn browser_clicked(&self, x: f32) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        if let Some(session) = inner.session.as_mut() {
            let outcome = session.handle_click(
                x,
                &inner.items,
                &inner.info,
                &mut inner.surface,
                &mut inner.header,
            );
            if outcome == NavOutcome::Exited {
                inner.finish_session();
            }
        }
    }

    /// Click on a header nav control.
    pub fn nav_clicked(&self, control: NavControl) {
        self.inner.lock().header.nav_clicked(control);
    }

    /// Natural dimensions of the currently displayed item became known;
    /// completes any deferred overlay computation.
    pub fn media_metadata_ready(&self, width: u32, height: u32) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        if let Some(session) = inner.session.as_mut() {
            session.metadata_ready(width, height, &mut inner.surface);
        }
    }

    pub fn is_browsing(&self) -> bool {
        self.inner.lock().session.is_some()
    }

    /// Index of the item shown by the open session, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.inner.lock().session.as_ref().map(|s| s.index())
    }
}

impl<S, H, N> std::fmt::Debug for GalleryController<S, H, N>
where
    S: RenderSurface,
    H: HeaderSurface,
    N: CollectionNavigator,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryController")
            .field("browsing", &self.inner.lock().session.is_some())
            .finish()
    }
}
