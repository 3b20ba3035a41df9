use crate::models::CollectionInfo;
use crate::surface::{HeaderSurface, NavControl};

/// Stateful facade over the fixed header region.
///
/// Owns the visibility stack used to bracket browsing sessions: every
/// `save_and_hide` is matched by exactly one `restore`, so stack depth
/// returns to its pre-session value after a session closes. Nav controls
/// whose capability flag is absent in [`CollectionInfo`] are removed from the
/// surface at construction and never dispatch.
pub struct HeaderController<H: HeaderSurface> {
    surface: H,
    visible: bool,
    saved: Vec<bool>,
    handler: Option<Box<dyn FnMut(NavControl) + Send>>,
    can_prev: bool,
    can_next: bool,
    can_exit: bool,
}

impl<H: HeaderSurface> HeaderController<H> {
    pub fn new(mut surface: H, info: &CollectionInfo) -> Self {
        let can_prev = info.prev.is_some();
        let can_next = info.next.is_some();
        let can_exit = info.exit.is_some();

        if surface.has_nav_region() {
            for (present, control) in [
                (can_prev, NavControl::Prev),
                (can_next, NavControl::Next),
                (can_exit, NavControl::Exit),
            ] {
                if !present {
                    surface.remove_nav_control(control);
                }
            }
        }

        Self {
            surface,
            visible: false,
            saved: Vec::new(),
            handler: None,
            can_prev,
            can_next,
            can_exit,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.surface.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.surface.set_visible(false);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Pushes the current visibility and hides the header.
    pub fn save_and_hide(&mut self) {
        self.saved.push(self.visible);
        self.hide();
    }

    /// Pops the saved visibility; shows the header only if it was visible
    /// when saved. Unbalanced calls are ignored.
    pub fn restore(&mut self) {
        match self.saved.pop() {
            Some(true) => self.show(),
            Some(false) => {}
            None => tracing::warn!("Header restore without matching save"),
        }
    }

    /// Renders the collection title, forcing the header visible. A surface
    /// without a title container renders nothing; the show still happens.
    pub fn set_title(&mut self, text: &str) {
        self.surface.render_title(text);
        self.show();
    }

    pub fn set_date(&mut self, text: &str) {
        self.surface.render_date(text);
        self.show();
    }

    /// Height the header currently contributes above the grid.
    pub fn height(&self) -> f32 {
        self.surface.rendered_height()
    }

    /// Attaches a handler for clicks on the present nav controls. No-op when
    /// the surface has no nav region at all.
    pub fn bind_navigation<F>(&mut self, handler: F)
    where
        F: FnMut(NavControl) + Send + 'static,
    {
        if !self.surface.has_nav_region() {
            tracing::debug!("No nav region present, skipping navigation binding");
            return;
        }
        self.handler = Some(Box::new(handler));
    }

    /// Routes a click on a nav control to the bound handler. Controls whose
    /// capability was absent at construction never dispatch.
    pub fn nav_clicked(&mut self, control: NavControl) {
        let present = match control {
            NavControl::Prev => self.can_prev,
            NavControl::Next => self.can_next,
            NavControl::Exit => self.can_exit,
        };
        if !present {
            return;
        }
        if let Some(handler) = self.handler.as_mut() {
            handler(control);
        }
    }

    #[cfg(test)]
    pub(crate) fn stack_depth(&self) -> usize {
        self.saved.len()
    }
}

impl<H: HeaderSurface> std::fmt::Debug for HeaderController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderController")
            .field("visible", &self.visible)
            .field("saved", &self.saved)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeHeader {
        visible: bool,
        nav_region: bool,
        removed: Vec<NavControl>,
        title: Option<String>,
        date: Option<String>,
    }

    impl HeaderSurface for FakeHeader {
        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
        fn rendered_height(&self) -> f32 {
            if self.visible {
                48.0
            } else {
                0.0
            }
        }
        fn render_title(&mut self, text: &str) {
            self.title = Some(text.to_string());
        }
        fn render_date(&mut self, text: &str) {
            self.date = Some(text.to_string());
        }
        fn has_nav_region(&self) -> bool {
            self.nav_region
        }
        fn remove_nav_control(&mut self, control: NavControl) {
            self.removed.push(control);
        }
    }

    fn info_with_next() -> CollectionInfo {
        CollectionInfo {
            next: Some("album-2".to_string()),
            ..CollectionInfo::default()
        }
    }

    #[test]
    fn test_save_and_restore_round_trips_visibility() {
        let mut header = HeaderController::new(FakeHeader::default(), &CollectionInfo::default());
        header.set_title("Holidays");
        assert!(header.is_visible());

        header.save_and_hide();
        assert!(!header.is_visible());
        assert_eq!(header.stack_depth(), 1);

        header.restore();
        assert!(header.is_visible());
        assert_eq!(header.stack_depth(), 0);
    }

    #[test]
    fn test_restore_keeps_hidden_when_saved_hidden() {
        let mut header = HeaderController::new(FakeHeader::default(), &CollectionInfo::default());
        header.save_and_hide();
        header.restore();
        assert!(!header.is_visible());
    }

    #[test]
    fn test_unbalanced_restore_is_harmless() {
        let mut header = HeaderController::new(FakeHeader::default(), &CollectionInfo::default());
        header.restore();
        assert!(!header.is_visible());
        assert_eq!(header.stack_depth(), 0);
    }

    #[test]
    fn test_absent_capabilities_removed_at_construction() {
        let surface = FakeHeader {
            nav_region: true,
            ..FakeHeader::default()
        };
        let header = HeaderController::new(surface, &info_with_next());
        assert_eq!(
            header.surface.removed,
            vec![NavControl::Prev, NavControl::Exit]
        );
    }

    #[test]
    fn test_click_dispatches_only_present_controls() {
        let surface = FakeHeader {
            nav_region: true,
            ..FakeHeader::default()
        };
        let mut header = HeaderController::new(surface, &info_with_next());

        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = Arc::clone(&hits);
        header.bind_navigation(move |control| {
            assert_eq!(control, NavControl::Next);
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        header.nav_clicked(NavControl::Next);
        header.nav_clicked(NavControl::Prev);
        header.nav_clicked(NavControl::Exit);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_nav_region_makes_binding_a_noop() {
        let mut header = HeaderController::new(FakeHeader::default(), &info_with_next());
        header.bind_navigation(|_| panic!("must never dispatch without a nav region"));
        header.nav_clicked(NavControl::Next);
    }

    #[test]
    fn test_height_follows_visibility() {
        let mut header = HeaderController::new(FakeHeader::default(), &CollectionInfo::default());
        assert_eq!(header.height(), 0.0);
        header.set_date("2019-07-14");
        assert_eq!(header.height(), 48.0);
    }
}
