/// Viewport or media dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle, origin at the top-left of its containing region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Computes the "contain"-fit rectangle of media with natural size `natural`
/// inside `viewport`: the largest rectangle with the media's aspect ratio
/// that fits entirely within the viewport, centered on the axis with slack.
///
/// Returns None when either size has a zero or non-finite dimension, which
/// happens while media metadata is still loading; callers defer and recompute
/// once the natural size is known.
pub fn contain_fit(viewport: Size, natural: Size) -> Option<Rect> {
    if viewport.is_degenerate() || natural.is_degenerate() {
        return None;
    }

    let vp_aspect = viewport.width / viewport.height;
    let media_aspect = natural.width / natural.height;
    let ratio = vp_aspect / media_aspect;

    let rect = if ratio < 1.0 {
        // Viewport is relatively narrower than the media: width fills,
        // height is letterboxed.
        let height = viewport.height * ratio;
        Rect::new(0.0, (viewport.height - height) / 2.0, viewport.width, height)
    } else if ratio > 1.0 {
        let width = viewport.width / ratio;
        Rect::new((viewport.width - width) / 2.0, 0.0, width, viewport.height)
    } else {
        Rect::new(0.0, 0.0, viewport.width, viewport.height)
    };
    Some(rect)
}
