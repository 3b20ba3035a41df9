#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "webp" | "gif" | "bmp" | "tiff" | "tif" => Some(Self::Image),
            "webm" | "mp4" | "mkv" | "avi" | "mov" => Some(Self::Video),
            _ => None,
        }
    }
}

/// One entry of the gallery. The full ordered list is supplied once at
/// startup and never mutated; `width`/`height` are the natural pixel
/// dimensions used as aspect-ratio hints for layout. A zero dimension means
/// the host has not finished loading metadata yet.
#[derive(Debug, Clone)]
pub struct MediaItem {
    /// Resource locator understood by the render surface
    pub name: String,
    pub media_type: MediaType,
    pub width: u32,
    pub height: u32,
}

impl MediaItem {
    pub fn new(name: impl Into<String>, media_type: MediaType, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            media_type,
            width,
            height,
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Check if this is a video item
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Natural dimensions, or None while metadata is still unknown
    pub fn natural_size(&self) -> Option<(u32, u32)> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some((self.width, self.height))
        }
    }
}
