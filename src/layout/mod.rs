mod justified;

pub use justified::RowPacker;

use crate::models::MediaItem;

/// Options forwarded to the packer. `container_width` is overwritten with the
/// live viewport width on every [`LayoutEngine::compute`] call; the remaining
/// fields are caller-supplied and default to the stock gallery values.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Gap between adjacent boxes in pixels
    pub box_spacing: f32,
    /// Inset on the container edge in pixels
    pub container_padding: f32,
    /// Row height the packer aims for in pixels
    pub target_row_height: f32,
    /// Full container width in pixels; always equals the current viewport width
    pub container_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            box_spacing: 5.0,
            container_padding: 10.0,
            target_row_height: 220.0,
            container_width: 0.0,
        }
    }
}

/// Placement of a single item within the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

/// Output of one packing pass. Derived data only: always recomputed from the
/// current item list and viewport width, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub boxes: Vec<LayoutBox>,
    pub container_width: f32,
    pub container_height: f32,
}

impl LayoutResult {
    pub fn empty(container_width: f32) -> Self {
        Self {
            boxes: Vec::new(),
            container_width,
            container_height: 0.0,
        }
    }
}

/// The box-packing algorithm boundary. The engine supplies well-formed input
/// (sanitized per-item aspect ratios, a complete config) and consumes the
/// boxes; it never reimplements the packing.
pub trait Packer: Send {
    fn pack(&self, aspect_ratios: &[f32], config: &LayoutConfig) -> LayoutResult;
}

/// Thin adapter in front of the packer: maps items to aspect ratios and pins
/// the config's `container_width` to the viewport width of each call.
pub struct LayoutEngine {
    packer: Box<dyn Packer>,
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            packer: Box::new(RowPacker),
            config,
        }
    }

    pub fn with_packer(config: LayoutConfig, packer: Box<dyn Packer>) -> Self {
        Self { packer, config }
    }

    pub fn compute(&self, items: &[MediaItem], viewport_width: f32) -> LayoutResult {
        let mut config = self.config;
        config.container_width = viewport_width;

        let ratios: Vec<f32> = items.iter().map(MediaItem::aspect_ratio).collect();
        self.packer.pack(&ratios, &config)
    }
}

impl std::fmt::Debug for LayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("config", &self.config)
            .finish()
    }
}
