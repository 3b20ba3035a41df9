use crate::layout::{LayoutBox, LayoutConfig, LayoutResult, Packer};

/// Justified row packer.
///
/// Streams items left-to-right into rows; a row is closed once scaling it to
/// the full padded width would bring its height at or below the target row
/// height, and every closed row is scaled to fill the width exactly. The
/// trailing row keeps its natural width, capped at the target height.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowPacker;

impl RowPacker {
    fn sane_ratio(ratio: f32) -> f32 {
        if ratio.is_finite() && ratio > 0.0 {
            ratio.clamp(0.05, 20.0)
        } else {
            1.0
        }
    }

    /// Row height when `ratios` are scaled to exactly span `avail` width
    /// with `spacing` between adjacent boxes.
    fn justified_height(ratios: &[f32], avail: f32, spacing: f32) -> f32 {
        let gaps = spacing * ratios.len().saturating_sub(1) as f32;
        let sum: f32 = ratios.iter().sum();
        ((avail - gaps) / sum).max(1.0)
    }

    fn flush_row(
        boxes: &mut Vec<LayoutBox>,
        ratios: &[f32],
        top: f32,
        left0: f32,
        height: f32,
        spacing: f32,
    ) {
        let mut left = left0;
        for &ratio in ratios {
            let width = (height * ratio).max(1.0);
            boxes.push(LayoutBox {
                top,
                left,
                width,
                height,
            });
            left += width + spacing;
        }
    }
}

impl Packer for RowPacker {
    fn pack(&self, aspect_ratios: &[f32], config: &LayoutConfig) -> LayoutResult {
        let container_width = config.container_width;
        if aspect_ratios.is_empty() || container_width <= 0.0 {
            return LayoutResult::empty(container_width.max(0.0));
        }

        let padding = config.container_padding.max(0.0);
        let spacing = config.box_spacing.max(0.0);
        let target = config.target_row_height.max(1.0);
        let avail = (container_width - 2.0 * padding).max(1.0);

        let mut boxes = Vec::with_capacity(aspect_ratios.len());
        let mut top = padding;
        let mut row: Vec<f32> = Vec::new();

        for &ratio in aspect_ratios {
            row.push(Self::sane_ratio(ratio));
            let height = Self::justified_height(&row, avail, spacing);
            if height <= target {
                Self::flush_row(&mut boxes, &row, top, padding, height, spacing);
                top += height + spacing;
                row.clear();
            }
        }

        // Trailing partial row: natural width at up-to-target height, never
        // stretched to the container edge.
        if !row.is_empty() {
            let height = Self::justified_height(&row, avail, spacing).min(target);
            Self::flush_row(&mut boxes, &row, top, padding, height, spacing);
            top += height + spacing;
        }

        let container_height = top - spacing + padding;
        LayoutResult {
            boxes,
            container_width,
            container_height,
        }
    }
}
