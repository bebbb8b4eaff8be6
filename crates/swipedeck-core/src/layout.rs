//! Pixel layout math for the carousel track
//!
//! Derives item width, stride, reachable index range and drag bounds from the
//! container measurements. A geometry is an immutable value: hosts recompute
//! it on resize and hand the new value to the controller.

use crate::config::{EdgeResistance, LayoutConfig};

/// Raw measurements and layout settings supplied by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInputs {
    /// Measured container width in px (0 while unmeasured)
    pub container_width: f64,
    /// Items visible at once (at least 1)
    pub columns: usize,
    pub gap: f64,
    pub horizontal_padding: f64,
    /// Pixels of the next item left visible
    pub peek_amount: f64,
}

impl LayoutInputs {
    pub fn from_config(config: &LayoutConfig, container_width: f64) -> Self {
        Self {
            container_width,
            columns: config.columns.max(1) as usize,
            gap: config.gap,
            horizontal_padding: config.horizontal_padding,
            peek_amount: config.peek_amount,
        }
    }

    /// Width available to items once the padding is removed
    #[inline]
    pub fn visible_area(&self) -> f64 {
        self.container_width - self.horizontal_padding * 2.0
    }
}

/// Permissible range for the track position while dragging
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragBounds {
    /// Most negative position (last item aligned)
    pub min: f64,
    /// Always 0 (first item aligned)
    pub max: f64,
}

impl DragBounds {
    /// Limit a raw drag position to the bounds, rubber-banding past them
    pub fn constrain(&self, position: f64, resistance: EdgeResistance) -> f64 {
        let (edge, overshoot) = if position > self.max {
            (self.max, position - self.max)
        } else if position < self.min {
            (self.min, position - self.min)
        } else {
            return position;
        };

        match resistance.pull() {
            Some((max_pull, factor)) => {
                let pull = (overshoot.abs() * factor).min(max_pull);
                edge + pull.copysign(overshoot)
            }
            None => edge,
        }
    }
}

/// Derived carousel geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselGeometry {
    pub inputs: LayoutInputs,
    pub total_items: usize,
    /// Width of a regular item; 0 means the layout is not ready
    pub item_width: f64,
    /// Distance between the leading edges of adjacent items
    pub item_stride: f64,
    /// Highest index the track can rest on
    pub max_index: usize,
    pub drag_bounds: DragBounds,
}

impl Default for CarouselGeometry {
    fn default() -> Self {
        Self::compute(
            LayoutInputs {
                container_width: 0.0,
                columns: 1,
                gap: 0.0,
                horizontal_padding: 0.0,
                peek_amount: 0.0,
            },
            0,
        )
    }
}

impl CarouselGeometry {
    pub fn compute(inputs: LayoutInputs, total_items: usize) -> Self {
        let columns = inputs.columns.max(1);
        let inputs = LayoutInputs { columns, ..inputs };

        let item_width = if inputs.container_width > 0.0 && inputs.container_width.is_finite() {
            let total_gap_space = (columns - 1) as f64 * inputs.gap;
            let width = (inputs.visible_area() - total_gap_space - inputs.peek_amount)
                / columns as f64;
            width.max(0.0)
        } else {
            0.0
        };

        let item_stride = item_width + inputs.gap;
        let max_index = total_items.saturating_sub(columns);

        let drag_bounds = if max_index > 0 && item_width > 0.0 {
            let total_content_width = item_stride * total_items as f64 - inputs.gap;
            let travel = total_content_width - inputs.visible_area() + inputs.peek_amount;
            DragBounds {
                min: (-travel).min(0.0),
                max: 0.0,
            }
        } else {
            DragBounds::default()
        };

        Self {
            inputs,
            total_items,
            item_width,
            item_stride,
            max_index,
            drag_bounds,
        }
    }

    /// Whether the container has been measured to a usable width
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.item_width > 0.0
    }

    /// Zero or one item: nothing to navigate between
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.total_items <= 1
    }

    /// Track position at which `index` rests
    #[inline]
    pub fn position_for(&self, index: usize) -> f64 {
        -(index as f64) * self.item_stride
    }

    /// Clamp a signed index into `[0, max_index]`
    #[inline]
    pub fn clamp_index(&self, index: i64) -> usize {
        index.clamp(0, self.max_index as i64) as usize
    }

    /// Rendered width of the item at `index`
    ///
    /// The last item absorbs the trailing reserved space so the track ends
    /// flush with the padding boundary.
    pub fn final_item_width(&self, index: usize) -> f64 {
        let inputs = &self.inputs;
        if self.total_items > 0 && index == self.total_items - 1 && inputs.peek_amount > 0.0 {
            self.item_width + inputs.peek_amount + inputs.gap - inputs.horizontal_padding
        } else {
            self.item_width
        }
    }
}
