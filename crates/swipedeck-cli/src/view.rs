use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use swipedeck_core::{CarouselGeometry, NavigationController};

/// Horizontal px represented by one terminal column
pub const PX_PER_CELL: f64 = 8.0;

/// Container width in px for a terminal of `columns` cells
pub fn track_width(columns: u16) -> f64 {
    columns as f64 * PX_PER_CELL
}

/// The carousel track at its live position, one bordered box per item
pub struct CarouselView<'a> {
    geometry: &'a CarouselGeometry,
    position: f64,
    current_index: usize,
}

impl<'a> CarouselView<'a> {
    pub fn new(controller: &'a NavigationController) -> Self {
        Self {
            geometry: controller.geometry(),
            position: controller.position(),
            current_index: controller.current_index(),
        }
    }
}

impl Widget for CarouselView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let geometry = self.geometry;
        if !geometry.is_ready() {
            Paragraph::new("Terminal too narrow for the configured padding and peek")
                .render(area, buf);
            return;
        }

        let origin = geometry.inputs.horizontal_padding + self.position;
        for index in 0..geometry.total_items {
            let left = origin + index as f64 * geometry.item_stride;
            let right = left + geometry.final_item_width(index);
            let Some(rect) = clip(area, left, right) else {
                continue;
            };

            let style = if index == self.current_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(format!(" {} ", index + 1))
                .render(rect, buf);
        }
    }
}

/// Cells covered by the px span `[left, right)`, if at least two are visible
fn clip(area: Rect, left: f64, right: f64) -> Option<Rect> {
    let x0 = ((left / PX_PER_CELL).round() as i64).max(0);
    let x1 = ((right / PX_PER_CELL).round() as i64).min(area.width as i64);
    if x1 - x0 < 2 {
        return None;
    }
    Some(Rect::new(
        area.x + x0 as u16,
        area.y,
        (x1 - x0) as u16,
        area.height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(clip(area, 16.0, 96.0), Some(Rect::new(2, 0, 10, 10)));
        // Partially scrolled off the left edge
        assert_eq!(clip(area, -40.0, 40.0), Some(Rect::new(0, 0, 5, 10)));
        // Past the right edge
        assert_eq!(clip(area, 400.0, 480.0), None);
        // Sliver too thin to draw a border
        assert_eq!(clip(area, 312.0, 328.0), None);
    }

    #[test]
    fn test_track_width() {
        assert_eq!(track_width(80), 640.0);
    }
}
