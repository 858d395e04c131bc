//! Scroll bookkeeping shared by scrollable lists.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::tui::style::Theme;

/// Fraction of a viewport that counts as "near the end" of a list.
pub const END_REACHED_THRESHOLD: f32 = 0.5;

/// Precomputed scrolling metrics for a list viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	/// Total number of rows in the content.
	pub content_length: usize,
	/// Number of rows visible in the viewport.
	pub viewport_len: usize,
	/// Maximum scroll offset.
	pub max_scroll: usize,
	/// Whether content overflows and needs a scrollbar.
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Compute metrics from content length and viewport height.
	///
	/// Returns default (empty) metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length).max(1);
		let max_scroll = content_length.saturating_sub(viewport_len);
		let needs_scrollbar = content_length > viewport_len;

		Self {
			content_length,
			viewport_len,
			max_scroll,
			needs_scrollbar,
		}
	}

	/// Rows between the bottom of the viewport and the end of the content.
	#[must_use]
	pub fn distance_from_end(&self, offset: usize) -> usize {
		self.content_length
			.saturating_sub(offset.saturating_add(self.viewport_len))
	}

	/// Whether the viewport sits within `threshold` viewports of the end.
	#[must_use]
	pub fn is_near_end(&self, offset: usize, threshold: f32) -> bool {
		if self.content_length == 0 {
			return false;
		}
		#[allow(clippy::cast_precision_loss)]
		let distance = self.distance_from_end(offset) as f32;
		#[allow(clippy::cast_precision_loss)]
		let window = self.viewport_len as f32 * threshold;
		distance < window
	}

	/// Convert a scroll offset into a scrollbar position.
	#[must_use]
	pub fn scrollbar_position(&self, scroll: usize) -> usize {
		if self.max_scroll == 0 || self.content_length == 0 {
			0
		} else {
			scroll.saturating_mul(self.content_length.saturating_sub(1)) / self.max_scroll
		}
	}
}

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Render a themed vertical scrollbar on the right edge of `area`.
///
/// Returns the area left for content.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	metrics: ScrollMetrics,
	offset: usize,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(Style::default().fg(theme.header.fg.unwrap_or(ratatui::style::Color::Reset)));

	let mut state = ScrollbarState::new(metrics.content_length)
		.viewport_content_length(metrics.viewport_len)
		.position(metrics.scrollbar_position(offset));

	let bar = Rect {
		x: area.x + area.width.saturating_sub(1),
		y: area.y,
		width: 1,
		height: area.height,
	};
	frame.render_stateful_widget(scrollbar, bar, &mut state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn metrics_for_overflowing_list() {
		let metrics = ScrollMetrics::compute(30, 10);
		assert_eq!(metrics.viewport_len, 10);
		assert_eq!(metrics.max_scroll, 20);
		assert!(metrics.needs_scrollbar);
		assert_eq!(metrics.scrollbar_position(20), 29);
	}

	#[test]
	fn near_end_uses_half_a_viewport() {
		let metrics = ScrollMetrics::compute(30, 10);
		assert!(!metrics.is_near_end(0, END_REACHED_THRESHOLD));
		// 30 - (15 + 10) = 5 rows left, not below half a viewport.
		assert!(!metrics.is_near_end(15, END_REACHED_THRESHOLD));
		assert!(metrics.is_near_end(16, END_REACHED_THRESHOLD));
		assert!(metrics.is_near_end(20, END_REACHED_THRESHOLD));
	}

	#[test]
	fn short_list_is_always_at_the_end() {
		let metrics = ScrollMetrics::compute(4, 10);
		assert!(metrics.is_near_end(0, END_REACHED_THRESHOLD));
		assert!(!ScrollMetrics::default().is_near_end(0, END_REACHED_THRESHOLD));
	}

	#[test]
	fn point_hit_testing() {
		let area = Rect::new(2, 2, 3, 3);
		assert!(point_in_rect(2, 2, area));
		assert!(point_in_rect(4, 4, area));
		assert!(!point_in_rect(5, 4, area));
		assert!(!point_in_rect(0, 0, Rect::default()));
	}
}
