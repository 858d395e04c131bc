//! Modal bottom sheet with percentage snap points.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use tracing::info;

use crate::tui::style::Theme;

/// Snap points used when none are configured, in percent of screen height.
pub const DEFAULT_SNAP_POINTS: [u16; 2] = [25, 70];
/// Snap point the sheet opens at by default.
pub const DEFAULT_INITIAL_INDEX: usize = 1;

const HANDLE: &str = "───";

/// Bottom-anchored sheet that snaps between fixed heights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottomSheet {
	snap_points: Vec<u16>,
	initial_index: usize,
	index: Option<usize>,
}

impl Default for BottomSheet {
	fn default() -> Self {
		Self::new(DEFAULT_SNAP_POINTS.to_vec(), DEFAULT_INITIAL_INDEX)
	}
}

impl BottomSheet {
	/// Create a closed sheet.
	///
	/// Percentages are clamped to `1..=100`; an empty list falls back to the
	/// default snap points and `initial_index` is clamped into range.
	pub fn new(snap_points: Vec<u16>, initial_index: usize) -> Self {
		let mut snap_points: Vec<u16> = snap_points
			.into_iter()
			.map(|percent| percent.clamp(1, 100))
			.collect();
		if snap_points.is_empty() {
			snap_points = DEFAULT_SNAP_POINTS.to_vec();
		}
		let initial_index = initial_index.min(snap_points.len() - 1);
		Self {
			snap_points,
			initial_index,
			index: None,
		}
	}

	#[must_use]
	pub fn snap_points(&self) -> &[u16] {
		&self.snap_points
	}

	/// Current snap index, `None` while closed.
	#[must_use]
	pub fn index(&self) -> Option<usize> {
		self.index
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.index.is_some()
	}

	/// Open at the initial snap point. No-op when already open.
	pub fn present(&mut self) {
		if self.index.is_none() {
			self.set_index(Some(self.initial_index));
		}
	}

	pub fn close(&mut self) {
		self.set_index(None);
	}

	/// Move to the next taller snap point.
	pub fn snap_up(&mut self) {
		if let Some(index) = self.index {
			let last = self.snap_points.len() - 1;
			self.set_index(Some((index + 1).min(last)));
		}
	}

	/// Move to the next shorter snap point, closing from the lowest one.
	pub fn snap_down(&mut self) {
		match self.index {
			Some(0) => self.set_index(None),
			Some(index) => self.set_index(Some(index - 1)),
			None => {}
		}
	}

	fn set_index(&mut self, index: Option<usize>) {
		if self.index == index {
			return;
		}
		self.index = index;
		match index {
			Some(index) => info!(index, percent = self.snap_points[index], "sheet changed"),
			None => info!(index = -1, "sheet changed"),
		}
	}

	/// Bottom-anchored area for the current snap point.
	#[must_use]
	pub fn area(&self, screen: Rect) -> Option<Rect> {
		let percent = self.snap_points[self.index?];
		let height = (u32::from(screen.height) * u32::from(percent) / 100).max(1);
		let height = u16::try_from(height).unwrap_or(screen.height).min(screen.height);
		Some(Rect {
			x: screen.x,
			y: screen.bottom() - height,
			width: screen.width,
			height,
		})
	}

	/// Draw the sheet over `screen` and return the area left for its content.
	pub fn render(&self, frame: &mut Frame, screen: Rect, theme: &Theme) -> Option<Rect> {
		let area = self.area(screen)?;
		frame.render_widget(Clear, area);
		let block = Block::default()
			.borders(Borders::TOP)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_style(false))
			.style(theme.sheet);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		if inner.height == 0 {
			return None;
		}
		let handle = Paragraph::new(Line::from(Span::styled(HANDLE, theme.header)))
			.alignment(Alignment::Center);
		frame.render_widget(
			handle,
			Rect {
				height: 1,
				..inner
			},
		);
		Some(Rect {
			y: inner.y + 1,
			height: inner.height - 1,
			..inner
		})
	}
}
