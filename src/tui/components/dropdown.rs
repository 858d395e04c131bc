//! Terminal dropdown picker bound to a form field.
//!
//! A [`DropdownPicker`] renders a closed control (label, current selection,
//! optional error line) and, while open, an overlay list with an optional
//! search row. Items and the `refreshing` flag belong to the caller and are
//! passed in through [`PickerProps`] on every call; the picker only keeps its
//! own cursor, scroll offset and search state.

use std::time::Instant;

use ratatui::Frame;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tracing::trace;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use super::scrollbar::{END_REACHED_THRESHOLD, ScrollMetrics, point_in_rect, render_scrollbar};
use crate::picker::{
	FetchItems, FetchRequest, FieldControl, Item, PaginatedSearch, REQUIRED_MARKER, SearchTuning,
	SelectionBinder,
};
use crate::tui::input::QueryInput;
use crate::tui::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const SELECTED_SYMBOL: &str = "✓ ";
const EMPTY_LIST_TEXT: &str = "Nothing to show";
const REFRESHING_TEXT: &str = " Refreshing";

/// Static configuration of a picker instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
	pub field_name: String,
	pub label: Option<String>,
	pub required: bool,
	pub placeholder: String,
	pub search_placeholder: String,
	pub searchable: bool,
	/// Keep every item visible while typing; filtering is left to the provider.
	pub disable_local_search: bool,
	pub multiple: bool,
	pub disabled: bool,
	/// Render a trailing validation line.
	pub show_error_line: bool,
	/// Height of the closed control, borders included.
	pub height: u16,
	/// Maximum height of the open list, borders included.
	pub dropdown_height: u16,
	pub tuning: SearchTuning,
}

impl Default for PickerOptions {
	fn default() -> Self {
		Self {
			field_name: String::new(),
			label: None,
			required: false,
			placeholder: "Select".to_owned(),
			search_placeholder: "Search ".to_owned(),
			searchable: false,
			disable_local_search: false,
			multiple: false,
			disabled: false,
			show_error_line: false,
			height: 3,
			dropdown_height: 12,
			tuning: SearchTuning::default(),
		}
	}
}

/// Externally owned data rendered by the picker.
#[derive(Debug, Clone, Copy)]
pub struct PickerProps<'p> {
	pub items: &'p [Item],
	pub refreshing: bool,
}

impl<'p> PickerProps<'p> {
	pub fn new(items: &'p [Item]) -> Self {
		Self {
			items,
			refreshing: false,
		}
	}

	#[must_use]
	pub fn refreshing(mut self, refreshing: bool) -> Self {
		self.refreshing = refreshing;
		self
	}
}

/// Argument bundle for rendering a picker.
pub struct RenderContext<'c> {
	pub props: PickerProps<'c>,
	pub control: Option<&'c dyn FieldControl>,
	pub theme: &'c Theme,
	pub throbber_state: &'c ThrobberState,
	pub focused: bool,
}

/// Searchable, paginated single- or multi-select dropdown.
#[derive(Debug)]
pub struct DropdownPicker<'a> {
	binder: SelectionBinder,
	search: PaginatedSearch,
	input: QueryInput<'a>,
	options: PickerOptions,
	highlighted: usize,
	offset: usize,
	viewport_rows: usize,
	end_sent_for: Option<usize>,
	control_area: Option<Rect>,
	list_area: Option<Rect>,
}

impl<'a> DropdownPicker<'a> {
	pub fn new(options: PickerOptions) -> Self {
		let binder = SelectionBinder::new(options.field_name.clone())
			.label(options.label.clone().unwrap_or_default())
			.required(options.required)
			.multiple(options.multiple)
			.disabled(options.disabled)
			.show_error_line(options.show_error_line);
		let search = PaginatedSearch::new(options.tuning);
		let input = QueryInput::new(options.search_placeholder.clone());
		let viewport_rows = usize::from(options.dropdown_height.saturating_sub(2)).max(1);

		Self {
			binder,
			search,
			input,
			options,
			highlighted: 0,
			offset: 0,
			viewport_rows,
			end_sent_for: None,
			control_area: None,
			list_area: None,
		}
	}

	/// Attach the item provider that receives fetch requests.
	#[must_use]
	pub fn with_fetcher(mut self, fetcher: impl FetchItems + 'static) -> Self {
		self.search = std::mem::take(&mut self.search).with_fetcher(fetcher);
		self
	}

	/// Attach a listener notified with `(field_name, item)` on every selection.
	#[must_use]
	pub fn on_item_select(mut self, listener: impl FnMut(&str, &Item) + 'static) -> Self {
		let binder = std::mem::replace(&mut self.binder, SelectionBinder::new(""));
		self.binder = binder.on_item_select(listener);
		self
	}

	#[must_use]
	pub fn binder(&self) -> &SelectionBinder {
		&self.binder
	}

	#[must_use]
	pub fn search(&self) -> &PaginatedSearch {
		&self.search
	}

	#[must_use]
	pub fn options(&self) -> &PickerOptions {
		&self.options
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.search.is_open()
	}

	#[must_use]
	pub fn highlighted(&self) -> usize {
		self.highlighted
	}

	#[must_use]
	pub fn offset(&self) -> usize {
		self.offset
	}

	#[must_use]
	pub fn query(&self) -> &str {
		self.input.text()
	}

	pub fn set_disabled(&mut self, disabled: bool) {
		self.options.disabled = disabled;
		self.binder.set_disabled(disabled);
		if disabled {
			self.close();
		}
	}

	/// Rows occupied by the closed picker: label, control and error line.
	#[must_use]
	pub fn height(&self) -> u16 {
		let label = u16::from(self.binder.label_line().is_some());
		let error = u16::from(self.options.show_error_line);
		label + self.options.height + error
	}

	/// Open the list, placing the cursor on the bound value when visible.
	pub fn open(&mut self, props: &PickerProps<'_>, control: Option<&dyn FieldControl>) {
		if self.options.disabled || self.is_open() {
			return;
		}
		self.search.set_open(true);
		let value = self.binder.current_value(control);
		self.highlighted = self
			.visible_items(props.items)
			.iter()
			.position(|item| value.contains(&item.value))
			.unwrap_or(0);
		self.offset = 0;
		self.end_sent_for = None;
		self.keep_highlight_visible();
	}

	pub fn close(&mut self) {
		if !self.is_open() {
			return;
		}
		self.search.set_open(false);
		self.input.clear();
		self.list_area = None;
	}

	/// Close the list and drop any keyword still waiting out its debounce.
	///
	/// Used when the surface hosting the picker goes away while the picker
	/// itself lives on.
	pub fn teardown(&mut self) {
		self.close();
		self.search.teardown();
	}

	/// Items shown in the open list.
	#[must_use]
	pub fn visible_items<'p>(&self, items: &'p [Item]) -> Vec<&'p Item> {
		let query = self.input.text();
		if self.options.searchable && !self.options.disable_local_search && !query.is_empty() {
			items.iter().filter(|item| item.label_contains(query)).collect()
		} else {
			items.iter().collect()
		}
	}

	/// Advance timers and list bookkeeping. Returns the requests issued.
	pub fn tick(&mut self, now: Instant, props: &PickerProps<'_>) -> Vec<FetchRequest> {
		let mut requests = Vec::new();
		if let Some(request) = self.search.tick(now) {
			requests.push(request);
		}
		if self.is_open() {
			let len = self.visible_items(props.items).len();
			self.clamp_cursor(len);
			if let Some(request) = self.sync_end_reached(len) {
				requests.push(request);
			}
		}
		requests
	}

	/// Pull-to-refresh.
	pub fn refresh(&mut self) -> FetchRequest {
		self.search.refresh()
	}

	/// Handle a key press. Returns `true` when the picker consumed it.
	pub fn handle_key(
		&mut self,
		key: KeyEvent,
		props: &PickerProps<'_>,
		control: Option<&mut dyn FieldControl>,
		now: Instant,
	) -> bool {
		if self.options.disabled {
			return false;
		}

		if !self.is_open() {
			return match key.code {
				KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
					self.open(props, control.as_deref());
					true
				}
				_ => false,
			};
		}

		let len = self.visible_items(props.items).len();
		match key.code {
			KeyCode::Esc => self.close(),
			KeyCode::Enter => self.select_highlighted(props, control),
			KeyCode::Up => self.scroll_cursor(-1, len),
			KeyCode::Down => self.scroll_cursor(1, len),
			KeyCode::PageUp => self.scroll_cursor(-self.page_step(), len),
			KeyCode::PageDown => self.scroll_cursor(self.page_step(), len),
			KeyCode::Home if !self.options.searchable => self.scroll_cursor(isize::MIN, len),
			KeyCode::End if !self.options.searchable => self.scroll_cursor(isize::MAX, len),
			KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.refresh();
			}
			KeyCode::Tab | KeyCode::BackTab => return false,
			_ => {
				if !self.options.searchable {
					return false;
				}
				if self.input.input(key) {
					self.highlighted = 0;
					self.offset = 0;
					self.end_sent_for = None;
					self.search.on_keyword(self.input.text().to_owned(), now);
				}
			}
		}
		true
	}

	/// Handle a mouse event. Returns `true` when the picker consumed it.
	pub fn handle_mouse(
		&mut self,
		mouse: MouseEvent,
		props: &PickerProps<'_>,
		control: Option<&mut dyn FieldControl>,
	) -> bool {
		if self.options.disabled {
			return false;
		}

		let over_list = self
			.list_area
			.is_some_and(|area| point_in_rect(mouse.column, mouse.row, area));
		let over_control = self
			.control_area
			.is_some_and(|area| point_in_rect(mouse.column, mouse.row, area));
		let len = self.visible_items(props.items).len();

		match mouse.kind {
			MouseEventKind::ScrollDown if self.is_open() && over_list => {
				self.scroll_cursor(1, len);
				true
			}
			MouseEventKind::ScrollUp if self.is_open() && over_list => {
				self.scroll_cursor(-1, len);
				true
			}
			MouseEventKind::Down(MouseButton::Left) if self.is_open() && over_list => {
				let Some(area) = self.list_area else {
					return false;
				};
				let row = usize::from(mouse.row.saturating_sub(area.y));
				let index = self.offset + row;
				if index < len {
					self.highlighted = index;
					self.select_highlighted(props, control);
				}
				true
			}
			MouseEventKind::Down(MouseButton::Left) if over_control => {
				if self.is_open() {
					self.close();
				} else {
					self.open(props, control.as_deref());
				}
				true
			}
			_ => false,
		}
	}

	fn select_highlighted(&mut self, props: &PickerProps<'_>, control: Option<&mut dyn FieldControl>) {
		let Some(item) = self
			.visible_items(props.items)
			.get(self.highlighted)
			.map(|item| (*item).clone())
		else {
			return;
		};
		self.binder.handle_select(control, &item);
		if !self.options.multiple {
			self.close();
		}
	}

	fn page_step(&self) -> isize {
		isize::try_from(self.viewport_rows.max(1)).unwrap_or(1)
	}

	/// Move the cursor as a scroll gesture.
	fn scroll_cursor(&mut self, delta: isize, len: usize) {
		self.search.on_scroll_begin();
		if len == 0 {
			return;
		}
		let last = len - 1;
		self.highlighted = if delta.is_negative() {
			self.highlighted.saturating_sub(delta.unsigned_abs())
		} else {
			self.highlighted.saturating_add(delta.unsigned_abs()).min(last)
		};
		self.keep_highlight_visible();
		self.sync_end_reached(len);
	}

	fn keep_highlight_visible(&mut self) {
		let viewport = self.viewport_rows.max(1);
		if self.highlighted < self.offset {
			self.offset = self.highlighted;
		} else if self.highlighted >= self.offset + viewport {
			self.offset = self.highlighted + 1 - viewport;
		}
	}

	fn clamp_cursor(&mut self, len: usize) {
		if len == 0 {
			self.highlighted = 0;
			self.offset = 0;
			return;
		}
		self.highlighted = self.highlighted.min(len - 1);
		let metrics = ScrollMetrics::compute(len, self.viewport_rows);
		self.offset = self.offset.min(metrics.max_scroll);
		self.keep_highlight_visible();
	}

	/// Report the end of the list while the viewport stays within the end
	/// threshold. Once a page was requested for an item count, the same count
	/// never requests again.
	fn sync_end_reached(&mut self, len: usize) -> Option<FetchRequest> {
		let metrics = ScrollMetrics::compute(len, self.viewport_rows);
		if !metrics.is_near_end(self.offset, END_REACHED_THRESHOLD) {
			self.end_sent_for = None;
			return None;
		}
		if self.end_sent_for == Some(len) {
			return None;
		}
		let request = self.search.on_end_reached(len);
		if request.is_some() {
			trace!(len, offset = self.offset, "list end reached");
			self.end_sent_for = Some(len);
		}
		request
	}

	/// Render the closed control into `area`.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
		let label_rows = u16::from(self.binder.label_line().is_some());
		let error_rows = u16::from(self.options.show_error_line);
		let [label_area, control_area, error_area] = Layout::vertical([
			Constraint::Length(label_rows),
			Constraint::Length(self.options.height),
			Constraint::Length(error_rows),
		])
		.areas(area);

		if let Some(label) = self.binder.label_line() {
			let mut spans = vec![Span::styled(label.text.to_owned(), ctx.theme.prompt)];
			if label.required {
				spans.push(Span::styled(REQUIRED_MARKER, ctx.theme.error));
			}
			frame.render_widget(Paragraph::new(Line::from(spans)), label_area);
		}

		self.render_control(frame, control_area, ctx);
		self.control_area = Some(control_area);

		if let Some(text) = self.binder.error_line(ctx.control) {
			let has_error = ctx
				.control
				.and_then(|control| control.error(self.binder.field_name()))
				.is_some();
			let style = if has_error { ctx.theme.error } else { ctx.theme.empty };
			frame.render_widget(Paragraph::new(Span::styled(text, style)), error_area);
		}
	}

	fn render_control(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
		let disabled = self.options.disabled;
		let mut block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(ctx.theme.border_style(ctx.focused && !disabled));
		if disabled {
			block = block.style(ctx.theme.disabled);
		}
		let inner = block.inner(area);
		frame.render_widget(block, area);
		if inner.width == 0 || inner.height == 0 {
			return;
		}

		let arrow = if self.is_open() { "▴" } else { "▾" };
		let text_width = usize::from(inner.width).saturating_sub(arrow.width() + 1);
		let value = self.binder.current_value(ctx.control);
		let (text, style) = match self.binder.selected_label(ctx.props.items, &value) {
			Some(label) => (label, ctx.theme.text_style(disabled)),
			None => (self.options.placeholder.clone(), ctx.theme.empty),
		};
		let (shown, shown_width) = text.unicode_truncate(text_width);
		let padding = " ".repeat(text_width.saturating_sub(shown_width) + 1);
		let line = Line::from(vec![
			Span::styled(shown.to_owned(), style),
			Span::raw(padding),
			Span::styled(arrow, ctx.theme.text_style(disabled)),
		]);
		let row = Rect {
			y: inner.y + inner.height.saturating_sub(1) / 2,
			height: 1,
			..inner
		};
		frame.render_widget(Paragraph::new(line), row);
	}

	/// Render the open list as an overlay inside `bounds`.
	///
	/// Call after everything the overlay may cover has been drawn.
	pub fn render_dropdown(&mut self, frame: &mut Frame, bounds: Rect, ctx: &RenderContext<'_>) {
		self.list_area = None;
		if !self.is_open() {
			return;
		}
		let Some(control) = self.control_area else {
			return;
		};

		let items = self.visible_items(ctx.props.items);
		let search_rows = u16::from(self.options.searchable);
		let refresh_rows = u16::from(ctx.props.refreshing);
		let content_rows = u16::try_from(items.len().max(1)).unwrap_or(u16::MAX);
		let wanted = search_rows
			.saturating_add(refresh_rows)
			.saturating_add(content_rows)
			.saturating_add(2)
			.min(self.options.dropdown_height.max(3));

		let Some(area) = place_overlay(bounds, control, wanted) else {
			return;
		};
		frame.render_widget(Clear, area);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(ctx.theme.border_style(true));
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let [search_area, refresh_area, list_area] = Layout::vertical([
			Constraint::Length(search_rows),
			Constraint::Length(refresh_rows),
			Constraint::Min(0),
		])
		.areas(inner);

		if self.options.searchable {
			self.input.set_style(Style::default(), ctx.theme.empty);
			self.input.render(frame, search_area);
		}

		if ctx.props.refreshing {
			let spinner = Throbber::default()
				.style(ctx.theme.empty)
				.throbber_style(ctx.theme.empty)
				.to_symbol_span(ctx.throbber_state);
			let line = Line::from(vec![spinner, Span::styled(REFRESHING_TEXT, ctx.theme.empty)]);
			frame.render_widget(Paragraph::new(line), refresh_area);
		}

		self.viewport_rows = usize::from(list_area.height).max(1);
		self.list_area = Some(list_area);
		self.clamp_cursor(items.len());

		if items.is_empty() {
			frame.render_widget(
				Paragraph::new(Span::styled(EMPTY_LIST_TEXT, ctx.theme.empty)),
				list_area,
			);
			return;
		}

		let metrics = ScrollMetrics::compute(items.len(), self.viewport_rows);
		let rows_area = if metrics.needs_scrollbar {
			render_scrollbar(frame, list_area, metrics, self.offset, ctx.theme)
		} else {
			list_area
		};

		let value = self.binder.current_value(ctx.control);
		let width = usize::from(rows_area.width);
		for (row, (index, item)) in items
			.iter()
			.enumerate()
			.skip(self.offset)
			.take(self.viewport_rows)
			.enumerate()
		{
			let highlighted = index == self.highlighted;
			let selected = value.contains(item.key());
			let prefix = match (highlighted, selected) {
				(true, _) => HIGHLIGHT_SYMBOL,
				(false, true) => SELECTED_SYMBOL,
				(false, false) => "  ",
			};
			let mut style = if selected {
				ctx.theme.highlight
			} else {
				Style::default()
			};
			if highlighted {
				style = style.patch(ctx.theme.row_highlight);
			}
			let label_width = width.saturating_sub(prefix.width());
			let (label, _) = item.label.unicode_truncate(label_width);
			let line = Line::from(vec![Span::raw(prefix), Span::raw(label.to_owned())]).style(style);
			let row_area = Rect {
				y: rows_area.y + u16::try_from(row).unwrap_or(u16::MAX),
				height: 1,
				..rows_area
			};
			frame.render_widget(Paragraph::new(line), row_area);
		}
	}
}

/// Place an overlay of `height` rows below `anchor`, or above it when there is
/// more room there.
fn place_overlay(bounds: Rect, anchor: Rect, height: u16) -> Option<Rect> {
	let below = bounds.bottom().saturating_sub(anchor.bottom());
	let above = anchor.y.saturating_sub(bounds.y);
	let (y, available) = if below >= height || below >= above {
		(anchor.bottom(), below)
	} else {
		let used = height.min(above);
		(anchor.y - used, above)
	};
	let height = height.min(available);
	if height < 3 || anchor.width == 0 {
		return None;
	}
	Some(Rect {
		x: anchor.x,
		y,
		width: anchor.width,
		height,
	})
}
