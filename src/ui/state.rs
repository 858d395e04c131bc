//! State container for the demo screen.

use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;

use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, info};

use super::catalog::Catalog;
use super::config::ScreenConfig;
use super::provider::{self, InFlight, Page, ProviderCommand, ProviderConfig, ProviderHandle};
use super::FormOutcome;
use crate::picker::{FieldRules, FieldValue, FormState, Item};
use crate::tui::components::{BottomSheet, Button, DropdownPicker, PickerOptions, PickerProps};
use crate::tui::style::Theme;

/// Focusable parts of the screen, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	OpenButton,
	CloseButton,
	InlinePicker,
	SheetPicker,
}

/// The demo screen.
///
/// The form store and the item list live here; both pickers read them through
/// [`PickerProps`] and write the form only through [`FormState`]'s control.
pub struct App<'a> {
	pub(crate) form: FormState,
	pub(crate) items: Vec<Item>,
	/// Requests the provider still owes an answer for.
	pub(crate) refreshing: InFlight,
	pub(crate) inline: DropdownPicker<'a>,
	pub(crate) sheet_picker: DropdownPicker<'a>,
	pub(crate) sheet: BottomSheet,
	/// Screen area covered by the sheet at the last draw.
	pub(crate) sheet_area: Option<Rect>,
	pub(crate) open_button: Button,
	pub(crate) close_button: Button,
	pub(crate) focus: Focus,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) provider_tx: Sender<ProviderCommand>,
	pub(crate) page_rx: Receiver<Page>,
}

impl<'a> App<'a> {
	/// Build the screen and start the item provider.
	pub fn new(catalog: Catalog, config: ScreenConfig) -> Self {
		let ScreenConfig {
			picker,
			snap_points,
			initial_index,
			latency,
			theme,
		} = config;
		let page_size = picker.tuning.page_size;
		let items = catalog.page("", 0, page_size);
		let (provider_tx, page_rx) = provider::spawn(
			catalog,
			ProviderConfig {
				latency,
				page_size,
			},
		);

		let field = picker.field_name.clone();
		let mut form = FormState::with_defaults([(field.clone(), FieldValue::Empty)]);
		form.register(
			field,
			FieldRules {
				required: picker.required,
			},
		);

		let refreshing = InFlight::default();
		let handle = ProviderHandle::new(provider_tx.clone(), refreshing.clone());
		let inline = DropdownPicker::new(picker.clone())
			.with_fetcher(handle)
			.on_item_select(log_selection);
		let sheet_picker = DropdownPicker::new(picker).on_item_select(log_selection);

		Self {
			form,
			items,
			refreshing,
			inline,
			sheet_picker,
			sheet: BottomSheet::new(snap_points, initial_index),
			sheet_area: None,
			open_button: Button::new("Open Sheet"),
			close_button: Button::new("Close Sheet"),
			focus: Focus::OpenButton,
			theme,
			throbber_state: ThrobberState::default(),
			provider_tx,
			page_rx,
		}
	}

	#[must_use]
	pub fn form(&self) -> &FormState {
		&self.form
	}

	#[must_use]
	pub fn items(&self) -> &[Item] {
		&self.items
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	#[must_use]
	pub fn sheet(&self) -> &BottomSheet {
		&self.sheet
	}

	#[must_use]
	pub fn is_refreshing(&self) -> bool {
		self.refreshing.is_refreshing()
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub(crate) fn picker_options(&self) -> &PickerOptions {
		self.inline.options()
	}

	/// Apply every page the provider has answered so far.
	pub(crate) fn pump_provider_pages(&mut self) {
		let pages = provider::drain(&self.page_rx);
		if pages.is_empty() {
			return;
		}
		for page in pages {
			debug!(keyword = %page.keyword, offset = page.offset, count = page.items.len(), "page received");
			provider::merge_page(&mut self.items, page);
			self.refreshing.answered();
		}
	}

	/// Advance debounce timers and end-of-list detection of both pickers.
	pub(crate) fn tick(&mut self, now: Instant) {
		let props = PickerProps::new(&self.items).refreshing(self.refreshing.is_refreshing());
		self.inline.tick(now, &props);
		if self.sheet.is_open() {
			self.sheet_picker.tick(now, &PickerProps::new(&self.items));
		}
	}

	pub(crate) fn outcome(&self, accepted: bool) -> FormOutcome {
		FormOutcome {
			accepted,
			values: self.form.values(),
		}
	}

	pub(crate) fn open_sheet(&mut self) {
		self.sheet.present();
	}

	pub(crate) fn close_sheet(&mut self) {
		self.sheet.close();
		self.sheet_area = None;
		self.sheet_picker.teardown();
		if self.focus == Focus::SheetPicker {
			self.focus = Focus::InlinePicker;
		}
	}

	/// Move focus forward or backward, skipping the sheet picker while the
	/// sheet is closed.
	pub(crate) fn cycle_focus(&mut self, forward: bool) {
		let mut order = vec![Focus::OpenButton, Focus::CloseButton, Focus::InlinePicker];
		if self.sheet.is_open() {
			order.push(Focus::SheetPicker);
		}
		let current = order
			.iter()
			.position(|focus| *focus == self.focus)
			.unwrap_or(0);
		let next = if forward {
			(current + 1) % order.len()
		} else {
			(current + order.len() - 1) % order.len()
		};
		self.inline.close();
		self.sheet_picker.close();
		self.focus = order[next];
	}
}

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		let _ = self.provider_tx.send(ProviderCommand::Shutdown);
	}
}

fn log_selection(field: &str, item: &Item) {
	info!(field, label = %item.label, value = %item.value, "item selected");
}
