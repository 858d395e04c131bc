//! Debounced, paginated search controller.
//!
//! [`PaginatedSearch`] decides when the picker asks its item provider for more
//! data. It never receives results: the provider updates the externally owned
//! item list and `refreshing` flag on its own schedule, so every operation here
//! is fire-and-forget.
//!
//! Three triggers emit requests:
//!
//! * a keyword that survives the debounce window resets pagination and asks for
//!   `(keyword, 0)`;
//! * pull-to-refresh asks for `("", page_offset * page_size)` without touching
//!   pagination;
//! * reaching the end of the list asks for `("", page_offset)` and then advances
//!   the page offset, but only once the user has scrolled and the list is
//!   non-empty.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::debounce::{DEFAULT_DEBOUNCE, Debouncer};

/// Number of items per provider page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Command sink receiving `(keyword, offset)` fetch requests.
pub trait FetchItems {
	fn fetch(&mut self, keyword: &str, offset: usize);
}

impl<F> FetchItems for F
where
	F: FnMut(&str, usize),
{
	fn fetch(&mut self, keyword: &str, offset: usize) {
		self(keyword, offset);
	}
}

/// What caused a fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTrigger {
	Keyword,
	Refresh,
	EndReached,
}

/// A request handed to the [`FetchItems`] collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
	pub keyword: String,
	pub offset: usize,
	pub trigger: FetchTrigger,
}

impl fmt::Display for FetchRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{:?}(keyword={:?}, offset={})",
			self.trigger, self.keyword, self.offset
		)
	}
}

/// Tunables for [`PaginatedSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTuning {
	pub debounce: Duration,
	pub page_size: usize,
}

impl Default for SearchTuning {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

/// Search and pagination state owned by one picker instance.
pub struct PaginatedSearch {
	open: bool,
	page_offset: usize,
	initial_scroll: bool,
	pending_keyword: String,
	page_size: usize,
	debounce: Debouncer<String>,
	fetcher: Option<Box<dyn FetchItems>>,
}

impl fmt::Debug for PaginatedSearch {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PaginatedSearch")
			.field("open", &self.open)
			.field("page_offset", &self.page_offset)
			.field("initial_scroll", &self.initial_scroll)
			.field("pending_keyword", &self.pending_keyword)
			.field("page_size", &self.page_size)
			.field("debounce", &self.debounce)
			.field("has_fetcher", &self.fetcher.is_some())
			.finish()
	}
}

impl Default for PaginatedSearch {
	fn default() -> Self {
		Self::new(SearchTuning::default())
	}
}

impl PaginatedSearch {
	/// Create a closed controller with the first page considered loaded.
	pub fn new(tuning: SearchTuning) -> Self {
		Self {
			open: false,
			page_offset: 1,
			initial_scroll: true,
			pending_keyword: String::new(),
			page_size: tuning.page_size,
			debounce: Debouncer::new(tuning.debounce),
			fetcher: None,
		}
	}

	/// Attach the collaborator that receives fetch requests.
	#[must_use]
	pub fn with_fetcher(mut self, fetcher: impl FetchItems + 'static) -> Self {
		self.fetcher = Some(Box::new(fetcher));
		self
	}

	#[must_use]
	pub fn has_fetcher(&self) -> bool {
		self.fetcher.is_some()
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn set_open(&mut self, open: bool) {
		if self.open != open {
			debug!(open, "picker visibility changed");
			self.open = open;
		}
	}

	pub fn toggle(&mut self) {
		self.set_open(!self.open);
	}

	#[must_use]
	pub fn page_offset(&self) -> usize {
		self.page_offset
	}

	#[must_use]
	pub fn is_initial_scroll(&self) -> bool {
		self.initial_scroll
	}

	/// Last keyword that made it through the debounce window.
	#[must_use]
	pub fn pending_keyword(&self) -> &str {
		&self.pending_keyword
	}

	#[must_use]
	pub fn is_debouncing(&self) -> bool {
		self.debounce.is_pending()
	}

	/// Deadline of the armed keyword trigger, if any.
	#[must_use]
	pub fn debounce_deadline(&self) -> Option<Instant> {
		self.debounce.deadline()
	}

	/// Feed a keystroke-level keyword into the debounce window.
	pub fn on_keyword(&mut self, keyword: impl Into<String>, now: Instant) {
		self.debounce.schedule(keyword.into(), now);
	}

	/// Fire the keyword trigger if its window has elapsed.
	pub fn tick(&mut self, now: Instant) -> Option<FetchRequest> {
		let keyword = self.debounce.poll(now)?;
		self.page_offset = 0;
		self.initial_scroll = true;
		self.pending_keyword = keyword.clone();
		Some(self.emit(keyword, 0, FetchTrigger::Keyword))
	}

	/// Pull-to-refresh. Reuses the current page offset scaled by the page size.
	pub fn refresh(&mut self) -> FetchRequest {
		let offset = self.page_offset.saturating_mul(self.page_size);
		self.emit(String::new(), offset, FetchTrigger::Refresh)
	}

	/// Record that the user started scrolling the list.
	pub fn on_scroll_begin(&mut self) {
		if self.initial_scroll {
			trace!("first scroll gesture observed");
			self.initial_scroll = false;
		}
	}

	/// The list reached its end while showing `item_count` items.
	pub fn on_end_reached(&mut self, item_count: usize) -> Option<FetchRequest> {
		if self.initial_scroll || item_count == 0 {
			trace!(
				initial_scroll = self.initial_scroll,
				item_count, "end of list ignored"
			);
			return None;
		}
		let request = self.emit(String::new(), self.page_offset, FetchTrigger::EndReached);
		self.page_offset += 1;
		Some(request)
	}

	/// Disarm the keyword trigger so nothing fires after the owner goes away.
	pub fn teardown(&mut self) {
		if let Some(keyword) = self.debounce.cancel() {
			debug!(%keyword, "discarded pending search on teardown");
		}
	}

	fn emit(&mut self, keyword: String, offset: usize, trigger: FetchTrigger) -> FetchRequest {
		let request = FetchRequest {
			keyword,
			offset,
			trigger,
		};
		match self.fetcher.as_mut() {
			Some(fetcher) => {
				debug!(%request, "requesting items");
				fetcher.fetch(&request.keyword, request.offset);
			}
			None => trace!(%request, "no item provider attached"),
		}
		request
	}
}

impl Drop for PaginatedSearch {
	fn drop(&mut self) {
		self.teardown();
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	type Calls = Rc<RefCell<Vec<(String, usize)>>>;

	fn recording_search() -> (PaginatedSearch, Calls) {
		let calls: Calls = Rc::default();
		let sink = Rc::clone(&calls);
		let search = PaginatedSearch::default().with_fetcher(move |keyword: &str, offset: usize| {
			sink.borrow_mut().push((keyword.to_owned(), offset));
		});
		(search, calls)
	}

	fn ms(value: u64) -> Duration {
		Duration::from_millis(value)
	}

	fn render_calls(calls: &Calls) -> String {
		calls
			.borrow()
			.iter()
			.map(|(keyword, offset)| format!("[{keyword}]@{offset}"))
			.collect::<Vec<_>>()
			.join(" ")
	}

	#[test]
	fn rapid_keywords_collapse_into_one_fetch() {
		let (mut search, calls) = recording_search();
		let start = Instant::now();
		for (step, keyword) in ["p", "pa", "par", "pari", "paris"].iter().enumerate() {
			let at = start + ms(step as u64 * 799);
			search.on_keyword(*keyword, at);
			assert!(search.tick(at).is_none());
		}

		let last = start + ms(4 * 799);
		assert!(search.tick(last + ms(799)).is_none());
		let request = search.tick(last + ms(800)).expect("debounce settles");
		assert_eq!(request.trigger, FetchTrigger::Keyword);
		assert!(search.tick(last + ms(10_000)).is_none());

		insta::assert_snapshot!(render_calls(&calls), @"[paris]@0");
		assert_eq!(search.pending_keyword(), "paris");
	}

	#[test]
	fn end_of_list_before_scroll_never_pages() {
		let (mut search, calls) = recording_search();
		for _ in 0..5 {
			assert!(search.on_end_reached(25).is_none());
		}
		assert!(calls.borrow().is_empty());
		assert_eq!(search.page_offset(), 1);
	}

	#[test]
	fn empty_list_never_pages_even_after_scrolling() {
		let (mut search, calls) = recording_search();
		search.on_scroll_begin();
		assert!(search.on_end_reached(0).is_none());
		assert!(calls.borrow().is_empty());
		assert_eq!(search.page_offset(), 1);
	}

	#[test]
	fn refresh_scales_offset_without_resetting() {
		let (mut search, calls) = recording_search();
		search.on_scroll_begin();
		search.on_end_reached(10);
		search.on_end_reached(20);
		assert_eq!(search.page_offset(), 3);

		let request = search.refresh();
		assert_eq!(request.keyword, "");
		assert_eq!(request.offset, 30);
		assert_eq!(search.page_offset(), 3);

		insta::assert_snapshot!(render_calls(&calls), @"[]@1 []@2 []@30");
	}

	#[test]
	fn fresh_search_resets_pagination() {
		let (mut search, calls) = recording_search();
		let start = Instant::now();
		search.on_scroll_begin();
		search.on_end_reached(12);
		search.on_end_reached(22);
		assert_eq!(search.page_offset(), 3);
		assert!(!search.is_initial_scroll());

		search.on_keyword("lyon", start);
		search.tick(start + ms(800));

		assert_eq!(search.page_offset(), 0);
		assert!(search.is_initial_scroll());
		assert_eq!(calls.borrow().last(), Some(&("lyon".to_owned(), 0)));

		// The guard is armed again until the next scroll gesture.
		assert!(search.on_end_reached(10).is_none());
	}

	#[test]
	fn first_end_of_list_after_scroll_requests_page_one() {
		let (mut search, calls) = recording_search();
		assert_eq!(search.page_offset(), 1);
		assert!(search.is_initial_scroll());

		search.on_scroll_begin();
		assert!(!search.is_initial_scroll());

		let request = search.on_end_reached(12).expect("scrolled, non-empty list");
		assert_eq!(
			request,
			FetchRequest {
				keyword: String::new(),
				offset: 1,
				trigger: FetchTrigger::EndReached,
			}
		);
		assert_eq!(search.page_offset(), 2);
		assert_eq!(*calls.borrow(), vec![(String::new(), 1)]);
	}

	#[test]
	fn state_advances_without_a_provider() {
		let mut search = PaginatedSearch::default();
		assert!(!search.has_fetcher());
		search.on_scroll_begin();
		assert!(search.on_end_reached(3).is_some());
		assert_eq!(search.page_offset(), 2);
	}

	#[test]
	fn open_state_toggles_independently_of_search() {
		let mut search = PaginatedSearch::default();
		search.toggle();
		assert!(search.is_open());
		assert_eq!(search.page_offset(), 1);
		assert!(search.is_initial_scroll());
		search.set_open(false);
		assert!(!search.is_open());
	}

	#[test]
	fn teardown_drops_pending_keyword() {
		let (mut search, calls) = recording_search();
		let start = Instant::now();
		search.on_keyword("rome", start);
		search.teardown();
		assert!(!search.is_debouncing());
		assert!(search.tick(start + ms(10_000)).is_none());
		assert!(calls.borrow().is_empty());
	}

	#[test]
	fn dropping_the_controller_discards_pending_keyword() {
		let (mut search, calls) = recording_search();
		search.on_keyword("oslo", Instant::now());
		assert!(search.is_debouncing());

		drop(search);

		assert!(calls.borrow().is_empty());
		assert_eq!(Rc::strong_count(&calls), 1);
	}
}
