//! Background item provider for the demo screen.
//!
//! The provider answers `(keyword, offset)` requests from a worker thread after
//! a simulated latency. The offset is read as a page index into the catalog.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::catalog::Catalog;
use crate::picker::{FetchItems, Item};

/// Commands understood by the provider thread.
#[derive(Debug)]
pub enum ProviderCommand {
	Fetch { keyword: String, offset: usize },
	Shutdown,
}

/// One page answered by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
	pub keyword: String,
	pub offset: usize,
	pub items: Vec<Item>,
}

/// Provider settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderConfig {
	pub latency: Duration,
	pub page_size: usize,
}

/// Launch the provider thread and return its communication channels.
pub fn spawn(catalog: Catalog, config: ProviderConfig) -> (Sender<ProviderCommand>, Receiver<Page>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (page_tx, page_rx) = mpsc::channel();

	thread::spawn(move || worker_loop(&catalog, config, &command_rx, &page_tx));

	(command_tx, page_rx)
}

fn worker_loop(
	catalog: &Catalog,
	config: ProviderConfig,
	command_rx: &Receiver<ProviderCommand>,
	page_tx: &Sender<Page>,
) {
	while let Ok(command) = command_rx.recv() {
		match command {
			ProviderCommand::Fetch { keyword, offset } => {
				if !config.latency.is_zero() {
					thread::sleep(config.latency);
				}
				let items = catalog.page(&keyword, offset, config.page_size);
				debug!(%keyword, offset, count = items.len(), "provider answered");
				let page = Page {
					keyword,
					offset,
					items,
				};
				if page_tx.send(page).is_err() {
					break;
				}
			}
			ProviderCommand::Shutdown => break,
		}
	}
}

/// Number of requests the provider has not answered yet.
///
/// Clones share one counter. The picker shows its refresh row while the count
/// is above zero.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Rc<Cell<usize>>);

impl InFlight {
	#[must_use]
	pub fn count(&self) -> usize {
		self.0.get()
	}

	#[must_use]
	pub fn is_refreshing(&self) -> bool {
		self.count() > 0
	}

	fn issued(&self) {
		self.0.set(self.count() + 1);
	}

	/// Record one answered request.
	pub fn answered(&self) {
		self.0.set(self.count().saturating_sub(1));
	}
}

/// Fetch collaborator handed to a picker.
///
/// Every request sent bumps the shared [`InFlight`] count; the screen lowers it
/// once per page received.
#[derive(Debug, Clone)]
pub struct ProviderHandle {
	command_tx: Sender<ProviderCommand>,
	in_flight: InFlight,
}

impl ProviderHandle {
	pub fn new(command_tx: Sender<ProviderCommand>, in_flight: InFlight) -> Self {
		Self {
			command_tx,
			in_flight,
		}
	}
}

impl FetchItems for ProviderHandle {
	fn fetch(&mut self, keyword: &str, offset: usize) {
		let command = ProviderCommand::Fetch {
			keyword: keyword.to_owned(),
			offset,
		};
		if self.command_tx.send(command).is_err() {
			warn!(%keyword, offset, "item provider is gone");
			return;
		}
		self.in_flight.issued();
	}
}

/// Merge a page into the externally owned item list.
///
/// Offset zero replaces the list; later pages append items whose value is not
/// present yet.
pub fn merge_page(items: &mut Vec<Item>, page: Page) {
	if page.offset == 0 {
		*items = page.items;
		return;
	}
	for item in page.items {
		if !items.iter().any(|existing| existing.value == item.value) {
			items.push(item);
		}
	}
}

/// Drain every page waiting on `page_rx`.
pub fn drain(page_rx: &Receiver<Page>) -> Vec<Page> {
	let mut pages = Vec::new();
	loop {
		match page_rx.try_recv() {
			Ok(page) => pages.push(page),
			Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
		}
	}
	pages
}
