use std::time::{Duration, Instant};

/// Quiescence window applied to search keywords.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(800);

/// Trailing-edge debounce driven by the caller's clock.
///
/// Each [`schedule`](Self::schedule) replaces the pending value and pushes the
/// deadline out by the configured delay. [`poll`](Self::poll) yields the value
/// once the deadline has passed without another schedule. Nothing runs on its
/// own: the owner pumps `poll` from its event loop, and dropping the debouncer
/// discards whatever is pending.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
	delay: Duration,
	pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
	deadline: Instant,
	value: T,
}

impl<T> Debouncer<T> {
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	#[must_use]
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Arm (or re-arm) the trigger with `value`.
	pub fn schedule(&mut self, value: T, now: Instant) {
		self.pending = Some(Pending {
			deadline: now + self.delay,
			value,
		});
	}

	/// Take the pending value if its deadline has passed.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		let due = self
			.pending
			.as_ref()
			.is_some_and(|pending| pending.deadline <= now);
		if due {
			self.pending.take().map(|pending| pending.value)
		} else {
			None
		}
	}

	/// Disarm the trigger, returning the value that would have fired.
	pub fn cancel(&mut self) -> Option<T> {
		self.pending.take().map(|pending| pending.value)
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}
}

impl<T> Default for Debouncer<T> {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ms(value: u64) -> Duration {
		Duration::from_millis(value)
	}

	#[test]
	fn fires_once_after_quiescence() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(ms(800));
		debouncer.schedule("a", start);

		assert_eq!(debouncer.poll(start + ms(799)), None);
		assert_eq!(debouncer.poll(start + ms(800)), Some("a"));
		assert_eq!(debouncer.poll(start + ms(5_000)), None);
	}

	#[test]
	fn rescheduling_pushes_the_deadline_and_keeps_the_last_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(ms(800));
		debouncer.schedule("p", start);
		debouncer.schedule("pa", start + ms(500));
		debouncer.schedule("par", start + ms(1_000));

		assert_eq!(debouncer.poll(start + ms(1_300)), None);
		assert_eq!(debouncer.deadline(), Some(start + ms(1_800)));
		assert_eq!(debouncer.poll(start + ms(1_800)), Some("par"));
	}

	#[test]
	fn cancel_disarms() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(ms(10));
		debouncer.schedule(1, start);
		assert!(debouncer.is_pending());
		assert_eq!(debouncer.cancel(), Some(1));
		assert!(!debouncer.is_pending());
		assert_eq!(debouncer.poll(start + ms(20)), None);
	}
}
