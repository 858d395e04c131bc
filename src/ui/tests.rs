use std::thread;
use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::picker::{FieldControl, FieldValue, Item};
use crate::tui::buffer_to_string;

fn catalog() -> Catalog {
	Catalog::from_items(
		(1..=25)
			.map(|n| Item::new(format!("Town {n:02}"), n.to_string()))
			.collect(),
		"test",
	)
	.expect("valid catalog")
}

fn app() -> App<'static> {
	App::new(
		catalog(),
		ScreenConfig {
			latency: Duration::ZERO,
			..ScreenConfig::default()
		},
	)
}

fn press(app: &mut App<'_>, code: KeyCode) -> Option<FormOutcome> {
	press_with(app, code, KeyModifiers::NONE)
}

fn press_with(app: &mut App<'_>, code: KeyCode, modifiers: KeyModifiers) -> Option<FormOutcome> {
	app.handle_key(KeyEvent::new(code, modifiers), Instant::now())
		.expect("key handling never fails")
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(60, 30)).expect("test backend");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	buffer_to_string(terminal.backend().buffer())
}

/// Wait until the provider has answered every outstanding request.
fn settle(app: &mut App<'_>) {
	for _ in 0..500 {
		app.pump_provider_pages();
		if !app.is_refreshing() {
			return;
		}
		thread::sleep(Duration::from_millis(2));
	}
	panic!("provider never answered");
}

#[test]
fn home_screen_shows_buttons_and_inline_picker() {
	let mut app = app();
	let view = render(&mut app);
	assert!(view.contains("Home Screen"), "{view}");
	assert!(view.contains("Open Sheet"), "{view}");
	assert!(view.contains("Close Sheet"), "{view}");
	assert!(view.contains("City*"), "{view}");
	assert!(view.contains("Select city"), "{view}");
	assert_eq!(app.items().len(), 10, "seeded with the first page");
}

#[test]
fn tab_skips_the_sheet_picker_while_the_sheet_is_closed() {
	let mut app = app();
	assert_eq!(app.focus(), Focus::OpenButton);
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Tab);
	assert_eq!(app.focus(), Focus::InlinePicker);
	press(&mut app, KeyCode::Tab);
	assert_eq!(app.focus(), Focus::OpenButton);

	press(&mut app, KeyCode::Enter);
	assert!(app.sheet().is_open());
	press(&mut app, KeyCode::BackTab);
	assert_eq!(app.focus(), Focus::SheetPicker);
}

#[test]
fn sheet_snaps_and_closes_before_the_screen_exits() {
	let mut app = app();
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.sheet().index(), Some(1));

	press_with(&mut app, KeyCode::Down, KeyModifiers::CONTROL);
	assert_eq!(app.sheet().index(), Some(0));
	press_with(&mut app, KeyCode::Up, KeyModifiers::CONTROL);
	assert_eq!(app.sheet().index(), Some(1));

	assert_eq!(press(&mut app, KeyCode::Esc), None);
	assert!(!app.sheet().is_open());

	let outcome = press(&mut app, KeyCode::Esc).expect("exits");
	assert!(!outcome.accepted);
}

#[test]
fn selection_in_the_sheet_shows_in_the_inline_picker() {
	let mut app = app();
	press(&mut app, KeyCode::Enter);
	for _ in 0..3 {
		press(&mut app, KeyCode::Tab);
	}
	assert_eq!(app.focus(), Focus::SheetPicker);

	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Enter);

	assert_eq!(app.form().value(CITIES_FIELD), FieldValue::single("2"));
	press(&mut app, KeyCode::Esc);
	let view = render(&mut app);
	assert!(view.contains("Town 02"), "{view}");
}

#[test]
fn submit_requires_a_city() {
	let mut app = app();
	assert_eq!(
		press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL),
		None
	);
	let view = render(&mut app);
	assert!(view.contains("cities is required"), "{view}");

	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);

	let outcome = press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL)
		.expect("valid form exits");
	assert!(outcome.accepted);
	assert_eq!(
		serde_json::to_string(&outcome).expect("serializable"),
		r#"{"accepted":true,"values":{"cities":"1"}}"#
	);
}

#[test]
fn keyword_search_is_debounced_and_replaces_items() {
	let mut app = app();
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Enter);

	let typed = Instant::now();
	app.handle_key(KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE), typed)
		.expect("key handled");
	app.tick(typed + Duration::from_millis(799));
	assert!(!app.is_refreshing());

	app.tick(typed + Duration::from_millis(800));
	assert!(app.is_refreshing());
	settle(&mut app);

	let values: Vec<&str> = app.items().iter().map(Item::key).collect();
	assert_eq!(values.len(), 2, "{values:?}");
	assert!(values.contains(&"7") && values.contains(&"17"), "{values:?}");
}

#[test]
fn scrolling_to_the_end_appends_the_next_page() {
	let mut app = app();
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Enter);
	render(&mut app);

	app.tick(Instant::now());
	assert!(!app.is_refreshing(), "no paging before the first scroll");

	press(&mut app, KeyCode::Down);
	assert!(app.is_refreshing());
	settle(&mut app);

	let values: Vec<&str> = app.items().iter().map(Item::key).collect();
	assert_eq!(values.len(), 20);
	assert_eq!(values[10], "11");
}

#[test]
fn closing_the_sheet_discards_its_pending_keyword() {
	let mut app = app();
	press(&mut app, KeyCode::Enter);
	for _ in 0..3 {
		press(&mut app, KeyCode::Tab);
	}
	press(&mut app, KeyCode::Enter);

	let typed = Instant::now();
	app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), typed)
		.expect("key handled");
	assert!(app.sheet_picker.search().is_debouncing());

	app.close_sheet();
	assert!(!app.sheet_picker.search().is_debouncing());

	app.open_sheet();
	app.tick(typed + Duration::from_millis(2_000));

	let search = app.sheet_picker.search();
	assert_eq!(search.page_offset(), 1);
	assert!(search.is_initial_scroll());
	assert_eq!(search.pending_keyword(), "");
	assert!(!app.is_refreshing());
}

#[test]
fn spinner_stays_up_until_the_last_refresh_answers() {
	let mut app = App::new(
		catalog(),
		ScreenConfig {
			latency: Duration::from_millis(150),
			..ScreenConfig::default()
		},
	);
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Enter);
	press_with(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);
	press_with(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);
	assert_eq!(app.refreshing.count(), 2);

	// The provider answers one request per latency period, in order.
	for _ in 0..500 {
		app.pump_provider_pages();
		if app.refreshing.count() < 2 {
			break;
		}
		thread::sleep(Duration::from_millis(2));
	}
	assert_eq!(app.refreshing.count(), 1);
	assert!(app.is_refreshing());

	settle(&mut app);
	assert_eq!(app.refreshing.count(), 0);
}

#[test]
fn ctrl_c_exits_without_accepting() {
	let mut app = app();
	let outcome =
		press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL).expect("exits");
	assert!(!outcome.accepted);
	assert_eq!(outcome.values.get(CITIES_FIELD), Some(&FieldValue::Empty));
}
