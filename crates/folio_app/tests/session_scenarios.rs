//! End-to-end page scenarios driven through a headless session
//!
//! These tests verify that:
//! - The hero heading types out and then goes quiet
//! - Navigating away cancels timers and releases every trigger
//! - Theme toggles restyle mounted items without touching reveal state
//! - The contact page's copy indicator reverts on its timeout

use folio_app::view::PageView;
use folio_app::{FolioConfig, Page, RevealedItem, Route, Session, SessionEvent};
use folio_theme::{ColorScheme, Palette};

const HERO_LEN: usize = 32;

fn session() -> Session {
    let mut config = FolioConfig::default();
    config.viewport.width = 1280.0;
    config.viewport.height = 600.0;
    Session::new(config).unwrap()
}

fn hero(session: &Session) -> (String, usize, bool) {
    match session.snapshot().map(|s| s.body) {
        Some(PageView::Home(hero)) => (hero.text, hero.revealed, hero.complete),
        other => panic!("expected the home page, got {other:?}"),
    }
}

#[test]
fn hero_types_one_grapheme_per_tick_then_stops() {
    let mut session = session();
    session.navigate(Route::Home).unwrap();
    assert_eq!(hero(&session).1, 0);
    assert_eq!(session.pending_timers(), 1);

    let events = session.advance(150 * 5);
    assert_eq!(events.len(), 5);
    assert_eq!(hero(&session), ("Hello".to_string(), 5, false));

    session.advance(150 * (HERO_LEN as u64 - 5));
    let (text, revealed, complete) = hero(&session);
    assert_eq!(text, "Hello, my name is Levi Mickelson");
    assert_eq!(revealed, HERO_LEN);
    assert!(complete);
    assert_eq!(session.pending_timers(), 0);

    assert!(session.advance(10_000).is_empty());
    assert_eq!(hero(&session).1, HERO_LEN);
}

#[test]
fn leaving_home_mid_typing_cancels_the_tick() {
    let mut session = session();
    session.navigate(Route::Home).unwrap();
    session.advance(150 * 3);

    session.navigate(Route::Contact).unwrap();
    assert_eq!(session.pending_timers(), 0);
    assert!(session.advance(5_000).is_empty());

    // Coming back starts over
    session.navigate(Route::Home).unwrap();
    assert_eq!(hero(&session).1, 0);
}

#[test]
fn hidden_timeline_entries_release_on_navigation() {
    let mut session = session();
    session.navigate(Route::About).unwrap();

    // Timeline entries and skill meters are all below the fold
    assert_eq!(session.live_observations(), 3 + folio_app::content::SKILLS.len());

    session.navigate(Route::Home).unwrap();
    assert_eq!(session.live_observations(), 0);
}

#[test]
fn scrolling_reveals_timeline_entries_once() {
    let mut session = session();
    session.navigate(Route::About).unwrap();

    let events = session.scroll_to(500.0);
    assert!(events.contains(&SessionEvent::Revealed(RevealedItem::TimelineEntry(0))));
    assert!(!events.contains(&SessionEvent::Revealed(RevealedItem::TimelineEntry(2))));

    session.scroll_to(0.0);
    let again = session.scroll_to(500.0);
    assert!(!again.contains(&SessionEvent::Revealed(RevealedItem::TimelineEntry(0))));

    let Some(PageView::About(about)) = session.snapshot().map(|s| s.body) else {
        panic!("expected the about page");
    };
    assert!(about.entries[0].shown);
    assert_eq!(about.entries[0].side, "left");
    assert_eq!(about.entries[1].side, "right");
    assert!(about.skills.iter().all(|s| s.fill_percent == 0));
}

#[test]
fn skill_meters_fill_when_scrolled_into_view() {
    let mut session = session();
    session.navigate(Route::About).unwrap();

    let events = session.scroll_to(1_600.0);
    assert!(events.contains(&SessionEvent::Revealed(RevealedItem::Skill("Java"))));

    let Some(PageView::About(about)) = session.snapshot().map(|s| s.body) else {
        panic!("expected the about page");
    };
    let java = about.skills.iter().find(|s| s.name == "Java").unwrap();
    assert_eq!(java.fill_percent, 90);
}

#[test]
fn theme_toggle_restyles_cards() {
    let mut session = session();
    session.navigate(Route::Projects).unwrap();
    session.scroll_to(600.0);

    let card_background = |session: &Session| match session.snapshot().map(|s| s.body) {
        Some(PageView::Projects(projects)) => projects.cards[0].background.clone(),
        other => panic!("expected the projects page, got {other:?}"),
    };

    assert_eq!(session.theme(), ColorScheme::Dark);
    assert_eq!(card_background(&session), Palette::dark().card_background.to_hex());

    assert_eq!(session.toggle_theme(), ColorScheme::Light);
    assert_eq!(session.restyle_count(), 1);
    assert_eq!(card_background(&session), Palette::light().card_background.to_hex());

    session.toggle_theme();
    assert_eq!(session.theme(), ColorScheme::Dark);
    assert_eq!(session.restyle_count(), 2);
}

#[test]
fn category_filter_keeps_card_state() {
    let mut session = session();
    session.navigate(Route::Projects).unwrap();
    session.scroll_to(600.0);

    session.select_category("Programming").unwrap();
    let Some(PageView::Projects(projects)) = session.snapshot().map(|s| s.body) else {
        panic!("expected the projects page");
    };
    assert_eq!(projects.selected, "Programming");
    let ids: Vec<u32> = projects.cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(projects.cards[0].shown);
    assert_eq!(session.live_observations(), 1);

    session.select_category("All").unwrap();
    let Some(PageView::Projects(projects)) = session.snapshot().map(|s| s.body) else {
        panic!("expected the projects page");
    };
    assert_eq!(projects.cards.len(), 4);
    assert_eq!(
        projects.categories,
        vec!["All", "Programming", "Machine Learning", "Web Design"]
    );
}

#[test]
fn copied_indicator_reverts_after_timeout() {
    let mut session = session();
    session.navigate(Route::Contact).unwrap();
    session.copy_email().unwrap();
    assert_eq!(session.clipboard(), Some("levi.mickelson@example.com"));

    let copied = |session: &Session| match session.snapshot().map(|s| s.body) {
        Some(PageView::Contact(contact)) => (contact.copied, contact.button_label),
        other => panic!("expected the contact page, got {other:?}"),
    };
    assert_eq!(copied(&session), (true, "Copied!"));

    session.advance(1_500);
    // Copying again restarts the countdown
    session.copy_email().unwrap();
    assert_eq!(session.pending_timers(), 1);

    assert!(session.advance(1_999).is_empty());
    assert_eq!(copied(&session), (true, "Copied!"));
    assert_eq!(session.advance(1).as_slice(), &[SessionEvent::CopyReset]);
    assert_eq!(copied(&session), (false, "Copy"));
}

#[test]
fn leaving_contact_cancels_the_reset() {
    let mut session = session();
    session.navigate(Route::Contact).unwrap();
    session.copy_email().unwrap();

    session.navigate(Route::About).unwrap();
    assert_eq!(session.page(), Some(Page::About));
    assert!(session.advance(3_000).is_empty());
}

#[test]
fn shutdown_leaves_nothing_behind() {
    let mut session = session();
    session.navigate(Route::About).unwrap();
    session.scroll_to(500.0);

    session.shutdown();
    assert_eq!(session.live_observations(), 0);
    assert_eq!(session.pending_timers(), 0);
    assert_eq!(session.page(), None);
    assert_eq!(session.theme_store().subscriber_count(), 0);

    session.shutdown();
}
