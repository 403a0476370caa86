//! Integration tests for visibility triggers over the headless viewport
//!
//! These tests verify that:
//! - Triggers reveal once and never flicker back
//! - Release leaves no live observation, however often it is called
//! - Lists of items tear down without leaking observers

use folio_core::Rect;
use folio_layout::headless::EntryBatch;
use folio_layout::{
    ElementId, HeadlessViewport, RevealList, RevealStyle, SkillMeter, VisibilityRegistry,
    REVEAL_THRESHOLD,
};

fn registry_with(rects: &[Rect]) -> (VisibilityRegistry<HeadlessViewport>, Vec<ElementId>) {
    let mut viewport = HeadlessViewport::new(800.0, 600.0);
    let elements = rects.iter().map(|r| viewport.insert_element(*r)).collect();
    (VisibilityRegistry::new(viewport), elements)
}

fn scroll(registry: &mut VisibilityRegistry<HeadlessViewport>, y: f32) -> usize {
    let entries = registry.host_mut().scroll_to(y);
    registry.deliver_all(entries).len()
}

fn flush(registry: &mut VisibilityRegistry<HeadlessViewport>) -> EntryBatch {
    registry.host_mut().flush()
}

#[test]
fn crossing_twice_reveals_once() {
    let (mut registry, elements) = registry_with(&[Rect::new(0.0, 1_000.0, 800.0, 200.0)]);
    let trigger = registry.attach(elements[0], REVEAL_THRESHOLD).unwrap();
    let initial = flush(&mut registry);
    registry.deliver_all(initial);

    assert_eq!(scroll(&mut registry, 700.0), 1);
    assert!(registry.is_revealed(trigger));

    assert_eq!(scroll(&mut registry, 0.0), 0);
    assert_eq!(scroll(&mut registry, 700.0), 0);
    assert!(registry.is_revealed(trigger));
    assert_eq!(registry.host().observation_count(), 0);
}

#[test]
fn visible_on_mount_reveals_on_first_flush() {
    let (mut registry, elements) = registry_with(&[Rect::new(0.0, 100.0, 800.0, 200.0)]);
    let trigger = registry.attach(elements[0], REVEAL_THRESHOLD).unwrap();
    assert!(!registry.is_revealed(trigger));

    let entries = flush(&mut registry);
    assert_eq!(registry.deliver_all(entries).as_slice(), &[trigger]);
}

#[test]
fn release_any_number_of_times() {
    for releases in 0..4 {
        let (mut registry, elements) = registry_with(&[Rect::new(0.0, 5_000.0, 800.0, 200.0)]);
        let trigger = registry.attach(elements[0], REVEAL_THRESHOLD).unwrap();

        for _ in 0..releases {
            registry.release(trigger);
        }
        if releases == 0 {
            assert_eq!(registry.host().observation_count(), 1);
            registry.release_all();
        }

        assert_eq!(registry.host().observation_count(), 0, "releases={releases}");
        assert!(registry.is_empty());
    }
}

#[test]
fn never_attached_element_is_silent() {
    let mut viewport = HeadlessViewport::new(800.0, 600.0);
    let orphan = viewport.create_element();
    let mut registry = VisibilityRegistry::new(viewport);

    let trigger = registry.attach(orphan, REVEAL_THRESHOLD).unwrap();
    for y in [0.0, 500.0, 5_000.0] {
        assert_eq!(scroll(&mut registry, y), 0);
    }
    assert!(!registry.is_revealed(trigger));
    assert!(registry.release(trigger));
    assert_eq!(registry.host().observation_count(), 0);
}

#[test]
fn element_detached_before_reveal_can_still_be_released() {
    let (mut registry, elements) = registry_with(&[Rect::new(0.0, 2_000.0, 800.0, 200.0)]);
    let trigger = registry.attach(elements[0], REVEAL_THRESHOLD).unwrap();

    registry.host_mut().detach_element(elements[0]);
    assert_eq!(scroll(&mut registry, 2_000.0), 0);

    registry.release(trigger);
    assert_eq!(registry.host().observation_count(), 0);
}

#[test]
fn three_hidden_items_leave_no_observers_after_teardown() {
    let (mut registry, elements) = registry_with(&[
        Rect::new(0.0, 3_000.0, 800.0, 200.0),
        Rect::new(0.0, 3_300.0, 800.0, 200.0),
        Rect::new(0.0, 3_600.0, 800.0, 200.0),
    ]);
    let mut list = RevealList::new(REVEAL_THRESHOLD).unwrap();
    for (index, element) in elements.iter().enumerate() {
        list.mount(&mut registry, index, *element);
    }
    assert_eq!(registry.host().observation_count(), 3);

    list.unmount_all(&mut registry);

    assert_eq!(registry.host().observation_count(), 0);
    assert_eq!(registry.pending_observations(), 0);
    assert!(registry.is_empty());
}

#[test]
fn list_items_reveal_independently() {
    let (mut registry, elements) = registry_with(&[
        Rect::new(0.0, 700.0, 800.0, 200.0),
        Rect::new(0.0, 1_400.0, 800.0, 200.0),
    ]);
    let mut list = RevealList::new(REVEAL_THRESHOLD).unwrap();
    list.mount(&mut registry, "intern", elements[0]);
    list.mount(&mut registry, "developer", elements[1]);

    scroll(&mut registry, 400.0);
    assert_eq!(list.style(&registry, &"intern"), RevealStyle::Shown);
    assert_eq!(list.style(&registry, &"developer"), RevealStyle::Hidden);

    let meter = SkillMeter::new(90).unwrap();
    assert_eq!(meter.fill_percent(list.is_revealed(&registry, &"developer")), 0);

    scroll(&mut registry, 1_200.0);
    assert_eq!(list.style(&registry, &"developer"), RevealStyle::Shown);
    assert_eq!(meter.fill_percent(list.is_revealed(&registry, &"developer")), 90);

    assert!(list.unmount(&mut registry, &"intern"));
    assert!(!list.unmount(&mut registry, &"intern"));
}
