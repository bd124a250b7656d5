use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use dren_site::reveal::{
    AnimatedElement, ElementId, RevealAnimator, RevealPhase, RevealStyle, StyleSink, Transform,
};
use dren_site::scheduler::{ManualScheduler, Scheduler};

#[derive(Default)]
struct RecordingSink {
    applied: RefCell<Vec<(ElementId, RevealStyle)>>,
    detached: RefCell<HashSet<ElementId>>,
}

impl RecordingSink {
    fn detach(&self, id: ElementId) {
        self.detached.borrow_mut().insert(id);
    }

    fn styles_for(&self, id: ElementId) -> Vec<RevealStyle> {
        self.applied
            .borrow()
            .iter()
            .filter(|(target, _)| *target == id)
            .map(|(_, style)| style.clone())
            .collect()
    }
}

impl StyleSink for RecordingSink {
    fn is_attached(&self, id: ElementId) -> bool {
        !self.detached.borrow().contains(&id)
    }

    fn apply(&self, id: ElementId, style: &RevealStyle) {
        self.applied.borrow_mut().push((id, style.clone()));
    }
}

fn animator() -> (RevealAnimator, Rc<ManualScheduler>, Rc<RecordingSink>) {
    let scheduler = Rc::new(ManualScheduler::new());
    let sink = Rc::new(RecordingSink::default());
    let animator = RevealAnimator::new(
        scheduler.clone() as Rc<dyn Scheduler>,
        sink.clone() as Rc<dyn StyleSink>,
        50,
    );
    (animator, scheduler, sink)
}

#[test]
fn zoom_in_with_delay_follows_its_timeline() {
    let (animator, scheduler, sink) = animator();
    let id = animator.register(AnimatedElement::from_attributes(Some("zoom-in"), Some("200")));

    animator.on_visible(id);
    assert_eq!(animator.phase(id), Some(RevealPhase::Pending));

    scheduler.advance(199);
    assert_eq!(animator.phase(id), Some(RevealPhase::Pending));
    assert!(sink.styles_for(id).is_empty());

    scheduler.advance(1);
    assert_eq!(animator.phase(id), Some(RevealPhase::Animating));
    let start = animator.style(id).expect("animating style");
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.transform, Transform::Scale(0.9));

    scheduler.advance(49);
    assert_eq!(animator.phase(id), Some(RevealPhase::Animating));

    scheduler.advance(1);
    assert_eq!(scheduler.now(), 250);
    assert!(animator.has_animated(id));
    let rest = animator.style(id).expect("settled style");
    assert_eq!(rest.opacity, 1.0);
    assert_eq!(rest.transform, Transform::Scale(1.0));
    assert_eq!(rest.transform.css(), "scale(1)");

    assert_eq!(sink.styles_for(id), vec![start, rest]);
}

#[test]
fn repeated_visibility_animates_once() {
    let (animator, scheduler, sink) = animator();
    let id = animator.register(AnimatedElement::from_attributes(Some("fade-up"), None));

    animator.on_visible(id);
    animator.on_visible(id);
    assert_eq!(scheduler.pending(), 1);

    scheduler.advance(1_000);
    animator.on_visible(id);
    scheduler.advance(1_000);

    assert!(animator.has_animated(id));
    assert_eq!(sink.styles_for(id).len(), 2);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn elements_are_independent() {
    let (animator, scheduler, _sink) = animator();
    let first = animator.register(AnimatedElement::from_attributes(Some("fade-left"), Some("0")));
    let second = animator.register(AnimatedElement::from_attributes(Some("fade-right"), Some("100")));
    assert_eq!(animator.len(), 2);

    animator.on_visible(first);
    scheduler.advance(60);
    assert!(animator.has_animated(first));
    assert_eq!(animator.phase(second), Some(RevealPhase::Unseen));
    assert!(animator.style(second).is_none());
}

#[test]
fn detached_element_keeps_its_phase() {
    let (animator, scheduler, sink) = animator();
    let id = animator.register(AnimatedElement::from_attributes(Some("fade-down"), Some("100")));

    animator.on_visible(id);
    sink.detach(id);
    scheduler.advance(500);

    assert_eq!(animator.phase(id), Some(RevealPhase::Pending));
    assert!(sink.styles_for(id).is_empty());
}

#[test]
fn unknown_kind_appears_without_offset() {
    let (animator, scheduler, sink) = animator();
    let id = animator.register(AnimatedElement::from_attributes(Some("flip-left"), Some("abc")));

    animator.on_visible(id);
    scheduler.advance(50);

    assert!(animator.has_animated(id));
    let styles = sink.styles_for(id);
    assert_eq!(styles.len(), 2);
    assert!(styles
        .iter()
        .all(|style| style.opacity == 1.0 && style.transform == Transform::Identity));
}
