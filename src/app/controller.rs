//! Stack controller and coordination layer
//!
//! The controller owns the ordered cards and routes every mutation: pointer
//! samples go through the top-card and animating guards before reaching the
//! gesture machine, outcomes start animations, and finished fly-offs remove
//! their card. It runs on the host's event-loop thread only.

use std::mem;
use std::time::Duration;

use log::{debug, info};

use crate::app::events::StackEvent;
use crate::app::gesture::{GestureController, GesturePhase, SwipeOutcome};
use crate::config::{ConfigError, Layout, ScreenMetrics, StackConfig};
use crate::domain::card::{Card, CardKey};
use crate::domain::core::{Badge, Point, SwipeDirection};
use crate::domain::geometry::Geometry;
use crate::input::pointer::{ActionRequest, PointerEvent, PointerKind};
use crate::ui::animator::{AnimationEvent, AnimationKind, Animator};

/// Errors when inserting cards
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StackError {
    #[error("Card '{0}' is already in the stack")]
    DuplicateCard(CardKey),

    #[error("Card key must not be empty")]
    EmptyKey,
}

/// Owner of the card stack
///
/// Cards are ordered bottom to top; the last one is the only card that
/// reacts to input. While a fly-off runs, `animating_card` holds its key
/// and all pointer input and actions are ignored.
#[derive(Debug)]
pub struct StackController {
    cards: Vec<Card>,
    layout: Layout,
    gesture: GestureController,
    animator: Animator,
    animating_card: Option<CardKey>,
    notified_top: Option<CardKey>,
    events: Vec<StackEvent>,
}

impl StackController {
    /// Creates an empty stack for a resolved layout
    pub fn new(layout: Layout, max_rotation: f32, duration: Duration) -> Self {
        let geometry = Geometry::with_max_rotation(layout.container_width, layout.padding, max_rotation);
        Self {
            cards: Vec::new(),
            layout,
            gesture: GestureController::new(geometry, layout.card),
            animator: Animator::new(layout.container_width, duration),
            animating_card: None,
            notified_top: None,
            events: Vec::new(),
        }
    }

    /// Creates an empty stack from configuration and screen metrics
    pub fn from_config(config: &StackConfig, metrics: &ScreenMetrics) -> Result<Self, ConfigError> {
        let layout = config.layout(metrics)?;
        Ok(Self::new(layout, config.card_rotation_degrees, config.animation_duration()))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, key: &CardKey) -> Option<&Card> {
        self.cards.iter().find(|card| card.key() == key)
    }

    /// The only card eligible for input
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// True while a fly-off is in flight
    pub fn is_animating(&self) -> bool {
        self.animating_card.is_some()
    }

    pub fn animating_card(&self) -> Option<&CardKey> {
        self.animating_card.as_ref()
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Takes all notifications emitted since the last call
    pub fn drain_events(&mut self) -> Vec<StackEvent> {
        mem::take(&mut self.events)
    }

    /// Puts a card on top of the stack
    ///
    /// A drag in progress on the previous top card is cancelled into a reset.
    pub fn push(&mut self, card: Card) -> Result<(), StackError> {
        self.check_insertable(&card)?;
        if let Some(outcome) = self.gesture.cancel() {
            self.finish_drag(outcome);
        }
        self.cards.push(card);
        self.notify_top_change();
        Ok(())
    }

    /// Slides a card underneath the deck
    pub fn push_bottom(&mut self, card: Card) -> Result<(), StackError> {
        self.check_insertable(&card)?;
        self.cards.insert(0, card);
        self.notify_top_change();
        Ok(())
    }

    fn check_insertable(&self, card: &Card) -> Result<(), StackError> {
        if card.key().is_empty() {
            return Err(StackError::EmptyKey);
        }
        if self.card(card.key()).is_some() {
            return Err(StackError::DuplicateCard(card.key().clone()));
        }
        Ok(())
    }

    /// Removes a card by key; a missing card is a no-op
    ///
    /// A running fly-off of the removed card keeps going and finishes into a
    /// no-op removal, which is also when the animating flag clears.
    pub fn remove(&mut self, key: &CardKey) -> Option<Card> {
        let Some(index) = self.cards.iter().position(|card| card.key() == key) else {
            debug!("remove: card {} not in stack", key);
            return None;
        };

        let was_top = index + 1 == self.cards.len();
        let card = self.cards.remove(index);
        if let Some(kind) = self.animator.running(key) {
            debug!("remove: card {} left the stack with {:?} still running", key, kind);
        }
        if was_top && self.gesture.is_dragging() {
            debug!("remove: dropping drag session of card {}", key);
            self.gesture.settle();
        }
        self.notify_top_change();
        Some(card)
    }

    /// Dispatches a pointer sample
    ///
    /// Returns true when the sample was consumed. Samples for any card other
    /// than the top one, or arriving while a fly-off runs, are not consumed
    /// and change nothing.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let Some(top) = self.cards.last_mut() else {
            return false;
        };
        if top.key() != &event.target {
            debug!("pointer {:?} for non-top card {} ignored", event.kind, event.target);
            return false;
        }
        if self.animating_card.is_some() {
            debug!("pointer {:?} ignored while a card is animating", event.kind);
            return false;
        }

        match event.kind {
            PointerKind::Press { x, y } => {
                // Grabbing a card mid-snap-back freezes it where it is
                if let Some(cancelled) = self.animator.cancel(&event.target) {
                    self.events.push(StackEvent::Animation(cancelled));
                }
                self.gesture.press(Point::new(x, y));
                true
            }
            PointerKind::Move { x, y } => {
                match self.gesture.drag(Point::new(x, y), &mut top.visual) {
                    Some(hint) => {
                        self.events.push(StackEvent::TopCardMoved { hint });
                        true
                    }
                    None => false,
                }
            }
            PointerKind::Release => match self.gesture.release(&top.visual) {
                Some(outcome) => {
                    self.finish_drag(outcome);
                    true
                }
                None => false,
            },
            PointerKind::Cancel => match self.gesture.cancel() {
                Some(outcome) => {
                    self.finish_drag(outcome);
                    true
                }
                None => false,
            },
        }
    }

    /// Applies a button request to the top card
    ///
    /// Returns true when the request had an effect.
    pub fn handle_action(&mut self, action: ActionRequest) -> bool {
        match action {
            ActionRequest::RequestDelete => self.dismiss_top_with(SwipeDirection::Left, Badge::Delete),
            ActionRequest::RequestPass => self.dismiss_top_with(SwipeDirection::Left, Badge::Pass),
            ActionRequest::RequestApprove => {
                if self.animating_card.is_some() {
                    return false;
                }
                match self.cards.last() {
                    Some(top) => {
                        let key = top.key().clone();
                        self.request_approval(&key);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Dismisses the top card in a direction
    ///
    /// No-op (returns false) if the stack is empty or a card is already
    /// flying off, so rapid repeated triggers remove exactly one card.
    pub fn dismiss_top(&mut self, direction: SwipeDirection) -> bool {
        let badge = match direction {
            SwipeDirection::Left => Badge::Delete,
            SwipeDirection::Right => Badge::Approve,
        };
        self.dismiss_top_with(direction, badge)
    }

    fn dismiss_top_with(&mut self, direction: SwipeDirection, badge: Badge) -> bool {
        if self.animating_card.is_some() {
            debug!("dismiss ignored: a card is already animating");
            return false;
        }
        let Some(top) = self.cards.last_mut() else {
            return false;
        };

        // Flash of confirmation before the card leaves
        top.visual.set_badge(badge, 1.0);
        let key = top.key().clone();
        let outcome = SwipeOutcome::from_direction(direction);
        if direction == SwipeDirection::Right {
            self.request_approval(&key);
        }
        self.events.push(StackEvent::CardSwiped(outcome));
        self.start_dismiss(key, direction);
        true
    }

    fn finish_drag(&mut self, outcome: SwipeOutcome) {
        let Some(top) = self.cards.last_mut() else {
            return;
        };
        let key = top.key().clone();
        self.events.push(StackEvent::TopCardMoved { hint: top.visual.x });

        match outcome.direction() {
            None => {
                self.events.push(StackEvent::CardSwiped(outcome));
                let lifecycle = self.animator.reset(&key, &mut top.visual);
                self.events.extend(lifecycle.into_iter().map(StackEvent::Animation));
            }
            Some(direction) => {
                if direction == SwipeDirection::Right {
                    self.request_approval(&key);
                }
                self.events.push(StackEvent::CardSwiped(outcome));
                self.start_dismiss(key, direction);
            }
        }
    }

    fn start_dismiss(&mut self, key: CardKey, direction: SwipeDirection) {
        let Some(card) = self.cards.iter().find(|card| card.key() == &key) else {
            return;
        };
        // Flag goes up before the first frame is produced
        self.animating_card = Some(key.clone());
        self.gesture.dismissing(direction);
        let lifecycle = self.animator.dismiss(&key, &card.visual, direction);
        info!("dismissing card {} to the {:?}", key, direction);
        self.events.extend(lifecycle.into_iter().map(StackEvent::Animation));
    }

    fn request_approval(&mut self, key: &CardKey) {
        let display_name = self
            .card(key)
            .map(|card| card.display_name().to_string())
            .unwrap_or_default();
        info!("approval requested for card {}", key);
        self.events.push(StackEvent::ApprovalRequested {
            key: key.clone(),
            display_name,
        });
    }

    /// Advances running animations by `dt` of the host's frame clock
    pub fn advance(&mut self, dt: Duration) {
        for frame in self.animator.advance(dt) {
            if let Some(card) = self.cards.iter_mut().find(|card| card.key() == &frame.key) {
                frame.transform.apply_to(&mut card.visual);
            }
            if !frame.finished {
                continue;
            }

            match frame.kind {
                AnimationKind::Reset => {
                    if self.gesture.phase() == GesturePhase::Resetting {
                        self.gesture.settle();
                    }
                }
                AnimationKind::Dismiss(_) => {
                    // Removal first, then the flag clears
                    self.remove(&frame.key);
                    if self.animating_card.as_ref() == Some(&frame.key) {
                        self.animating_card = None;
                    }
                    self.gesture.settle();
                }
            }
            self.events.push(StackEvent::Animation(AnimationEvent::Ended {
                key: frame.key,
                kind: frame.kind,
            }));
        }
    }

    /// Advances animations until none are left running
    pub fn settle(&mut self, frame: Duration) {
        let frame = if frame.is_zero() { Duration::from_millis(16) } else { frame };
        while !self.animator.is_idle() {
            self.advance(frame);
        }
    }

    fn notify_top_change(&mut self) {
        let current = self.cards.last().map(|card| card.key().clone());
        if current != self.notified_top {
            info!(
                "top card changed to {}",
                current.as_ref().map(CardKey::as_str).unwrap_or("<none>")
            );
            self.notified_top = current.clone();
            self.events.push(StackEvent::TopCardChanged(current));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::core::Size;
    use crate::input::pointer::drag_gesture;

    const FRAME: Duration = Duration::from_millis(16);

    fn layout() -> Layout {
        Layout {
            container_width: 1000.0,
            card: Size::new(1000.0, 800.0),
            padding: 16.0,
        }
    }

    fn stack_of(keys: &[&str]) -> StackController {
        let mut stack = StackController::new(layout(), 40.0, Duration::from_millis(700));
        for key in keys {
            let mut card = Card::new(CardKey::new(*key));
            card.fields.display_name = key.to_uppercase();
            stack.push(card).unwrap();
        }
        stack.drain_events();
        stack
    }

    fn keys(stack: &StackController) -> Vec<&str> {
        stack.cards().iter().map(|card| card.key().as_str()).collect()
    }

    fn drag(stack: &mut StackController, key: &str, dx: f32) -> Vec<bool> {
        let key = CardKey::new(key);
        drag_gesture(&key, Point::new(500.0, 100.0), Point::new(500.0 + dx, 100.0), 5)
            .iter()
            .map(|event| stack.handle_pointer(event))
            .collect()
    }

    fn swipes(events: &[StackEvent]) -> Vec<SwipeOutcome> {
        events
            .iter()
            .filter_map(|event| match event {
                StackEvent::CardSwiped(outcome) => Some(*outcome),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn top_card_is_last() {
        let stack = stack_of(&["a", "b", "c"]);
        assert_eq!(stack.top_card().map(|card| card.key().as_str()), Some("c"));
        assert!(stack_of(&[]).top_card().is_none());
    }

    #[test]
    fn push_rejects_duplicates_and_empty_keys() {
        let mut stack = stack_of(&["a"]);
        assert_eq!(
            stack.push(Card::new(CardKey::new("a"))),
            Err(StackError::DuplicateCard(CardKey::new("a")))
        );
        assert_eq!(stack.push_bottom(Card::new(CardKey::new(""))), Err(StackError::EmptyKey));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn push_bottom_keeps_top() {
        let mut stack = stack_of(&["a"]);
        stack.push_bottom(Card::new(CardKey::new("z"))).unwrap();

        assert_eq!(keys(&stack), vec!["z", "a"]);
        // Top did not change, nothing to notify
        assert!(stack.drain_events().is_empty());
    }

    #[test]
    fn left_drag_dismisses_after_animation() {
        let mut stack = stack_of(&["a", "b", "c"]);

        assert!(drag(&mut stack, "c", -450.0).iter().all(|consumed| *consumed));
        assert_eq!(stack.gesture_phase(), GesturePhase::DismissingLeft);
        assert!(stack.is_animating());
        // Still present until the fly-off completes
        assert_eq!(stack.len(), 3);

        stack.settle(FRAME);

        assert_eq!(keys(&stack), vec!["a", "b"]);
        assert!(!stack.is_animating());
        assert_eq!(stack.gesture_phase(), GesturePhase::Idle);

        let events = stack.drain_events();
        assert_eq!(swipes(&events), vec![SwipeOutcome::DismissedLeft]);
        assert!(events.contains(&StackEvent::TopCardChanged(Some(CardKey::new("b")))));
        assert!(!events.iter().any(|event| matches!(event, StackEvent::ApprovalRequested { .. })));
    }

    #[test]
    fn right_drag_requests_approval_before_removal() {
        let mut stack = stack_of(&["a", "b"]);
        drag(&mut stack, "b", 450.0);

        let events = stack.drain_events();
        assert!(events.contains(&StackEvent::ApprovalRequested {
            key: CardKey::new("b"),
            display_name: "B".to_string(),
        }));
        assert_eq!(swipes(&events), vec![SwipeOutcome::DismissedRight]);
        assert_eq!(stack.len(), 2);

        stack.settle(FRAME);
        assert_eq!(keys(&stack), vec!["a"]);
        let events = stack.drain_events();
        assert!(events.contains(&StackEvent::TopCardChanged(Some(CardKey::new("a")))));
    }

    #[test]
    fn short_drag_resets_card() {
        let mut stack = stack_of(&["a"]);
        drag(&mut stack, "a", 200.0);

        let top = stack.top_card().unwrap();
        assert_eq!(top.visual.approve_alpha, 0.0);
        assert_eq!(top.visual.delete_alpha, 0.0);
        assert!(!stack.is_animating());
        assert_eq!(stack.gesture_phase(), GesturePhase::Resetting);

        stack.settle(FRAME);

        let top = stack.top_card().unwrap();
        assert!(top.visual.is_at_rest());
        assert_eq!(stack.gesture_phase(), GesturePhase::Idle);
        assert_eq!(swipes(&stack.drain_events()), vec![SwipeOutcome::Reset]);
    }

    #[test]
    fn move_notifies_on_every_sample_and_release() {
        let mut stack = stack_of(&["a"]);
        drag(&mut stack, "a", 100.0);

        let moved = stack
            .drain_events()
            .iter()
            .filter(|event| matches!(event, StackEvent::TopCardMoved { .. }))
            .count();
        // Five moves plus one on release
        assert_eq!(moved, 6);
    }

    #[test]
    fn input_for_non_top_cards_is_ignored() {
        let mut stack = stack_of(&["a", "b", "c"]);

        assert!(drag(&mut stack, "a", -450.0).iter().all(|consumed| !consumed));
        assert!(drag(&mut stack, "b", -450.0).iter().all(|consumed| !consumed));
        stack.settle(FRAME);

        assert_eq!(keys(&stack), vec!["a", "b", "c"]);
        assert!(stack.drain_events().is_empty());
        assert!(stack.cards().iter().all(|card| card.visual.is_at_rest()));

        drag(&mut stack, "c", -450.0);
        stack.settle(FRAME);
        assert_eq!(keys(&stack), vec!["a", "b"]);
    }

    #[test]
    fn input_ignored_while_animating() {
        let mut stack = stack_of(&["a", "b"]);
        drag(&mut stack, "b", -450.0);
        stack.drain_events();

        assert!(!stack.handle_pointer(&PointerEvent::press(&CardKey::new("b"), 10.0, 10.0)));
        assert!(!stack.handle_pointer(&PointerEvent::moved(&CardKey::new("b"), 90.0, 10.0)));
        assert!(stack.drain_events().is_empty());

        stack.settle(FRAME);
        // The next card is interactive once the flag clears
        assert!(stack.handle_pointer(&PointerEvent::press(&CardKey::new("a"), 10.0, 10.0)));
    }

    #[test]
    fn dismiss_top_is_idempotent_while_animating() {
        let mut stack = stack_of(&["a", "b", "c"]);

        assert!(stack.dismiss_top(SwipeDirection::Left));
        stack.advance(Duration::from_millis(100));
        assert!(!stack.dismiss_top(SwipeDirection::Left));
        assert!(!stack.handle_action(ActionRequest::RequestDelete));

        stack.settle(FRAME);
        assert_eq!(keys(&stack), vec!["a", "b"]);
        assert_eq!(swipes(&stack.drain_events()), vec![SwipeOutcome::DismissedLeft]);
    }

    #[test]
    fn dismiss_top_on_empty_stack() {
        let mut stack = stack_of(&[]);
        assert!(!stack.dismiss_top(SwipeDirection::Right));
        assert!(stack.drain_events().is_empty());
    }

    #[test]
    fn actions_flash_matching_badge() {
        let mut stack = stack_of(&["a", "b"]);
        assert!(stack.handle_action(ActionRequest::RequestPass));
        assert_eq!(stack.top_card().unwrap().visual.pass_alpha, 1.0);
        assert_eq!(stack.top_card().unwrap().visual.delete_alpha, 0.0);
        stack.settle(FRAME);

        assert!(stack.handle_action(ActionRequest::RequestDelete));
        assert_eq!(stack.top_card().unwrap().visual.delete_alpha, 1.0);
        stack.settle(FRAME);

        assert!(stack.is_empty());
        assert_eq!(
            swipes(&stack.drain_events()),
            vec![SwipeOutcome::DismissedLeft, SwipeOutcome::DismissedLeft]
        );
    }

    #[test]
    fn approve_action_keeps_card() {
        let mut stack = stack_of(&["a"]);
        assert!(stack.handle_action(ActionRequest::RequestApprove));
        stack.settle(FRAME);

        assert_eq!(stack.len(), 1);
        assert_eq!(
            stack.drain_events(),
            vec![StackEvent::ApprovalRequested {
                key: CardKey::new("a"),
                display_name: "A".to_string(),
            }]
        );
    }

    #[test]
    fn press_interrupts_reset() {
        let mut stack = stack_of(&["a"]);
        drag(&mut stack, "a", 200.0);
        stack.advance(Duration::from_millis(100));

        let key = CardKey::new("a");
        assert!(stack.handle_pointer(&PointerEvent::press(&key, 500.0, 100.0)));
        let before = stack.top_card().unwrap().visual;
        stack.advance(Duration::from_millis(700));

        // Reset track was cancelled, nothing moves the card anymore
        assert_eq!(stack.top_card().unwrap().visual, before);
        assert!(matches!(stack.gesture_phase(), GesturePhase::Dragging(_)));
    }

    #[test]
    fn cancel_forces_reset() {
        let mut stack = stack_of(&["a"]);
        let key = CardKey::new("a");
        stack.handle_pointer(&PointerEvent::press(&key, 500.0, 100.0));
        stack.handle_pointer(&PointerEvent::moved(&key, 50.0, 100.0));

        assert!(stack.handle_pointer(&PointerEvent::cancel(&key)));
        stack.settle(FRAME);

        assert_eq!(stack.len(), 1);
        assert!(stack.top_card().unwrap().visual.is_at_rest());
        assert_eq!(swipes(&stack.drain_events()), vec![SwipeOutcome::Reset]);
    }

    #[test]
    fn release_without_press_is_not_consumed() {
        let mut stack = stack_of(&["a"]);
        assert!(!stack.handle_pointer(&PointerEvent::release(&CardKey::new("a"))));
        assert!(stack.drain_events().is_empty());
    }

    #[test]
    fn remove_is_idempotent_and_notifies() {
        let mut stack = stack_of(&["a", "b"]);

        assert!(stack.remove(&CardKey::new("b")).is_some());
        assert!(stack.remove(&CardKey::new("b")).is_none());
        assert_eq!(
            stack.drain_events(),
            vec![StackEvent::TopCardChanged(Some(CardKey::new("a")))]
        );

        stack.remove(&CardKey::new("a"));
        assert_eq!(stack.drain_events(), vec![StackEvent::TopCardChanged(None)]);
    }

    #[test]
    fn removal_during_fly_off_finishes_as_no_op() {
        let mut stack = stack_of(&["a", "b"]);
        stack.dismiss_top(SwipeDirection::Left);
        stack.advance(Duration::from_millis(100));

        // Detached before the animation ends
        stack.remove(&CardKey::new("b"));
        assert!(stack.is_animating());

        stack.settle(FRAME);
        assert_eq!(keys(&stack), vec!["a"]);
        assert!(!stack.is_animating());
    }

    #[test]
    fn removing_dragged_top_drops_session() {
        let mut stack = stack_of(&["a", "b"]);
        let key = CardKey::new("b");
        stack.handle_pointer(&PointerEvent::press(&key, 500.0, 100.0));

        stack.remove(&key);
        assert_eq!(stack.gesture_phase(), GesturePhase::Idle);
        assert!(!stack.handle_pointer(&PointerEvent::release(&key)));
    }

    #[test]
    fn push_on_top_cancels_drag() {
        let mut stack = stack_of(&["a"]);
        let key = CardKey::new("a");
        stack.handle_pointer(&PointerEvent::press(&key, 500.0, 100.0));
        stack.handle_pointer(&PointerEvent::moved(&key, 600.0, 100.0));

        stack.push(Card::new(CardKey::new("b"))).unwrap();
        stack.settle(FRAME);

        assert!(stack.card(&key).unwrap().visual.is_at_rest());
        let events = stack.drain_events();
        assert_eq!(swipes(&events), vec![SwipeOutcome::Reset]);
        assert!(events.contains(&StackEvent::TopCardChanged(Some(CardKey::new("b")))));
    }

    #[test]
    fn animation_lifecycle_is_reported() {
        let mut stack = stack_of(&["a"]);
        stack.dismiss_top(SwipeDirection::Right);
        stack.settle(FRAME);

        let lifecycle: Vec<AnimationEvent> = stack
            .drain_events()
            .into_iter()
            .filter_map(|event| match event {
                StackEvent::Animation(event) => Some(event),
                _ => None,
            })
            .collect();
        let kind = AnimationKind::Dismiss(SwipeDirection::Right);
        assert_eq!(
            lifecycle,
            vec![
                AnimationEvent::Started { key: CardKey::new("a"), kind },
                AnimationEvent::Ended { key: CardKey::new("a"), kind },
            ]
        );
    }

    #[test]
    fn from_config_uses_metrics() {
        let metrics = ScreenMetrics::new(1080, 2.0);
        let stack = StackController::from_config(&StackConfig::default(), &metrics).unwrap();
        assert_eq!(stack.layout().container_width, 1080.0);
        assert_eq!(stack.layout().padding, 32.0);
    }

    fn lifecycle(events: Vec<StackEvent>) -> Vec<AnimationEvent> {
        events
            .into_iter()
            .filter_map(|event| match event {
                StackEvent::Animation(event) => Some(event),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn dismiss_ending_off_frame_boundary_removes_only_once() {
        let mut stack = stack_of(&["a", "b"]);
        stack.dismiss_top(SwipeDirection::Left);

        stack.advance(Duration::from_nanos(699_999_990));
        assert_eq!(keys(&stack), vec!["a", "b"]);
        assert!(stack.is_animating());

        stack.advance(FRAME);
        assert_eq!(keys(&stack), vec!["a"]);
        assert!(!stack.is_animating());

        // A re-added card with the same key must not be hit by a stale track
        stack.push(Card::new(CardKey::new("b"))).unwrap();
        stack.advance(FRAME);
        assert_eq!(keys(&stack), vec!["a", "b"]);

        let ended = lifecycle(stack.drain_events())
            .into_iter()
            .filter(|event| matches!(event, AnimationEvent::Ended { .. }))
            .count();
        assert_eq!(ended, 1);
    }

    #[test]
    fn press_during_snap_back_reports_cancellation() {
        let mut stack = stack_of(&["a"]);
        let key = CardKey::new("a");
        stack.handle_pointer(&PointerEvent::press(&key, 500.0, 100.0));
        stack.handle_pointer(&PointerEvent::moved(&key, 600.0, 100.0));
        stack.handle_pointer(&PointerEvent::release(&key));
        stack.advance(FRAME);
        stack.drain_events();

        assert!(stack.handle_pointer(&PointerEvent::press(&key, 550.0, 100.0)));
        assert_eq!(
            lifecycle(stack.drain_events()),
            vec![AnimationEvent::Cancelled {
                key: key.clone(),
                kind: AnimationKind::Reset
            }]
        );

        // Releasing again starts a fresh snap-back that ends normally
        stack.handle_pointer(&PointerEvent::release(&key));
        stack.settle(FRAME);
        assert_eq!(
            lifecycle(stack.drain_events()),
            vec![
                AnimationEvent::Started { key: key.clone(), kind: AnimationKind::Reset },
                AnimationEvent::Ended { key, kind: AnimationKind::Reset },
            ]
        );
    }
}
