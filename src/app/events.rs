//! Notifications emitted by the stack controller
//!
//! The host drains these after each input sample or frame and forwards them
//! to its own listeners (image prefetch, approval dialog, analytics).

use crate::app::gesture::SwipeOutcome;
use crate::domain::card::CardKey;
use crate::ui::animator::AnimationEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum StackEvent {
    /// The top card moved under the finger; also sent once on release.
    ///
    /// `hint` is the card's horizontal offset at that moment. It is advisory;
    /// listeners should use it only as a "drag in progress" signal.
    TopCardMoved { hint: f32 },
    /// A drag or delete/pass action completed with this outcome
    CardSwiped(SwipeOutcome),
    /// The approval flow should be shown for this card
    ApprovalRequested { key: CardKey, display_name: String },
    /// The card on top of the stack changed
    TopCardChanged(Option<CardKey>),
    /// Animation lifecycle
    Animation(AnimationEvent),
}
