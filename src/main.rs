//! swipe-stack demo
//!
//! Builds a small deck, replays scripted gestures and button presses against
//! it and logs what the host application would receive.
//!
//! Usage: `swipe-stack [config.toml]` (log level from `RUST_LOG`, default info)

use std::error::Error;
use std::path::Path;
use std::time::Duration;

use log::{info, warn};

use swipe_stack::domain::core::Point;
use swipe_stack::input::drag_gesture;
use swipe_stack::ui::{CardViewBinder, ImageLoader, StackRenderer};
use swipe_stack::{
    ActionRequest, Card, CardKey, ScreenMetrics, StackConfig, StackController, StackEvent,
    UserRecord,
};

const FRAME: Duration = Duration::from_millis(16);
const DEMO_SCREEN_WIDTH: u32 = 1080;
const DEMO_DENSITY: f32 = 2.625;
/// Button tags as laid out on the host's action bar
const DEMO_PASS_TAG: u8 = 2;
const DEMO_APPROVE_TAG: u8 = 3;

/// Stands in for the host's image service
struct LoggingImageLoader;

impl ImageLoader for LoggingImageLoader {
    fn load(&mut self, url: &str, target: &CardKey) {
        info!("image loader: fetching {url} for card {target}");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    let config = match std::env::args().nth(1) {
        Some(path) => StackConfig::load(Path::new(&path))?,
        None => StackConfig::default(),
    };
    let metrics = ScreenMetrics::new(DEMO_SCREEN_WIDTH, DEMO_DENSITY);
    let mut stack = StackController::from_config(&config, &metrics)?;
    let mut binder = CardViewBinder::new(LoggingImageLoader);

    for record in demo_users() {
        let mut card = Card::for_record(&record);
        binder.bind(&mut card, Some(&record));
        stack.push(card)?;
    }
    dispatch(&mut stack);

    let width = metrics.width_px as f32;
    let grab = Point::new(width / 2.0, 200.0);

    info!("--- drag the top card far left");
    replay_drag(&mut stack, grab, Point::new(-width * 0.2, 220.0));

    info!("--- drag the top card far right");
    replay_drag(&mut stack, grab, Point::new(width * 1.2, 180.0));

    info!("--- short drag, card snaps back");
    replay_drag(&mut stack, grab, Point::new(width * 0.6, 260.0));

    info!("--- drag a card that is not on top");
    if let Some(bottom) = stack.cards().first().map(|card| card.key().clone()) {
        let consumed = drag_gesture(&bottom, grab, Point::new(0.0, 200.0), 8)
            .iter()
            .filter(|event| stack.handle_pointer(event))
            .count();
        info!("{consumed} samples consumed for non-top card {bottom}");
    }

    info!("--- approve, then pass twice in a row");
    for (tag, repeat) in [(DEMO_APPROVE_TAG, false), (DEMO_PASS_TAG, false), (DEMO_PASS_TAG, true)] {
        let Some(action) = ActionRequest::from_button_tag(tag) else {
            warn!("button tag {tag} has no action");
            continue;
        };
        if !stack.handle_action(action) && repeat {
            info!("{action:?} ignored while the first card is flying off");
        }
    }
    stack.settle(FRAME);
    dispatch(&mut stack);

    let pixmap = StackRenderer::new().render(&stack, config.badge_rotation_degrees)?;
    info!(
        "final frame {}x{} with {} card(s) left",
        pixmap.width(),
        pixmap.height(),
        stack.len()
    );
    Ok(())
}

fn replay_drag(stack: &mut StackController, from: Point, to: Point) {
    let Some(top) = stack.top_card().map(|card| card.key().clone()) else {
        warn!("stack is empty, nothing to drag");
        return;
    };
    let events = drag_gesture(&top, from, to, 12);
    for event in &events {
        stack.handle_pointer(event);
    }
    if let Some(last) = events.iter().rev().find_map(|event| event.kind.point()) {
        info!("card {top} released at ({:.0}, {:.0})", last.x, last.y);
    }
    stack.settle(FRAME);
    dispatch(stack);
}

/// Forwards controller events the way a host application would
fn dispatch(stack: &mut StackController) {
    for event in stack.drain_events() {
        match event {
            StackEvent::TopCardMoved { .. } => {}
            StackEvent::CardSwiped(outcome) => info!("card swiped: {outcome:?}"),
            StackEvent::ApprovalRequested { display_name, .. } => {
                info!("showing approval dialog for {display_name}")
            }
            StackEvent::TopCardChanged(Some(key)) => info!("prefetching for new top card {key}"),
            StackEvent::TopCardChanged(None) => info!("stack is empty"),
            StackEvent::Animation(lifecycle) => log::debug!("animation: {lifecycle:?}"),
        }
    }
}

fn demo_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new("Ada Lovelace", "ada").with_avatar("https://example.com/avatars/ada.png"),
        UserRecord::new("Grace Hopper", "grace").with_avatar("https://example.com/avatars/grace.png"),
        UserRecord::new("Alan Turing", "alan"),
        UserRecord::new("Edsger Dijkstra", "edsger").with_avatar(""),
        UserRecord::new("Barbara Liskov", "barbara"),
    ]
}
