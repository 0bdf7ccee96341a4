//! Card stack rendering
//!
//! Draws the stack with tiny-skia into an offscreen pixmap the host can blit.
//! Layout calculation is separated from rasterization so the geometry can be
//! tested without inspecting pixels.

use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Rect as SkiaRect, Stroke, Transform};

use crate::app::controller::StackController;
use crate::domain::core::{Badge, CardVisualState, Size};

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("Failed to create pixmap for rendering")]
    PixmapCreationFailed,

    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidCanvasDimensions { width: f32, height: f32 },
}

/// A badge rectangle in card-local coordinates
#[derive(Debug, Clone)]
pub struct BadgeQuad {
    pub badge: Badge,
    pub rect: SkiaRect,
    /// Fixed tilt in degrees around the badge center
    pub tilt: f32,
    pub color: Color,
}

/// One card ready to be drawn
#[derive(Debug, Clone)]
pub struct CardQuad {
    pub size: Size,
    /// Card-local to canvas transform (drag offset plus rotation)
    pub transform: Transform,
    pub badges: Vec<BadgeQuad>,
    pub is_top: bool,
}

/// Pre-calculated layout of the whole stack, bottom card first
#[derive(Debug, Clone)]
pub struct StackLayout {
    pub cards: Vec<CardQuad>,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl StackLayout {
    /// Builds the layout from the stack's current visual state
    pub fn from_stack(stack: &StackController, badge_tilt: f32) -> Self {
        let layout = stack.layout();
        let size = layout.card;
        let count = stack.len();
        let cards = stack
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| CardQuad {
                size,
                transform: card_transform(&card.visual, size),
                badges: badge_quads(size, layout.padding, badge_tilt),
                is_top: index + 1 == count,
            })
            .collect();

        Self {
            cards,
            canvas_width: layout.container_width,
            canvas_height: size.h,
        }
    }
}

/// Rotation around the card center, then the drag offset
pub fn card_transform(visual: &CardVisualState, size: Size) -> Transform {
    Transform::from_translate(visual.x, visual.y).pre_concat(Transform::from_rotate_at(
        visual.rotation,
        size.w / 2.0,
        size.h / 2.0,
    ))
}

fn badge_quads(size: Size, padding: f32, tilt: f32) -> Vec<BadgeQuad> {
    let badge_w = size.w * 0.3;
    let badge_h = size.h * 0.08;
    let top = padding * 2.0;
    let mut quads = Vec::with_capacity(3);

    // Approve sits top-left tilted back, delete top-right tilted forward
    if let Some(rect) = SkiaRect::from_xywh(padding * 2.0, top, badge_w, badge_h) {
        quads.push(BadgeQuad {
            badge: Badge::Approve,
            rect,
            tilt: -tilt,
            color: Color::from_rgba8(46, 204, 113, 255),
        });
    }
    if let Some(rect) = SkiaRect::from_xywh(size.w - padding * 2.0 - badge_w, top, badge_w, badge_h) {
        quads.push(BadgeQuad {
            badge: Badge::Delete,
            rect,
            tilt,
            color: Color::from_rgba8(231, 76, 60, 255),
        });
    }
    if let Some(rect) = SkiaRect::from_xywh((size.w - badge_w) / 2.0, top, badge_w, badge_h) {
        quads.push(BadgeQuad {
            badge: Badge::Pass,
            rect,
            tilt: 0.0,
            color: Color::from_rgba8(52, 152, 219, 255),
        });
    }
    quads
}

/// Software renderer for the stack
#[derive(Debug)]
pub struct StackRenderer {
    background: Color,
    card_fill: Color,
    card_border: Color,
}

impl StackRenderer {
    pub fn new() -> Self {
        Self {
            background: Color::TRANSPARENT,
            card_fill: Color::from_rgba8(250, 250, 250, 255),
            card_border: Color::from_rgba8(200, 200, 200, 255),
        }
    }

    /// Renders the stack's current frame
    pub fn render(&self, stack: &StackController, badge_tilt: f32) -> Result<Pixmap, RendererError> {
        let layout = StackLayout::from_stack(stack, badge_tilt);
        self.render_layout(&layout, stack)
    }

    /// Renders a pre-computed layout; badge opacities come from the stack
    pub fn render_layout(
        &self,
        layout: &StackLayout,
        stack: &StackController,
    ) -> Result<Pixmap, RendererError> {
        if layout.canvas_width < 1.0 || layout.canvas_height < 1.0 {
            return Err(RendererError::InvalidCanvasDimensions {
                width: layout.canvas_width,
                height: layout.canvas_height,
            });
        }
        let mut pixmap = Pixmap::new(
            layout.canvas_width.ceil() as u32,
            layout.canvas_height.ceil() as u32,
        )
        .ok_or(RendererError::PixmapCreationFailed)?;
        pixmap.fill(self.background);

        for (quad, card) in layout.cards.iter().zip(stack.cards()) {
            self.render_card(&mut pixmap, quad, &card.visual);
        }

        Ok(pixmap)
    }

    fn render_card(&self, pixmap: &mut Pixmap, quad: &CardQuad, visual: &CardVisualState) {
        let Some(rect) = SkiaRect::from_xywh(0.0, 0.0, quad.size.w, quad.size.h) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(self.card_fill);
        paint.anti_alias = true;
        pixmap.fill_rect(rect, &paint, quad.transform, None);

        let path = PathBuilder::from_rect(rect);
        let mut border = Paint::default();
        border.set_color(self.card_border);
        let stroke = Stroke {
            width: if quad.is_top { 2.0 } else { 1.0 },
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &border, &stroke, quad.transform, None);

        for badge in &quad.badges {
            let alpha = visual.badge(badge.badge);
            if alpha <= 0.0 {
                continue;
            }
            let mut color = badge.color;
            color.apply_opacity(alpha);
            let mut paint = Paint::default();
            paint.set_color(color);
            let center_x = badge.rect.x() + badge.rect.width() / 2.0;
            let center_y = badge.rect.y() + badge.rect.height() / 2.0;
            let transform = quad
                .transform
                .pre_concat(Transform::from_rotate_at(badge.tilt, center_x, center_y));
            pixmap.fill_rect(badge.rect, &paint, transform, None);
        }
    }
}

impl Default for StackRenderer {
    fn default() -> Self {
        Self::new()
    }
}
