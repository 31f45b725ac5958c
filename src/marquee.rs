//! Scrolling-text state machine and rasterization for the panel.
//!
//! A [`Marquee`] owns one render cycle: the text enters from the right edge
//! of the visible area, scrolls left one pixel per step, and is finished once
//! it has fully scrolled off the left edge. Stepping is pure state; timing
//! belongs to the caller.

use embedded_graphics::{
    Drawable,
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_5X7, FONT_6X13_BOLD, FONT_9X15_BOLD, FONT_9X18},
    },
    pixelcolor::BinaryColor,
    prelude::Point,
    text::Text,
};

use crate::frame::PanelFrame;
use crate::reading::Message;
use crate::shared_constants::{FRAME_COLS, FRAME_ROWS};

/// Font options for the scrolling message.
///
/// The glyph tables come from `embedded-graphics`; `Font9x15Bold` is the
/// closest match to a classic bold 16-pixel panel face.
#[derive(Clone, Copy, Debug, defmt::Format)]
pub enum PanelFont {
    Font5x7,
    Font6x13Bold,
    Font9x15Bold,
    Font9x18,
}

impl PanelFont {
    /// Return the `MonoFont` glyph table for this variant.
    #[must_use]
    pub const fn to_font(self) -> &'static MonoFont<'static> {
        match self {
            Self::Font5x7 => &FONT_5X7,
            Self::Font6x13Bold => &FONT_6X13_BOLD,
            Self::Font9x15Bold => &FONT_9X15_BOLD,
            Self::Font9x18 => &FONT_9X18,
        }
    }
}

/// One scrolling render cycle over the visible panel area.
pub struct Marquee {
    text: Message,
    font: PanelFont,
    /// Pixel column of the text's left edge; starts at the right edge of the
    /// visible area and decreases by one per step.
    offset: i32,
    text_width: i32,
}

impl Marquee {
    /// Start a new leftward scroll of `text` across the full panel width.
    ///
    /// The text begins one column past the right edge: the first rendered
    /// frame is blank and the leading column appears on the first step. This
    /// keeps the completion count at exactly `text_width + visible_width`
    /// steps.
    #[must_use]
    pub fn new(text: &Message, font: PanelFont) -> Self {
        let glyphs = font.to_font();
        #[expect(
            clippy::arithmetic_side_effects,
            reason = "glyph advance and message length are both small"
        )]
        let advance = (glyphs.character_size.width + glyphs.character_spacing) as i32;
        #[expect(
            clippy::arithmetic_side_effects,
            reason = "bounded by MESSAGE_CAPACITY * glyph advance"
        )]
        let text_width = text.chars().count() as i32 * advance;
        Self {
            text: text.clone(),
            font,
            offset: FRAME_COLS as i32,
            text_width,
        }
    }

    /// Advance the scroll by one pixel and report whether the text has fully
    /// scrolled off the visible area.
    ///
    /// For a text of rendered width `W` and visible width `V`, `step` returns
    /// `true` on the `(W + V)`-th call and every call after it.
    pub fn step(&mut self) -> bool {
        if !self.is_finished() {
            #[expect(
                clippy::arithmetic_side_effects,
                reason = "offset is bounded below by -text_width"
            )]
            {
                self.offset -= 1;
            }
        }
        self.is_finished()
    }

    /// True once the text has fully scrolled off the left edge.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        #[expect(
            clippy::arithmetic_side_effects,
            reason = "text_width is bounded by MESSAGE_CAPACITY * glyph advance"
        )]
        let gone = -self.text_width;
        self.offset <= gone
    }

    /// Rasterize the current scroll position into a fresh frame.
    ///
    /// Pixels outside the visible area are clipped by the frame itself.
    #[must_use]
    pub fn render(&self) -> PanelFrame {
        let mut frame = PanelFrame::new();
        let glyphs = self.font.to_font();
        #[expect(
            clippy::arithmetic_side_effects,
            reason = "glyph height and baseline are small constants"
        )]
        let baseline_y =
            (FRAME_ROWS as i32 - glyphs.character_size.height as i32) / 2 + glyphs.baseline as i32;
        let style = MonoTextStyle::new(glyphs, BinaryColor::On);
        Text::new(&self.text, Point::new(self.offset, baseline_y), style)
            .draw(&mut frame)
            .expect("drawing into frame cannot fail");
        frame
    }
}
