//! The drawing session: tool settings plus the state of the gesture in progress.
//!
//! A [`DrawingSession`] never renders anything itself. Every handler takes the
//! hosting [`Surface`] by reference and issues primitives and notifications on
//! it, so the same session drives both the egui shell and the test canvas.

mod gesture;

pub use gesture::{Gesture, TEXT_PROMPT};

use egui::Color32;

use crate::color;
use crate::config::{FontLimits, SessionConfig};
use crate::error::{ColorError, ConfigResult};
use crate::surface::{IntegerPrompt, Surface};
use crate::tools::ToolMode;

/// Smallest stroke width the session accepts.
pub const MIN_WIDTH: u32 = 1;

/// How a width or font size command picks its new value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeChoice {
    /// Use this value directly
    Fixed(u32),
    /// Ask the user through a blocking integer prompt
    PromptCustom,
}

#[derive(Debug, Clone)]
pub struct DrawingSession {
    config: SessionConfig,
    mode: ToolMode,
    stroke_color: Color32,
    background_color: Color32,
    stroke_width: u32,
    font_size: Option<u32>,
    gesture: Gesture,
}

impl DrawingSession {
    /// Create a session from a validated configuration.
    pub fn new(config: SessionConfig) -> ConfigResult<Self> {
        config.validate()?;
        let stroke_color = config.stroke_color()?;
        let background_color = config.background_color()?;
        Ok(Self {
            mode: config.initial_mode(),
            stroke_color,
            background_color,
            stroke_width: config.default_width,
            font_size: config.font.map(|font| font.default),
            gesture: Gesture::default(),
            config,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn stroke_color(&self) -> Color32 {
        self.stroke_color
    }

    pub fn background_color(&self) -> Color32 {
        self.background_color
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// `None` when the edition has no text tool.
    pub fn font_size(&self) -> Option<u32> {
        self.font_size
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Color freehand tools paint with: the canvas background when erasing.
    pub fn drawing_color(&self) -> Color32 {
        if self.mode == ToolMode::Eraser {
            self.background_color
        } else {
            self.stroke_color
        }
    }

    /// Outline width used by shape tools; never thinner than one pixel.
    pub fn effective_width(&self) -> u32 {
        self.stroke_width.max(MIN_WIDTH)
    }

    /// The prompt [`SizeChoice::PromptCustom`] issues for the stroke width
    pub fn width_prompt(&self) -> IntegerPrompt {
        IntegerPrompt {
            title: "Line/Outline Thickness",
            label: "Enter thickness (pixels):",
            min: MIN_WIDTH,
            max: self.config.max_custom_width,
            initial: self.stroke_width,
        }
    }

    /// The prompt [`SizeChoice::PromptCustom`] issues for the font size
    pub fn font_size_prompt(&self) -> Option<IntegerPrompt> {
        let limits = self.config.font?;
        Some(IntegerPrompt {
            title: "Font Size",
            label: "Enter font size (points):",
            min: limits.min,
            max: limits.max,
            initial: self.font_size.unwrap_or(limits.default),
        })
    }

    /// Push cursor, tool highlight and color indicator to a freshly attached surface.
    pub fn sync_surface(&self, surface: &mut impl Surface) {
        surface.set_cursor(self.mode.cursor());
        surface.highlight_tool(self.mode);
        surface.update_color_indicator(
            self.stroke_color,
            color::legible_foreground(self.stroke_color),
        );
    }

    /// Switch tools. Returns `true` if the mode actually changed.
    ///
    /// Selecting the active tool again is a no-op. Any gesture in progress is
    /// abandoned, including its preview.
    pub fn set_mode(&mut self, mode: ToolMode, surface: &mut impl Surface) -> bool {
        if mode == self.mode {
            return false;
        }
        if !self.config.offers(mode) {
            log::warn!("Tool {mode} is not available in this edition");
            return false;
        }

        self.cancel_gesture(surface);
        self.mode = mode;
        log::info!("Mode: {mode}");

        surface.set_cursor(mode.cursor());
        surface.highlight_tool(mode);
        true
    }

    pub fn set_color(&mut self, color: Color32, surface: &mut impl Surface) {
        self.stroke_color = color;
        log::info!("Color set to: {}", color::to_hex(color));
        surface.update_color_indicator(color, color::legible_foreground(color));

        if self.config.color_selection_forces_pencil_mode {
            self.set_mode(ToolMode::Pencil, surface);
        }
    }

    /// Like [`Self::set_color`] for a `#rrggbb` string; malformed input changes nothing.
    pub fn set_color_hex(&mut self, hex: &str, surface: &mut impl Surface) -> Result<(), ColorError> {
        let color = color::parse_hex(hex)?;
        self.set_color(color, surface);
        Ok(())
    }

    /// Apply a width command and return the resulting width.
    pub fn set_width(&mut self, choice: SizeChoice, surface: &mut impl Surface) -> u32 {
        let requested = match choice {
            SizeChoice::Fixed(width) => Some(width),
            SizeChoice::PromptCustom => ask_integer(surface, &self.width_prompt()),
        };

        match requested {
            Some(width) if width >= MIN_WIDTH => {
                self.stroke_width = width;
                log::info!("Thickness set to: {width}");
            }
            Some(width) => log::warn!("Ignoring stroke width {width}"),
            None => log::debug!("Thickness unchanged at {}", self.stroke_width),
        }
        self.stroke_width
    }

    /// Apply a font size command; returns the resulting size, or `None` without a text tool.
    pub fn set_font_size(&mut self, choice: SizeChoice, surface: &mut impl Surface) -> Option<u32> {
        let (Some(current), Some(limits)) = (self.font_size, self.config.font) else {
            log::warn!("Font size is not available in this edition");
            return None;
        };
        let FontLimits { min, max, .. } = limits;

        let requested = match choice {
            SizeChoice::Fixed(size) => Some(size),
            SizeChoice::PromptCustom => {
                let prompt = self.font_size_prompt()?;
                ask_integer(surface, &prompt)
            }
        };

        match requested {
            Some(size) if limits.contains(size) => {
                self.font_size = Some(size);
                log::info!("Font size set to: {size}");
            }
            Some(size) => log::warn!("Ignoring font size {size}, expected {min}..={max}"),
            None => log::debug!("Font size unchanged at {current}"),
        }
        self.font_size
    }

    /// Wipe the surface. Tool settings survive, as does the anchor of a gesture in progress.
    pub fn clear(&mut self, surface: &mut impl Surface) {
        // the surface drops the preview together with the display list
        self.gesture.preview = None;
        surface.clear();
        log::info!("Canvas cleared");
    }
}

/// Ask the surface for an integer and reject answers outside the prompt's bounds.
fn ask_integer(surface: &mut impl Surface, prompt: &IntegerPrompt) -> Option<u32> {
    let answer = surface.request_integer(prompt)?;
    if prompt.accepts(answer) {
        Some(answer)
    } else {
        log::warn!(
            "{}: {answer} is outside {}..={}, treating as cancelled",
            prompt.title,
            prompt.min,
            prompt.max
        );
        None
    }
}
