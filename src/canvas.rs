use std::collections::VecDeque;

use egui::Color32;

use crate::color;
use crate::primitive::{PreviewHandle, Primitive};
use crate::surface::{IntegerPrompt, Surface, TextPrompt};
use crate::tools::{Cursor, ToolMode};

/// The color button's current look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorIndicator {
    pub fill: Color32,
    pub foreground: Color32,
}

impl Default for ColorIndicator {
    fn default() -> Self {
        Self {
            fill: Color32::BLACK,
            foreground: color::legible_foreground(Color32::BLACK),
        }
    }
}

/// A prompt the session issued, kept for the shell and for inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRecord {
    Text(TextPrompt),
    Integer(IntegerPrompt),
}

/// Display list and widget state owned by the GUI shell.
///
/// `Canvas` is the [`Surface`] the session draws into. Prompts are answered
/// from queues filled beforehand: the shell collects an answer in a modal
/// dialog, queues it, then replays the command that needs it. A request with
/// nothing queued counts as cancelled.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    display_list: Vec<Primitive>,
    preview: Option<(PreviewHandle, Primitive)>,
    next_preview_id: u64,
    cursor: Cursor,
    active_tool: Option<ToolMode>,
    color_indicator: ColorIndicator,
    text_answers: VecDeque<Option<String>>,
    integer_answers: VecDeque<Option<u32>>,
    prompts: Vec<PromptRecord>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Permanent primitives in drawing order
    pub fn display_list(&self) -> &[Primitive] {
        &self.display_list
    }

    pub fn preview(&self) -> Option<&Primitive> {
        self.preview.as_ref().map(|(_, primitive)| primitive)
    }

    pub fn preview_handle(&self) -> Option<PreviewHandle> {
        self.preview.as_ref().map(|(handle, _)| *handle)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn active_tool(&self) -> Option<ToolMode> {
        self.active_tool
    }

    pub fn color_indicator(&self) -> ColorIndicator {
        self.color_indicator
    }

    /// Queue the answer for the next text prompt; `None` cancels it.
    pub fn answer_text(&mut self, answer: Option<String>) {
        self.text_answers.push_back(answer);
    }

    /// Queue the answer for the next integer prompt; `None` cancels it.
    pub fn answer_integer(&mut self, answer: Option<u32>) {
        self.integer_answers.push_back(answer);
    }

    /// Every prompt issued so far, oldest first
    pub fn prompts(&self) -> &[PromptRecord] {
        &self.prompts
    }
}

impl Surface for Canvas {
    fn commit(&mut self, primitive: Primitive) {
        log::trace!("commit {}", primitive.kind_name());
        self.display_list.push(primitive);
    }

    fn show_preview(&mut self, primitive: Primitive) -> PreviewHandle {
        self.next_preview_id += 1;
        let handle = PreviewHandle::new(self.next_preview_id);
        self.preview = Some((handle, primitive));
        handle
    }

    fn discard_preview(&mut self, handle: PreviewHandle) {
        if self.preview_handle() == Some(handle) {
            self.preview = None;
        }
    }

    fn clear(&mut self) {
        self.display_list.clear();
        self.preview = None;
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn highlight_tool(&mut self, mode: ToolMode) {
        self.active_tool = Some(mode);
    }

    fn update_color_indicator(&mut self, color: Color32, foreground: Color32) {
        self.color_indicator = ColorIndicator {
            fill: color,
            foreground,
        };
    }

    fn request_text(&mut self, prompt: &TextPrompt) -> Option<String> {
        self.prompts.push(PromptRecord::Text(prompt.clone()));
        self.text_answers.pop_front().flatten()
    }

    fn request_integer(&mut self, prompt: &IntegerPrompt) -> Option<u32> {
        self.prompts.push(PromptRecord::Integer(prompt.clone()));
        let answer = self.integer_answers.pop_front().flatten()?;
        if prompt.accepts(answer) {
            Some(answer)
        } else {
            log::warn!(
                "{}: {answer} rejected, expected {}..={}",
                prompt.title,
                prompt.min,
                prompt.max
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{OutlineStyle, ShapeKind};
    use egui::{Rect, pos2};

    fn outline(x: f32) -> Primitive {
        Primitive::Outline {
            kind: ShapeKind::Rectangle,
            rect: Rect::from_min_max(pos2(0.0, 0.0), pos2(x, x)),
            style: OutlineStyle::preview(),
            tag: None,
        }
    }

    #[test]
    fn only_one_preview_at_a_time() {
        let mut canvas = Canvas::new();
        let first = canvas.show_preview(outline(1.0));
        let second = canvas.show_preview(outline(2.0));
        assert_ne!(first, second);
        assert_eq!(canvas.preview(), Some(&outline(2.0)));

        // a stale handle must not remove the newer preview
        canvas.discard_preview(first);
        assert!(canvas.preview().is_some());
        canvas.discard_preview(second);
        assert!(canvas.preview().is_none());
    }

    #[test]
    fn clear_drops_display_list_and_preview() {
        let mut canvas = Canvas::new();
        canvas.commit(outline(3.0));
        canvas.show_preview(outline(4.0));
        canvas.clear();
        assert!(canvas.display_list().is_empty());
        assert!(canvas.preview().is_none());
    }

    #[test]
    fn prompts_use_queued_answers_in_order() {
        let mut canvas = Canvas::new();
        let prompt = IntegerPrompt {
            title: "Width",
            label: "",
            min: 1,
            max: 10,
            initial: 2,
        };
        canvas.answer_integer(Some(4));
        canvas.answer_integer(Some(11));
        canvas.answer_integer(None);
        assert_eq!(canvas.request_integer(&prompt), Some(4));
        assert_eq!(canvas.request_integer(&prompt), None);
        assert_eq!(canvas.request_integer(&prompt), None);
        // nothing queued
        assert_eq!(canvas.request_integer(&prompt), None);
        assert_eq!(canvas.prompts().len(), 4);
    }
}
