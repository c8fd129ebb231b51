//! The editor surface the add-on works against, and an in-memory document
//! implementing it.

use crate::error::{Error, Result};
use crate::locate::locate;
use crate::span::{Position, Span};

/// The slice of a host text editor this crate needs.
///
/// Positions use char columns, see [`Position`].
pub trait Editor {
    /// True if the selection is non-empty.
    fn something_selected(&self) -> bool;

    /// Text covered by the current selection, empty if nothing is selected.
    fn selection(&self) -> String;

    /// The cursor (selection head).
    fn cursor(&self) -> Position;

    /// Text of `line` without its line terminator, empty past the last line.
    fn line(&self, line: usize) -> String;

    fn set_selection(&mut self, span: Span);

    /// Replaces the selection with `text` and leaves the cursor after it.
    fn replace_selection(&mut self, text: &str);
}

/// Returns the text to convert: the active selection if there is one,
/// otherwise the link token under the cursor.
///
/// In the second case the located span becomes the new selection, even when
/// it is empty, so a following [`Editor::replace_selection`] overwrites
/// exactly the token that was read.
pub fn resolve_selection<E: Editor + ?Sized>(editor: &mut E) -> String {
    if !editor.something_selected() {
        let cursor = editor.cursor();
        let span = locate(&editor.line(cursor.line), cursor);
        editor.set_selection(span);
    }
    editor.selection()
}

/// A document held in memory with a single selection.
///
/// Lines are separated by `\n`. Positions handed to [`Editor`] methods are
/// clamped into the document; [`MemoryEditor::set_cursor`] is the checked
/// entry point for caller-supplied positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEditor {
    text: String,
    anchor: Position,
    head: Position,
}

impl MemoryEditor {
    /// A document with the cursor at the very start.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            anchor: Position::default(),
            head: Position::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Current selection as a normalized span.
    pub fn selection_span(&self) -> Span {
        Span::normalized(self.anchor, self.head)
    }

    /// Moves the cursor to `pos`, collapsing the selection.
    pub fn set_cursor(&mut self, pos: Position) -> Result<()> {
        self.check(pos)?;
        self.anchor = pos;
        self.head = pos;
        Ok(())
    }

    /// Selects from `anchor` to `head` after checking both lie in the document.
    pub fn select(&mut self, anchor: Position, head: Position) -> Result<()> {
        self.check(anchor)?;
        self.check(head)?;
        self.anchor = anchor;
        self.head = head;
        Ok(())
    }

    fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    fn check(&self, pos: Position) -> Result<()> {
        match self.lines().nth(pos.line) {
            Some(line) if pos.ch <= line.chars().count() => Ok(()),
            _ => Err(Error::OutOfBounds {
                line: pos.line,
                ch: pos.ch,
            }),
        }
    }

    /// Byte offset of `pos`, clamped to the end of its line or document.
    fn offset_of(&self, pos: Position) -> usize {
        let mut line_start = 0;
        for (i, line) in self.lines().enumerate() {
            if i == pos.line {
                let col = line
                    .char_indices()
                    .nth(pos.ch)
                    .map_or(line.len(), |(b, _)| b);
                return line_start + col;
            }
            line_start += line.len() + 1;
        }
        self.text.len()
    }

    fn position_at(&self, offset: usize) -> Position {
        let before = &self.text[..offset];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Position::new(line, before[line_start..].chars().count())
    }

    fn clamp(&self, pos: Position) -> Position {
        self.position_at(self.offset_of(pos))
    }
}

impl Editor for MemoryEditor {
    fn something_selected(&self) -> bool {
        self.anchor != self.head
    }

    fn selection(&self) -> String {
        let span = self.selection_span();
        self.text[self.offset_of(span.start)..self.offset_of(span.end)].to_string()
    }

    fn cursor(&self) -> Position {
        self.head
    }

    fn line(&self, line: usize) -> String {
        self.lines().nth(line).unwrap_or_default().to_string()
    }

    fn set_selection(&mut self, span: Span) {
        self.anchor = self.clamp(span.start);
        self.head = self.clamp(span.end);
    }

    fn replace_selection(&mut self, text: &str) {
        let span = self.selection_span();
        let start = self.offset_of(span.start);
        let end = self.offset_of(span.end);
        self.text.replace_range(start..end, text);

        let cursor = self.position_at(start + text.len());
        self.anchor = cursor;
        self.head = cursor;
    }
}
