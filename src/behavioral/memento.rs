//! Memento: the editor hands out opaque snapshots of itself; the history
//! stores them without being able to look inside.

use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

/// Fields are private to this module, so only `Editor` can read them back.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    text: String,
    cursor: usize,
}

#[derive(Debug, Default)]
pub struct Editor {
    text: String,
    cursor: usize,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn type_text(&mut self, words: &str) {
        self.text.insert_str(self.cursor, words);
        self.cursor += words.len();
    }

    /// Cursor positions are byte offsets, snapped back to a char boundary.
    pub fn move_cursor(&mut self, position: usize) {
        let mut position = position.min(self.text.len());
        while !self.text.is_char_boundary(position) {
            position -= 1;
        }
        self.cursor = position;
    }

    pub fn save(&self) -> Snapshot {
        Snapshot {
            text: self.text.clone(),
            cursor: self.cursor,
        }
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.text = snapshot.text.clone();
        self.cursor = snapshot.cursor;
    }
}

/// Caretaker.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backup(&mut self, editor: &Editor) {
        self.snapshots.push(editor.save());
    }

    /// Restores the latest snapshot. False when there is nothing to undo.
    pub fn undo(&mut self, editor: &mut Editor) -> bool {
        match self.snapshots.pop() {
            Some(snapshot) => {
                editor.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

pub struct MementoPattern;

impl Pattern for MementoPattern {
    fn name(&self) -> &'static str {
        "memento"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn intent(&self) -> &'static str {
        "Capture and externalize an object's state so it can be restored later."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Originator", "Editor"),
            Participant::new("Memento", "Snapshot"),
            Participant::new("Caretaker", "History"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Memento")?;

        let mut editor = Editor::new();
        let mut history = History::new();

        for words in ["Hello", ", world", "!!!"] {
            history.backup(&editor);
            editor.type_text(words);
            writeln!(out, "Typed {words:?}: {:?}", editor.text())?;
        }

        output::section(out, "Undo")?;
        while history.undo(&mut editor) {
            writeln!(out, "Restored: {:?}", editor.text())?;
        }
        writeln!(out, "Nothing left to undo")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_snapshot() {
        let mut editor = Editor::new();
        editor.type_text("abc");
        let snapshot = editor.save();

        editor.move_cursor(1);
        editor.type_text("XYZ");
        assert_eq!(editor.text(), "aXYZbc");

        editor.restore(&snapshot);
        assert_eq!(editor.text(), "abc");
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn test_history_undo_order() {
        let mut editor = Editor::new();
        let mut history = History::new();

        history.backup(&editor);
        editor.type_text("one");
        history.backup(&editor);
        editor.type_text(" two");

        assert!(history.undo(&mut editor));
        assert_eq!(editor.text(), "one");
        assert!(history.undo(&mut editor));
        assert_eq!(editor.text(), "");
        assert!(!history.undo(&mut editor));
        assert!(history.is_empty());
    }

    #[test]
    fn test_cursor_snaps_to_char_boundary() {
        let mut editor = Editor::new();
        editor.type_text("héllo");
        editor.move_cursor(2);
        assert_eq!(editor.cursor(), 1);
        editor.move_cursor(100);
        assert_eq!(editor.cursor(), editor.text().len());
    }
}
