//! Inline fields for the editable event list: per-field edit buffers,
//! type-aware commit, and row-wide keyboard navigation.

use macroquad::input::KeyCode;

/// How a field interprets its buffer on commit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    /// Integer input, clamped into `[min, max]` on commit. An unset min
    /// defaults to zero; an unset max leaves the value unbounded above.
    Number { min: Option<i64>, max: Option<i64> },
    Text,
}

/// Value delivered to the owning store when a field commits.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Number(i64),
    Text(String),
}

impl FieldValue {
    fn display(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// In-progress edit of one field's text. Exists only while the field is
/// focused; the field's external value is untouched until commit.
pub struct EditBuffer {
    pub text: String,
    pub anchor: usize, // beginning of selection
    pub cursor: usize, // end of selection
}

impl EditBuffer {
    /// Starts an edit with the whole text selected.
    pub fn new(text: String) -> Self {
        Self {
            anchor: 0,
            cursor: text.chars().count(),
            text,
        }
    }

    /// Handles a non-commit key. Ctrl combinations cut, copy, and paste
    /// through `clipboard`.
    pub fn key(&mut self, key: KeyCode, shift: bool, ctrl: bool,
        clipboard: &mut Option<String>
    ) {
        if ctrl {
            match key {
                KeyCode::X => {
                    *clipboard = Some(self.selected_text().to_owned());
                    self.delete(0);
                }
                KeyCode::C => *clipboard = Some(self.selected_text().to_owned()),
                KeyCode::V => if let Some(s) = clipboard.clone() {
                    self.insert(&s);
                }
                _ => (),
            }
        } else {
            match key {
                KeyCode::Backspace => self.delete(-1),
                KeyCode::Delete => self.delete(1),
                KeyCode::Home => self.set_cursor(0, shift),
                KeyCode::End => self.set_cursor(self.text.chars().count(), shift),
                KeyCode::Left => self.set_cursor(self.cursor.saturating_sub(1), shift),
                KeyCode::Right => self.set_cursor(
                    (self.cursor + 1).min(self.text.chars().count()), shift),
                _ => (),
            }
        }
    }

    /// Sets the cursor to the given position, updating the anchor unless
    /// the selection is being extended. Does not check bounds.
    fn set_cursor(&mut self, pos: usize, extend: bool) {
        self.cursor = pos;
        if !extend {
            self.anchor = self.cursor;
        }
    }

    /// Insert text at the cursor position, replacing any selection.
    pub fn insert(&mut self, s: &str) {
        if self.cursor != self.anchor {
            self.delete(0);
        }
        let i = self.text.char_indices().nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        self.text.insert_str(i, s);
        self.cursor += s.chars().count();
        self.anchor = self.cursor;
    }

    /// Delete selected text. `offset` determines which character(s) are
    /// deleted when there is no selection.
    fn delete(&mut self, offset: isize) {
        if self.cursor == self.anchor {
            self.cursor = ((self.cursor as isize + offset).max(0) as usize)
                .min(self.text.chars().count());
        }

        let start = self.cursor.min(self.anchor);
        let end = self.cursor.max(self.anchor);

        self.text = self.text.chars()
            .enumerate()
            .filter_map(|(i, c)| {
                if i < start || i >= end {
                    Some(c)
                } else {
                    None
                }
            }).collect();

        self.cursor = start;
        self.anchor = start;
    }

    /// Returns the selected text.
    fn selected_text(&self) -> &str {
        let start = self.cursor.min(self.anchor);
        let end = self.cursor.max(self.anchor);

        if let Some((start, _)) = self.text.char_indices().nth(start) {
            if let Some((end, _)) = self.text.char_indices().nth(end) {
                &self.text[start..end]
            } else {
                &self.text[start..]
            }
        } else {
            ""
        }
    }
}

/// One inline input bound to an external value. At rest it displays the
/// external value; while focused it edits a local buffer. The external
/// value only changes when the row delivers a commit. A field with no
/// external value is disabled.
pub struct Field {
    pub kind: FieldKind,
    value: Option<FieldValue>,
    edit: Option<EditBuffer>,
}

impl Field {
    pub fn new(kind: FieldKind, value: Option<FieldValue>) -> Self {
        Self { kind, value, edit: None }
    }

    pub fn enabled(&self) -> bool {
        self.value.is_some()
    }

    pub fn focused(&self) -> bool {
        self.edit.is_some()
    }

    /// Refreshes the authoritative external value. Has no effect on an
    /// edit in progress.
    pub fn set_value(&mut self, value: Option<FieldValue>) {
        self.value = value;
    }

    /// The text to render: the edit buffer while focused, the external
    /// value otherwise.
    pub fn display_text(&self) -> String {
        match &self.edit {
            Some(edit) => edit.text.clone(),
            None => self.value.as_ref().map(FieldValue::display).unwrap_or_default(),
        }
    }

    pub fn buffer(&mut self) -> Option<&mut EditBuffer> {
        self.edit.as_mut()
    }

    /// Begins editing with the current value selected. No-op when the
    /// field is disabled.
    fn focus(&mut self) {
        if let Some(value) = &self.value {
            self.edit = Some(EditBuffer::new(value.display()));
        }
    }

    /// Exits editing without committing.
    fn blur(&mut self) {
        self.edit = None;
    }

    /// Interprets the edit buffer according to the field kind. A numeric
    /// buffer that fails to parse yields None: the edit is discarded
    /// silently. Returns None when not focused.
    fn interpret(&self) -> Option<FieldValue> {
        let edit = self.edit.as_ref()?;
        match self.kind {
            FieldKind::Number { min, max } => {
                let n = edit.text.trim().parse::<i64>().ok()?;
                let n = n.max(min.unwrap_or(0)).min(max.unwrap_or(i64::MAX));
                Some(FieldValue::Number(n))
            }
            FieldKind::Text => Some(FieldValue::Text(edit.text.clone())),
        }
    }
}

/// A committed edit: the index of the field in its row, and the value to
/// deliver to the owning store. At most one is produced per commit
/// trigger (blur, Enter, or Tab).
pub type Commit = (usize, FieldValue);

/// Ordered registry of the sibling fields in one editor row. Keyboard
/// navigation is a list operation here, independent of how the row is
/// laid out on screen.
pub struct FieldRow {
    fields: Vec<Field>,
    focus: Option<usize>,
}

impl FieldRow {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields, focus: None }
    }

    pub fn focused(&self) -> Option<usize> {
        self.focus
    }

    pub fn field(&self, i: usize) -> Option<&Field> {
        self.fields.get(i)
    }

    pub fn field_mut(&mut self, i: usize) -> Option<&mut Field> {
        self.fields.get_mut(i)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Focuses field `i`, committing the previously focused field first.
    /// Disabled and out-of-range fields refuse focus.
    pub fn focus(&mut self, i: usize) -> Option<Commit> {
        if !self.fields.get(i).is_some_and(Field::enabled) {
            return None;
        }
        let commit = self.blur();
        self.fields[i].focus();
        self.focus = Some(i);
        commit
    }

    /// Commits and unfocuses the focused field, if any.
    pub fn blur(&mut self) -> Option<Commit> {
        let i = self.focus.take()?;
        let commit = self.fields[i].interpret();
        self.fields[i].blur();
        commit.map(|v| (i, v))
    }

    /// Routes a typed character into the focused field's buffer.
    pub fn input_char(&mut self, c: char) {
        if c.is_ascii_control() {
            return;
        }
        if let Some(edit) = self.focus.and_then(|i| self.fields[i].buffer()) {
            edit.insert(&c.to_string());
        }
    }

    /// Handles a key press in the focused field.
    ///
    /// Enter commits and moves focus to the next enabled field in row
    /// order; with no next field, the field stays focused. Tab commits
    /// and leaves focus movement to the platform. Escape discards the
    /// edit and blurs without committing. Anything else goes to the edit
    /// buffer.
    pub fn key(&mut self, key: KeyCode, shift: bool, ctrl: bool,
        clipboard: &mut Option<String>
    ) -> Option<Commit> {
        let i = self.focus?;
        match key {
            KeyCode::Enter => {
                let commit = self.fields[i].interpret().map(|v| (i, v));
                if let Some(next) = self.next_enabled(i) {
                    self.fields[i].blur();
                    self.fields[next].focus();
                    self.focus = Some(next);
                }
                commit
            }
            KeyCode::Tab => self.fields[i].interpret().map(|v| (i, v)),
            KeyCode::Escape => {
                self.fields[i].blur();
                self.focus = None;
                None
            }
            _ => {
                if let Some(edit) = self.fields[i].buffer() {
                    edit.key(key, shift, ctrl, clipboard);
                }
                None
            }
        }
    }

    /// Index of the first enabled field after `i`, in row order.
    fn next_enabled(&self, i: usize) -> Option<usize> {
        self.fields.iter()
            .enumerate()
            .skip(i + 1)
            .find(|(_, f)| f.enabled())
            .map(|(i, _)| i)
    }
}
