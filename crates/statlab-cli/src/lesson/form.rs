/// A single-line text input.
#[derive(Debug, Clone)]
pub struct TextField {
    label: &'static str,
    value: String,
}

impl TextField {
    pub fn new(label: &'static str, initial: &str) -> Self {
        Self {
            label,
            value: initial.to_owned(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

/// An ordered group of text fields with one focused field.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<TextField>,
    focused: usize,
}

impl Form {
    pub fn new(fields: Vec<TextField>) -> Self {
        assert!(!fields.is_empty(), "form must have at least one field");
        Self { fields, focused: 0 }
    }

    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields[index].value()
    }

    pub fn field_mut(&mut self, index: usize) -> &mut TextField {
        &mut self.fields[index]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self
            .focused
            .checked_sub(1)
            .unwrap_or(self.fields.len() - 1);
    }

    pub fn insert(&mut self, ch: char) {
        self.fields[self.focused].value.push(ch);
    }

    pub fn backspace(&mut self) {
        self.fields[self.focused].value.pop();
    }

    pub fn clear_focused(&mut self) {
        self.fields[self.focused].value.clear();
    }
}
