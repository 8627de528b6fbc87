use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{Field, FormValues};

/// Width the field labels are padded to so the inputs line up.
pub(crate) const LABEL_WIDTH: usize = 16;

/// Input buffers for the listing form plus the focused field.
#[derive(Default, Clone)]
pub(crate) struct PropertyForm {
    values: FormValues,
    pub(crate) active: Field,
}

impl PropertyForm {
    pub(crate) fn focus_next(&mut self) {
        self.active = self.active.next();
    }

    pub(crate) fn focus_prev(&mut self) {
        self.active = self.active.prev();
    }

    /// Append a character to the active field. Control characters are refused.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let mut value = self.values.get(self.active).to_string();
        value.push(ch);
        self.values.set(self.active, value);
        true
    }

    pub(crate) fn backspace(&mut self) {
        let mut value = self.values.get(self.active).to_string();
        value.pop();
        self.values.set(self.active, value);
    }

    /// Empty every input and move focus back to the first field.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn values(&self) -> FormValues {
        self.values.clone()
    }

    pub(crate) fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Character count of a field, used to place the cursor.
    pub(crate) fn value_len(&self, field: Field) -> usize {
        self.values.get(field).chars().count()
    }

    /// Render a single `label: value` line for the form panel.
    pub(crate) fn build_line(&self, field: Field, focused: bool) -> Line<'static> {
        let value = self.value(field);
        let is_active = focused && self.active == field;

        let display = if value.is_empty() && !is_active {
            "<required>".to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::styled(
                format!("{:>width$}: ", field.label(), width = LABEL_WIDTH),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(display, style),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_active_field() {
        let mut form = PropertyForm::default();
        for ch in "Flat".chars() {
            assert!(form.push_char(ch));
        }
        form.focus_next();
        form.push_char('4');
        form.push_char('2');
        form.backspace();

        assert_eq!(form.value(Field::ObjectType), "Flat");
        assert_eq!(form.value(Field::Area), "4");
        assert_eq!(form.value_len(Field::Area), 1);
    }

    #[test]
    fn control_characters_are_refused() {
        let mut form = PropertyForm::default();
        assert!(!form.push_char('\n'));
        assert_eq!(form.value(Field::ObjectType), "");
    }

    #[test]
    fn clear_resets_values_and_focus() {
        let mut form = PropertyForm::default();
        form.focus_prev();
        form.push_char('x');
        assert_eq!(form.active, Field::ClientFullName);

        form.clear();
        assert_eq!(form.active, Field::ObjectType);
        assert_eq!(form.values(), FormValues::default());
    }
}
