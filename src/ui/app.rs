use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState,
    Table, TableState, Wrap,
};
use ratatui::Frame;
use tracing::debug;

use crate::error::{DatabaseError, ValidationError};
use crate::models::Field;
use crate::register::{Command, Outcome, Register};

use super::forms::{PropertyForm, LABEL_WIDTH};
use super::helpers::{centered_rect, scroll_offset, step_index, visible_columns};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Five input lines, the Add button, and the panel border.
const FORM_HEIGHT: u16 = 8;
/// Narrowest a table column may get before the view scrolls sideways.
const MIN_COLUMN_WIDTH: u16 = 16;
/// Rows skipped by PageUp/PageDown.
const PAGE_ROWS: isize = 10;
const ADD_BUTTON: &str = "[ Add ]";

/// Which panel receives keyboard input.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Focus {
    Form,
    Table,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum DialogKind {
    Warning,
    Error,
}

impl DialogKind {
    fn title(self) -> &'static str {
        match self {
            DialogKind::Warning => "Warning",
            DialogKind::Error => "Error",
        }
    }

    fn style(self) -> Style {
        match self {
            DialogKind::Warning => Style::default().fg(Color::Yellow),
            DialogKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Modal message that blocks every other key until dismissed.
struct Dialog {
    kind: DialogKind,
    message: String,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Terminal front-end state wrapped around the [`Register`].
pub struct App {
    register: Register,
    form: PropertyForm,
    focus: Focus,
    table_state: TableState,
    header: Field,
    column_offset: usize,
    dialog: Option<Dialog>,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(register: Register) -> Self {
        let mut table_state = TableState::default();
        if !register.table().is_empty() {
            table_state.select(Some(0));
        }
        Self {
            register,
            form: PropertyForm::default(),
            focus: Focus::Form,
            table_state,
            header: Field::ObjectType,
            column_offset: 0,
            dialog: None,
            status: None,
        }
    }

    pub fn register(&self) -> &Register {
        &self.register
    }

    /// Show the startup load failure. The app keeps running with whatever the
    /// register holds, which after a failed load is nothing.
    pub fn report_database_error(&mut self, err: &DatabaseError) {
        self.dialog = Some(Dialog {
            kind: DialogKind::Error,
            message: format!("Database error: {err}"),
        });
        self.set_status("Database not loaded. New listings stay in memory.", StatusKind::Error);
    }

    pub fn report_loaded(&mut self, count: usize) {
        self.set_status(format!("Loaded {count} listings."), StatusKind::Info);
    }

    /// Process one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.dialog.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                self.dialog = None;
            }
            return false;
        }

        match code {
            KeyCode::Esc => return true,
            KeyCode::F(2) => {
                self.toggle_focus();
                return false;
            }
            _ => {}
        }

        match self.focus {
            Focus::Form => self.handle_form_key(code),
            Focus::Table => return self.handle_table_key(code),
        }
        false
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => self.run(Command::Submit(self.form.values())),
            KeyCode::Char(ch) => {
                self.form.push_char(ch);
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => self.move_row(-1),
            KeyCode::Down => self.move_row(1),
            KeyCode::PageUp => self.move_row(-PAGE_ROWS),
            KeyCode::PageDown => self.move_row(PAGE_ROWS),
            KeyCode::Home => self.move_row(isize::MIN / 2),
            KeyCode::End => self.move_row(isize::MAX / 2),
            KeyCode::Left => self.move_header(-1),
            KeyCode::Right => self.move_header(1),
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.run(Command::ActivateHeader(self.header))
            }
            _ => {}
        }
        false
    }

    /// Dispatch a command and reflect its outcome in the UI.
    fn run(&mut self, command: Command) {
        match self.register.dispatch(command) {
            Ok(Outcome::Added(record)) => {
                self.form.clear();
                self.set_status(
                    format!("Added {} at {}.", record.object_type, record.address),
                    StatusKind::Info,
                );
                if self.table_state.selected().is_none() {
                    self.table_state.select(Some(0));
                }
            }
            Ok(Outcome::Sorted { field, direction }) => {
                self.set_status(format!("Sorted by {field} ({direction})."), StatusKind::Info);
            }
            Err(ValidationError::MissingField { field }) => {
                debug!(%field, "showing validation warning");
                self.dialog = Some(Dialog {
                    kind: DialogKind::Warning,
                    message: format!("Please fill in all fields (missing: {field})."),
                });
            }
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::Table,
            Focus::Table => Focus::Form,
        };
        self.clear_status();
    }

    fn move_row(&mut self, delta: isize) {
        let len = self.register.table().len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some(step_index(current, delta, len)));
    }

    fn move_header(&mut self, delta: isize) {
        let index = step_index(self.header.index(), delta, Field::ALL.len());
        self.header = Field::ALL[index];
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_form(frame, chunks[0]);
        self.draw_table(frame, chunks[1], chunks[2]);
        self.draw_footer(frame, chunks[3]);

        if let Some(dialog) = &self.dialog {
            draw_dialog(frame, area, dialog);
        }
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Form;
        let mut block = Block::default()
            .title("Add listing")
            .borders(Borders::ALL);
        if focused {
            block = block.border_style(Style::default().fg(Color::Cyan));
        }
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let mut lines: Vec<Line> = Field::ALL
            .into_iter()
            .map(|field| self.form.build_line(field, focused))
            .collect();
        lines.push(Line::from(Span::styled(
            ADD_BUTTON,
            Style::default().add_modifier(Modifier::BOLD),
        )));

        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, inner);

        if focused && self.dialog.is_none() {
            let active = self.form.active;
            let prefix = (LABEL_WIDTH + 2) as u16;
            let cursor_x = inner.x + prefix + self.form.value_len(active) as u16;
            let cursor_y = inner.y + active.index() as u16;
            if cursor_y < inner.y + inner.height {
                frame.set_cursor_position((cursor_x.min(inner.x + inner.width), cursor_y));
            }
        }
    }

    fn draw_table(&mut self, frame: &mut Frame, area: Rect, hscroll_area: Rect) {
        let focused = self.focus == Focus::Table;
        let fields = Field::ALL;
        let total = fields.len();
        let visible = visible_columns(area.width.saturating_sub(3), MIN_COLUMN_WIDTH, total);
        self.column_offset =
            scroll_offset(self.column_offset, self.header.index(), visible, total);
        let columns = &fields[self.column_offset..self.column_offset + visible];

        let table_view = self.register.table();
        let header = Row::new(columns.iter().map(|field| {
            let mut label = field.label().to_string();
            if let Some(direction) = table_view.sort_marker(*field) {
                label.push(' ');
                label.push_str(direction.marker());
            }
            let style = if focused && *field == self.header {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Cell::from(label).style(style)
        }));

        let rows = table_view.rows().iter().map(|row| {
            Row::new(
                columns
                    .iter()
                    .map(|field| Cell::from(row[field.index()].clone())),
            )
        });

        let widths = vec![Constraint::Min(MIN_COLUMN_WIDTH); visible];
        let mut block = Block::default()
            .title(format!("Listings ({})", table_view.len()))
            .borders(Borders::ALL);
        if focused {
            block = block.border_style(Style::default().fg(Color::Cyan));
        }

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let row_count = table_view.len();
        frame.render_stateful_widget(table, area, &mut self.table_state);

        let mut vertical = ScrollbarState::new(row_count)
            .position(self.table_state.selected().unwrap_or(0));
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut vertical,
        );

        let mut horizontal = ScrollbarState::new(total.saturating_sub(visible) + 1)
            .position(self.column_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::HorizontalBottom),
            hscroll_area,
            &mut horizontal,
        );
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph =
            Paragraph::new(vec![status_line, self.footer_instructions()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key = |text: &'static str| Span::styled(text, Style::default().fg(Color::Cyan));
        match self.focus {
            Focus::Form => Line::from(vec![
                key("Tab/↑↓"),
                Span::raw(" Field  "),
                key("Enter"),
                Span::raw(" Add  "),
                key("F2"),
                Span::raw(" Table  "),
                key("Esc"),
                Span::raw(" Quit"),
            ]),
            Focus::Table => Line::from(vec![
                key("↑↓/PgUp/PgDn"),
                Span::raw(" Scroll  "),
                key("←→"),
                Span::raw(" Column  "),
                key("Enter/s"),
                Span::raw(" Sort  "),
                key("F2"),
                Span::raw(" Form  "),
                key("q"),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

fn draw_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    let popup_area = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(dialog.kind.title())
        .borders(Borders::ALL)
        .border_style(dialog.kind.style());
    let lines = vec![
        Line::from(dialog.message.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to dismiss",
            Style::default().fg(Color::Gray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, popup_area);
}
