use crate::github::types::Record;
use crate::tui::event::Action;
use crate::tui::theme::ThemeColors;

/// Selection state for one picker session.
///
/// `apply` is the only way the state changes. Once `terminated` is set the
/// state is frozen and the caller reads `chosen`.
pub struct App {
    records: Vec<Record>,
    cursor: usize,
    chosen: Option<String>,
    terminated: bool,
    pub label: String,
    pub theme: ThemeColors,
}

impl App {
    pub fn new(records: Vec<Record>, label: impl Into<String>) -> Self {
        Self {
            records,
            cursor: 0,
            chosen: None,
            terminated: false,
            label: label.into(),
            theme: ThemeColors::default(),
        }
    }

    pub fn with_theme(mut self, theme: ThemeColors) -> Self {
        self.theme = theme;
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Cursor position, or `None` when there is nothing to point at
    pub fn cursor(&self) -> Option<usize> {
        if self.records.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.cursor().and_then(|i| self.records.get(i))
    }

    /// Apply one transition
    pub fn apply(&mut self, action: Action) {
        if self.terminated {
            return;
        }
        match action {
            Action::MoveUp => self.previous_row(),
            Action::MoveDown => self.next_row(),
            Action::Confirm => self.confirm(),
            Action::Cancel => self.terminated = true,
            Action::None => {}
        }
    }

    /// Consume the finished session and hand back the choice
    pub fn into_chosen(self) -> Option<String> {
        self.chosen
    }

    fn next_row(&mut self) {
        if self.cursor + 1 < self.records.len() {
            self.cursor += 1;
        }
    }

    fn previous_row(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn confirm(&mut self) {
        self.chosen = self
            .selected_record()
            .filter(|record| record.is_actionable())
            .map(|record| record.url.clone());
        self.terminated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new(1, "svc-a", "Fix bug", "url1"),
            Record::new(2, "svc-b", "Add feature", "url2"),
        ]
    }

    fn three_records() -> Vec<Record> {
        vec![
            Record::new(1, "a", "one", "u1"),
            Record::new(2, "b", "two", "u2"),
            Record::new(3, "c", "three", "u3"),
        ]
    }

    #[test]
    fn test_initial_state() {
        let app = App::new(sample_records(), "to review");
        assert_eq!(app.cursor(), Some(0));
        assert_eq!(app.chosen(), None);
        assert!(!app.is_terminated());
    }

    #[test]
    fn test_move_down_then_confirm() {
        let mut app = App::new(sample_records(), "to review");
        app.apply(Action::MoveDown);
        app.apply(Action::Confirm);
        assert_eq!(app.chosen(), Some("url2"));
        assert!(app.is_terminated());
    }

    #[test]
    fn test_cancel_immediately() {
        let mut app = App::new(sample_records(), "to review");
        app.apply(Action::Cancel);
        assert_eq!(app.chosen(), None);
        assert!(app.is_terminated());
    }

    #[test]
    fn test_cancel_after_moves_leaves_nothing_chosen() {
        let mut app = App::new(three_records(), "reviewed");
        app.apply(Action::MoveDown);
        app.apply(Action::MoveDown);
        app.apply(Action::Cancel);
        assert_eq!(app.chosen(), None);
        assert!(app.is_terminated());
    }

    #[test]
    fn test_move_up_at_top_is_noop() {
        let mut app = App::new(three_records(), "reviewed");
        app.apply(Action::MoveUp);
        assert_eq!(app.cursor(), Some(0));
        assert!(!app.is_terminated());
    }

    #[test]
    fn test_move_down_at_bottom_is_noop() {
        let mut app = App::new(three_records(), "reviewed");
        app.apply(Action::MoveDown);
        app.apply(Action::MoveDown);
        assert_eq!(app.cursor(), Some(2));
        app.apply(Action::MoveDown);
        assert_eq!(app.cursor(), Some(2));
    }

    #[test]
    fn test_cursor_stays_in_bounds_under_any_moves() {
        // Deterministic pseudo-random walk over list sizes 1..=6
        for len in 1..=6u64 {
            let records: Vec<Record> = (0..len)
                .map(|i| Record::new(i, "g", "t", &format!("u{}", i)))
                .collect();
            let mut app = App::new(records, "x");
            let mut seed: u64 = 0x2545_f491_4f6c_dd1d ^ len;
            for _ in 0..500 {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                let action = if seed % 2 == 0 { Action::MoveUp } else { Action::MoveDown };
                app.apply(action);
                let cursor = app.cursor().unwrap();
                assert!(cursor < len as usize);
            }
        }
    }

    #[test]
    fn test_no_wrap_around() {
        let mut app = App::new(three_records(), "x");
        for _ in 0..10 {
            app.apply(Action::MoveDown);
        }
        assert_eq!(app.cursor(), Some(2));
        for _ in 0..10 {
            app.apply(Action::MoveUp);
        }
        assert_eq!(app.cursor(), Some(0));
    }

    #[test]
    fn test_terminated_is_absorbing() {
        let mut app = App::new(three_records(), "x");
        app.apply(Action::MoveDown);
        app.apply(Action::Confirm);
        assert_eq!(app.chosen(), Some("u2"));

        app.apply(Action::MoveDown);
        app.apply(Action::MoveUp);
        app.apply(Action::Confirm);
        app.apply(Action::Cancel);
        assert_eq!(app.cursor(), Some(1));
        assert_eq!(app.chosen(), Some("u2"));
        assert!(app.is_terminated());
    }

    #[test]
    fn test_cancel_then_confirm_chooses_nothing() {
        let mut app = App::new(three_records(), "x");
        app.apply(Action::Cancel);
        app.apply(Action::Confirm);
        assert_eq!(app.chosen(), None);
    }

    #[test]
    fn test_empty_list_confirm() {
        let mut app = App::new(Vec::new(), "to review");
        assert_eq!(app.cursor(), None);
        app.apply(Action::MoveDown);
        app.apply(Action::MoveUp);
        assert_eq!(app.cursor(), None);
        app.apply(Action::Confirm);
        assert_eq!(app.chosen(), None);
        assert!(app.is_terminated());
    }

    #[test]
    fn test_empty_list_cancel() {
        let mut app = App::new(Vec::new(), "to review");
        app.apply(Action::Cancel);
        assert!(app.is_terminated());
        assert_eq!(app.into_chosen(), None);
    }

    #[test]
    fn test_confirm_on_record_without_url() {
        let mut app = App::new(vec![Record::new(1, "a", "no link", "")], "x");
        app.apply(Action::Confirm);
        assert!(app.is_terminated());
        assert_eq!(app.chosen(), None);
    }

    #[test]
    fn test_other_input_is_ignored() {
        let mut app = App::new(three_records(), "x");
        app.apply(Action::MoveDown);
        app.apply(Action::None);
        assert_eq!(app.cursor(), Some(1));
        assert!(!app.is_terminated());
    }
}
