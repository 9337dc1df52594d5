//! TUI application state and event handling

use crate::constants::*;
use crate::document::DocumentLoader;
use crate::highlight::{Highlighter, MatchRecord, PatternStatus};
use crate::logging::{debug_log, info_log};
use crate::matcher::MatchOptions;
use crate::tui::events::{KeyAction, MouseAction};
use crate::tui::text_view::TextView;
use crate::tui::ui::MatchListArea;
use crate::validation::InputValidator;
use crate::{RegexplorerError, Result};
use std::path::{Path, PathBuf};

/// Input focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    /// Typing edits the pattern
    Pattern,
    /// Typing edits the subject text
    Text,
    /// Typing edits the path in the open-file prompt
    OpenFile,
}

/// Main TUI application state
pub struct App {
    /// Pattern, text and matches
    pub highlighter: Highlighter,

    /// Presentation of the highlighted document
    pub view: TextView,

    /// Current input focus state
    pub focus: InputFocus,

    /// Focus to return to when the open-file prompt closes
    prompt_return_focus: InputFocus,

    /// Path typed at the open-file prompt
    pub path_input: String,

    /// File the text was loaded from, if any
    pub loaded_path: Option<PathBuf>,

    /// Last error or notice shown in the status bar
    pub message: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Where the match list was drawn, for mouse clicks
    pub match_list_area: Option<MatchListArea>,
}

impl App {
    /// Create new application instance
    pub fn new(options: MatchOptions) -> Self {
        let mut highlighter = Highlighter::new();
        highlighter.set_options(options);

        Self {
            highlighter,
            view: TextView::new(),
            focus: InputFocus::Pattern,
            prompt_return_focus: InputFocus::Pattern,
            path_input: String::new(),
            loaded_path: None,
            message: None,
            should_quit: false,
            match_list_area: None,
        }
    }

    /// Dispatch a key action
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::PreviousMatch => self.highlighter.previous(),
            KeyAction::NextMatch => self.highlighter.next(),
            KeyAction::FirstMatch => self.highlighter.first(),
            KeyAction::LastMatch => self.highlighter.last(),
            KeyAction::ScrollUp => self.view.scroll_up(PAGE_SCROLL_LINES),
            KeyAction::ScrollDown => self.view.scroll_down(PAGE_SCROLL_LINES),
            KeyAction::CycleFocus => self.toggle_focus(),
            KeyAction::RunSearch => self.highlighter.run(),
            KeyAction::OpenFile => self.open_file_prompt(),
            KeyAction::Confirm => self.confirm_open_file(),
            KeyAction::Cancel => self.close_prompt(),
            KeyAction::NewLine => self.input_char('\n'),
            KeyAction::InputChar(c) => self.input_char(c),
            KeyAction::DeleteChar => self.delete_char(),
            KeyAction::None => {}
        }
    }

    /// Dispatch a mouse action
    pub fn handle_mouse_action(&mut self, action: MouseAction) {
        match action {
            MouseAction::ClickAt(column, row) => {
                self.handle_match_list_click(column, row);
            }
            MouseAction::ScrollUp => self.view.scroll_up(1),
            MouseAction::ScrollDown => self.view.scroll_down(1),
            MouseAction::None => {}
        }
    }

    /// Toggle input focus between pattern and text
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            InputFocus::Pattern => InputFocus::Text,
            InputFocus::Text => InputFocus::Pattern,
            InputFocus::OpenFile => InputFocus::OpenFile,
        };
    }

    /// Set quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Insert a typed character into whatever has focus
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            InputFocus::Pattern => {
                let mut pattern = self.highlighter.pattern().to_string();
                pattern.push(c);
                self.update_pattern(pattern);
            }
            InputFocus::Text => {
                let mut text = self.highlighter.text().to_string();
                text.push(c);
                self.highlighter.set_text(&text);
            }
            InputFocus::OpenFile => self.path_input.push(c),
        }
    }

    /// Remove the last character of whatever has focus
    pub fn delete_char(&mut self) {
        match self.focus {
            InputFocus::Pattern => {
                let mut pattern = self.highlighter.pattern().to_string();
                if pattern.pop().is_some() {
                    self.update_pattern(pattern);
                }
            }
            InputFocus::Text => {
                let mut text = self.highlighter.text().to_string();
                if text.pop().is_some() {
                    self.highlighter.set_text(&text);
                }
            }
            InputFocus::OpenFile => {
                self.path_input.pop();
            }
        }
    }

    /// Update the pattern, refusing patterns over the length limit
    pub fn update_pattern(&mut self, pattern: String) {
        match InputValidator::validate_pattern_length(&pattern) {
            Ok(()) => {
                self.message = None;
                self.highlighter.set_pattern(&pattern);
            }
            Err(e) => self.message = Some(e.status_message()),
        }
    }

    /// Show the open-file prompt
    pub fn open_file_prompt(&mut self) {
        if self.focus != InputFocus::OpenFile {
            self.prompt_return_focus = self.focus;
        }
        self.focus = InputFocus::OpenFile;
        self.path_input.clear();
    }

    /// Close the prompt without changing the text
    pub fn close_prompt(&mut self) {
        self.focus = self.prompt_return_focus;
        self.path_input.clear();
    }

    /// Load the file named at the prompt
    pub fn confirm_open_file(&mut self) {
        let input = self.path_input.clone();
        match DocumentLoader::load_from_input(&input) {
            Ok(text) => {
                let path = PathBuf::from(input.trim());
                self.set_loaded_text(path, &text);
                self.close_prompt();
            }
            Err(e) => self.open_file_failed(&e),
        }
    }

    fn open_file_failed(&mut self, err: &RegexplorerError) {
        debug_log(&format!("Open file failed: {}", err.status_message()));
        self.message = Some(err.status_message());
        // Keep the prompt open only when a corrected path can help
        if !err.is_recoverable() {
            self.close_prompt();
        }
    }

    /// Load a file as the subject text
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let text = DocumentLoader::load_text(path)?;
        self.set_loaded_text(path.to_path_buf(), &text);
        Ok(())
    }

    fn set_loaded_text(&mut self, path: PathBuf, text: &str) {
        info_log(&format!("Subject text loaded from {}", path.display()));
        self.highlighter.set_text(text);
        self.loaded_path = Some(path);
        self.message = None;
    }

    /// Select the match under a click in the match list.
    /// Returns true if the click selected a match.
    pub fn handle_match_list_click(&mut self, column: u16, row: u16) -> bool {
        let area = match &self.match_list_area {
            Some(area) => area.clone(),
            None => return false,
        };

        if column < area.left
            || column >= area.left + area.width
            || row < area.top
            || row >= area.top + area.height
        {
            return false;
        }

        let index = area.first_visible + (row - area.top) as usize;
        if index < self.highlighter.matches().len() {
            self.highlighter.set_current_index(index as isize);
            true
        } else {
            false
        }
    }

    /// Push pending document changes to the view, holding back scroll
    /// requests until the next frame has been laid out
    pub fn sync_view(&mut self) {
        self.highlighter.flush_layout(&mut self.view);
    }

    /// Apply held-back scroll requests. Returns true if a redraw is needed.
    pub fn flush_scrolls(&mut self) -> bool {
        if !self.highlighter.has_pending_updates() {
            return false;
        }
        self.highlighter.flush(&mut self.view);
        true
    }

    /// Title of the text pane
    pub fn text_title(&self) -> String {
        match &self.loaded_path {
            Some(path) => format!("Text - {}", path.display()),
            None => "Text".to_string(),
        }
    }

    /// Summary of the last highlight pass for the status bar
    pub fn status_summary(&self) -> String {
        let flags = self.highlighter.options().flags();
        match self.highlighter.status() {
            PatternStatus::Empty => format!("Type a pattern [{}]", flags),
            PatternStatus::Valid { matches: 0 } => format!("No matches [{}]", flags),
            PatternStatus::Valid { matches } => format!(
                "Match {}/{} [{}]",
                self.highlighter.current_index() + 1,
                matches,
                flags
            ),
            PatternStatus::Invalid { reason } => reason.clone(),
        }
    }

    /// Label for one entry of the match list
    pub fn match_label(&self, record: &MatchRecord) -> String {
        let end = record.start_offset + record.length;
        let matched = &self.highlighter.text()[record.start_offset..end];
        let mut preview: String = matched
            .chars()
            .take(MATCH_PREVIEW_CHARS)
            .collect::<String>()
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t");
        if matched.chars().count() > MATCH_PREVIEW_CHARS {
            preview.push('…');
        }
        format!("{}:{}  {}", record.line_number, record.column_number, preview)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(MatchOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key_action(KeyAction::InputChar(c));
        }
    }

    fn app_with(pattern: &str, text: &str) -> App {
        let mut app = App::default();
        app.highlighter.set_text(text);
        app.highlighter.set_pattern(pattern);
        app
    }

    #[test]
    fn test_typing_edits_pattern_and_highlights() {
        let mut app = App::default();
        app.highlighter.set_text("abc\ndef\nabc");
        type_str(&mut app, "abc");

        assert_eq!(app.highlighter.pattern(), "abc");
        assert_eq!(app.highlighter.matches().len(), 2);

        app.handle_key_action(KeyAction::DeleteChar);
        assert_eq!(app.highlighter.pattern(), "ab");
        assert_eq!(app.highlighter.matches().len(), 2);
    }

    #[test]
    fn test_typing_edits_text_after_focus_switch() {
        let mut app = App::default();
        type_str(&mut app, "b");
        app.handle_key_action(KeyAction::CycleFocus);
        assert_eq!(app.focus, InputFocus::Text);

        type_str(&mut app, "ab");
        app.handle_key_action(KeyAction::NewLine);
        type_str(&mut app, "b");
        assert_eq!(app.highlighter.text(), "ab\nb");
        assert_eq!(app.highlighter.matches().len(), 2);

        app.handle_key_action(KeyAction::DeleteChar);
        assert_eq!(app.highlighter.text(), "ab\n");

        app.handle_key_action(KeyAction::CycleFocus);
        assert_eq!(app.focus, InputFocus::Pattern);
    }

    #[test]
    fn test_delete_on_empty_input_is_noop() {
        let mut app = App::default();
        app.handle_key_action(KeyAction::DeleteChar);
        assert_eq!(app.highlighter.pattern(), "");
        app.toggle_focus();
        app.handle_key_action(KeyAction::DeleteChar);
        assert_eq!(app.highlighter.text(), "");
    }

    #[test]
    fn test_navigation_actions() {
        let mut app = app_with("o", "foo boo");
        app.handle_key_action(KeyAction::NextMatch);
        assert_eq!(app.highlighter.current_index(), 1);
        app.handle_key_action(KeyAction::LastMatch);
        assert_eq!(app.highlighter.current_index(), 3);
        app.handle_key_action(KeyAction::NextMatch);
        assert_eq!(app.highlighter.current_index(), 0);
        app.handle_key_action(KeyAction::PreviousMatch);
        assert_eq!(app.highlighter.current_index(), 3);
        app.handle_key_action(KeyAction::FirstMatch);
        assert_eq!(app.highlighter.current_index(), 0);
    }

    #[test]
    fn test_quit_action() {
        let mut app = App::default();
        assert!(!app.should_quit);
        app.handle_key_action(KeyAction::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_overlong_pattern_is_refused() {
        let mut app = App::default();
        app.update_pattern("a".repeat(PATTERN_MAX_LENGTH));
        app.handle_key_action(KeyAction::InputChar('a'));

        assert_eq!(app.highlighter.pattern().len(), PATTERN_MAX_LENGTH);
        assert!(app.message.is_some());
    }

    #[test]
    fn test_open_file_prompt_loads_text() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "abc\ndef\nabc").unwrap();

        let mut app = App::default();
        app.handle_key_action(KeyAction::CycleFocus);
        app.handle_key_action(KeyAction::OpenFile);
        assert_eq!(app.focus, InputFocus::OpenFile);

        type_str(&mut app, &file.path().display().to_string());
        app.handle_key_action(KeyAction::Confirm);

        assert_eq!(app.highlighter.text(), "abc\ndef\nabc");
        assert_eq!(app.loaded_path.as_deref(), Some(file.path()));
        assert_eq!(app.focus, InputFocus::Text);
        assert!(app.path_input.is_empty());
        assert!(app.text_title().starts_with("Text - "));
    }

    #[test]
    fn test_open_file_failure_keeps_text() {
        let mut app = app_with("a", "keep me");
        app.handle_key_action(KeyAction::OpenFile);
        type_str(&mut app, "/definitely/not/here.txt");
        app.handle_key_action(KeyAction::Confirm);

        assert_eq!(app.highlighter.text(), "keep me");
        assert_eq!(app.focus, InputFocus::OpenFile);
        assert!(app.message.as_deref().unwrap().starts_with("cannot open"));
    }

    #[test]
    fn test_unrecoverable_open_failure_closes_prompt() {
        let mut app = app_with("a", "keep me");
        app.handle_key_action(KeyAction::CycleFocus);
        app.handle_key_action(KeyAction::OpenFile);
        type_str(&mut app, "notes.txt");

        let err = RegexplorerError::IoError(std::io::Error::new(
            std::io::ErrorKind::Other,
            "device gone",
        ));
        app.open_file_failed(&err);

        assert_eq!(app.focus, InputFocus::Text);
        assert_eq!(app.message.as_deref(), Some("io error: device gone"));
        assert_eq!(app.highlighter.text(), "keep me");
    }

    #[test]
    fn test_cancel_prompt_restores_focus() {
        let mut app = app_with("a", "keep me");
        app.handle_key_action(KeyAction::OpenFile);
        type_str(&mut app, "abc");
        assert_eq!(app.path_input, "abc");
        // Typing at the prompt leaves the pattern alone
        assert_eq!(app.highlighter.pattern(), "a");

        app.handle_key_action(KeyAction::Cancel);
        assert_eq!(app.focus, InputFocus::Pattern);
        assert!(app.path_input.is_empty());
        assert_eq!(app.highlighter.text(), "keep me");
    }

    #[test]
    fn test_load_file_missing_is_error() {
        let mut app = App::default();
        assert!(app.load_file(Path::new("/no/such/file")).is_err());
        assert!(app.loaded_path.is_none());
    }

    #[test]
    fn test_match_list_click_selects_match() {
        let mut app = app_with("o", "foo boo");
        app.match_list_area = Some(MatchListArea {
            top: 5,
            height: 10,
            left: 40,
            width: 20,
            first_visible: 0,
        });

        assert!(app.handle_match_list_click(45, 7));
        assert_eq!(app.highlighter.current_index(), 2);

        // Outside the list or past the last entry
        assert!(!app.handle_match_list_click(10, 7));
        assert!(!app.handle_match_list_click(45, 4));
        assert!(!app.handle_match_list_click(45, 12));
        assert_eq!(app.highlighter.current_index(), 2);
    }

    #[test]
    fn test_match_list_click_accounts_for_scrolled_list() {
        let mut app = app_with("o", "foo boo");
        app.match_list_area = Some(MatchListArea {
            top: 0,
            height: 2,
            left: 0,
            width: 20,
            first_visible: 2,
        });
        assert!(app.handle_match_list_click(1, 1));
        assert_eq!(app.highlighter.current_index(), 3);
    }

    #[test]
    fn test_sync_view_defers_scrolls() {
        let mut app = app_with("abc", "abc");
        app.sync_view();
        assert!(app.flush_scrolls());
        assert!(!app.flush_scrolls());
    }

    #[test]
    fn test_status_summary() {
        let app = App::default();
        assert_eq!(app.status_summary(), "Type a pattern [mx]");

        let app = app_with("zzz", "abc");
        assert_eq!(app.status_summary(), "No matches [mx]");

        let mut app = app_with("o", "foo boo");
        app.highlighter.next();
        assert_eq!(app.status_summary(), "Match 2/4 [mx]");

        let app = app_with("[a-", "abc");
        assert!(app.status_summary().starts_with("invalid pattern"));
    }

    #[test]
    fn test_match_label() {
        let app = app_with(r"b\nc", "ab\ncd");
        let record = app.highlighter.matches()[0].clone();
        assert_eq!(app.match_label(&record), "1:2  b\\nc");

        let long = "x".repeat(MATCH_PREVIEW_CHARS + 5);
        let app = app_with("x+", &long);
        let record = app.highlighter.matches()[0].clone();
        let label = app.match_label(&record);
        assert!(label.starts_with("1:1  "));
        assert!(label.ends_with('…'));
    }
}
