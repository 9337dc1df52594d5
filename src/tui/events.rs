//! Event handling for keyboard and mouse input

use crate::tui::app::InputFocus;
use crate::{RegexplorerError, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Event handler for TUI input
pub struct EventHandler;

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    /// Poll for the next event with timeout
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)
            .map_err(|e| RegexplorerError::TuiError(format!("Event polling failed: {}", e)))?
        {
            let event = event::read()
                .map_err(|e| RegexplorerError::TuiError(format!("Event reading failed: {}", e)))?;
            Ok(Some(event))
        } else {
            Ok(None)
        }
    }

    /// Handle a mouse event and return the action to take
    pub fn handle_mouse_event(&self, event: MouseEvent) -> MouseAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                MouseAction::ClickAt(event.column, event.row)
            }
            MouseEventKind::ScrollUp => MouseAction::ScrollUp,
            MouseEventKind::ScrollDown => MouseAction::ScrollDown,
            _ => MouseAction::None,
        }
    }

    /// Handle a key event and return the action to take
    pub fn handle_key_event(&self, event: KeyEvent, focus: InputFocus) -> KeyAction {
        if let KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } = event
        {
            return KeyAction::Quit;
        }

        // The path prompt only edits its own line
        if focus == InputFocus::OpenFile {
            return match event.code {
                KeyCode::Esc => KeyAction::Cancel,
                KeyCode::Enter => KeyAction::Confirm,
                KeyCode::Backspace => KeyAction::DeleteChar,
                KeyCode::Char(c) if is_plain(event.modifiers) => KeyAction::InputChar(c),
                _ => KeyAction::None,
            };
        }

        match event {
            KeyEvent {
                code: KeyCode::Esc, ..
            } => KeyAction::Quit,
            KeyEvent {
                code: KeyCode::Up, ..
            } => KeyAction::PreviousMatch,
            KeyEvent {
                code: KeyCode::Down,
                ..
            } => KeyAction::NextMatch,
            KeyEvent {
                code: KeyCode::Home,
                ..
            } => KeyAction::FirstMatch,
            KeyEvent {
                code: KeyCode::End, ..
            } => KeyAction::LastMatch,
            KeyEvent {
                code: KeyCode::PageUp,
                ..
            } => KeyAction::ScrollUp,
            KeyEvent {
                code: KeyCode::PageDown,
                ..
            } => KeyAction::ScrollDown,
            KeyEvent {
                code: KeyCode::Tab, ..
            } => KeyAction::CycleFocus,
            KeyEvent {
                code: KeyCode::Char('r'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => KeyAction::RunSearch,
            KeyEvent {
                code: KeyCode::Char('o'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => KeyAction::OpenFile,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => match focus {
                InputFocus::Text => KeyAction::NewLine,
                _ => KeyAction::RunSearch,
            },
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers,
                ..
            } if is_plain(modifiers) => KeyAction::InputChar(c),
            KeyEvent {
                code: KeyCode::Backspace,
                modifiers: KeyModifiers::NONE,
                ..
            } => KeyAction::DeleteChar,
            _ => KeyAction::None,
        }
    }
}

/// Typed characters arrive with no modifier or with shift
fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    PreviousMatch,
    NextMatch,
    FirstMatch,
    LastMatch,
    ScrollUp,
    ScrollDown,
    CycleFocus,
    RunSearch,
    OpenFile,
    Confirm,
    Cancel,
    NewLine,
    InputChar(char),
    DeleteChar,
    None,
}

#[derive(Debug, PartialEq)]
pub enum MouseAction {
    None,
    ClickAt(u16, u16),
    ScrollUp,
    ScrollDown,
}
