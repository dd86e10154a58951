// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Thomas Junier
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Panel, UI};

// Returns true IFF the user quits.
pub fn handle_key_press(ui: &mut UI, key_event: KeyEvent) -> bool {
    if ui.help_shown() {
        handle_help_key(ui, key_event)
    } else {
        handle_normal_key(ui, key_event)
    }
}

fn is_ctrl_c(key_event: &KeyEvent) -> bool {
    key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
}

fn handle_normal_key(ui: &mut UI, key_event: KeyEvent) -> bool {
    let mut done = false;
    match key_event.code {
        // Q, q, and Ctrl-C quit
        KeyCode::Char('q') | KeyCode::Char('Q') => done = true,
        _ if is_ctrl_c(&key_event) => done = true,
        KeyCode::Char('?') => ui.toggle_help(),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => ui.next_panel(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => ui.prev_panel(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(panel) = Panel::from_digit(c) {
                ui.select_panel(panel);
            }
        }
        _ => {}
    }
    done
}

// In help mode, most keys just leave help; only Ctrl-C quits outright.
fn handle_help_key(ui: &mut UI, key_event: KeyEvent) -> bool {
    if is_ctrl_c(&key_event) {
        return true;
    }
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('?') | KeyCode::Esc => {
            ui.toggle_help()
        }
        _ => {}
    }
    false
}
