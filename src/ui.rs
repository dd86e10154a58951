// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
pub mod key_handling;
pub mod render;
mod style;

use std::fmt;

use log::debug;

use ratatui::layout::Size;

use crate::app::App;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Panel {
    Residues,
    Lengths,
    Aspects,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Residues, Panel::Lengths, Panel::Aspects];

    pub fn index(&self) -> usize {
        match self {
            Panel::Residues => 0,
            Panel::Lengths => 1,
            Panel::Aspects => 2,
        }
    }

    // 1-based, as on the keyboard.
    pub fn from_digit(d: char) -> Option<Panel> {
        let n = d.to_digit(10)? as usize;
        if n == 0 {
            return None;
        }
        Panel::ALL.get(n - 1).copied()
    }

    pub fn next(&self) -> Panel {
        Panel::ALL[(self.index() + 1) % Panel::ALL.len()]
    }

    pub fn prev(&self) -> Panel {
        Panel::ALL[(self.index() + Panel::ALL.len() - 1) % Panel::ALL.len()]
    }

    pub fn chart_title(&self) -> &'static str {
        match self {
            Panel::Residues => " Amino-acid frequency ",
            Panel::Lengths => " Sequence length distribution ",
            Panel::Aspects => " GO aspects ",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Panel::Residues => "Amino acids",
            Panel::Lengths => "Lengths",
            Panel::Aspects => "Aspects",
        };
        write!(f, "{}", s)
    }
}

pub struct UI<'a> {
    app: &'a App,
    panel: Panel,
    show_help: bool,
    frame_size: Option<Size>,
}

impl<'a> UI<'a> {
    pub fn new(app: &'a App) -> Self {
        UI {
            app,
            panel: Panel::Residues,
            show_help: false,
            frame_size: None,
        }
    }

    pub fn app(&self) -> &App {
        self.app
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn select_panel(&mut self, panel: Panel) {
        debug!("panel: {:?} -> {:?}", self.panel, panel);
        self.panel = panel;
    }

    pub fn next_panel(&mut self) {
        self.select_panel(self.panel.next());
    }

    pub fn prev_panel(&mut self) {
        self.select_panel(self.panel.prev());
    }

    pub fn help_shown(&self) -> bool {
        self.show_help
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn frame_size(&self) -> Option<Size> {
        self.frame_size
    }

    fn set_frame_size(&mut self, size: Size) {
        self.frame_size = Some(size);
    }
}
