// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use ratatui::style::{Color, Modifier, Style};

pub const BAR_STYLE: Style = Style::new().fg(Color::White);

pub const VALUE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::White);

pub const LABEL_STYLE: Style = Style::new().fg(Color::Yellow);

pub const TAB_HIGHLIGHT_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

pub const STATUS_STYLE: Style = Style::new().fg(Color::White).bg(Color::Blue);
