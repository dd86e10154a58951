// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::debug;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect, Size},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Paragraph, Tabs},
    Frame,
};

use super::{style, Panel, UI};

const ASPECT_BAR_WIDTH: u16 = 9;
const BORDERS: u16 = 2;

pub fn render_ui(f: &mut Frame, ui: &mut UI) {
    let area = f.area();
    ui.set_frame_size(Size {
        width: area.width,
        height: area.height,
    });
    debug!("frame area: {:?}", area);

    let [tabs_area, main_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_tabs(f, ui, tabs_area);
    if ui.help_shown() {
        render_help(f, main_area);
    } else {
        match ui.panel() {
            Panel::Residues => render_residues(f, ui, main_area),
            Panel::Lengths => render_lengths(f, ui, main_area),
            Panel::Aspects => render_aspects(f, ui, main_area),
        }
    }
    render_status(f, ui, status_area);
}

fn render_tabs(f: &mut Frame, ui: &UI, area: Rect) {
    let tabs = Tabs::new(Panel::ALL.iter().map(|p| p.to_string()))
        .select(ui.panel().index())
        .highlight_style(style::TAB_HIGHLIGHT_STYLE);
    f.render_widget(tabs, area);
}

fn render_no_data(f: &mut Frame, panel: Panel, area: Rect) {
    let block = Block::bordered().title(panel.chart_title());
    f.render_widget(Paragraph::new("(no data)").block(block), area);
}

// One horizontal bar per residue, most frequent at the top.
fn render_residues(f: &mut Frame, ui: &UI, area: Rect) {
    let residues = &ui.app().summary.residues;
    if residues.is_empty() {
        render_no_data(f, Panel::Residues, area);
        return;
    }
    let bars: Vec<Bar> = residues
        .iter()
        .map(|rc| {
            Bar::default()
                .value(rc.count as u64)
                .label(Line::from(rc.residue.to_string()))
                .text_value(rc.count.to_string())
        })
        .collect();
    let chart = BarChart::default()
        .block(Block::bordered().title(Panel::Residues.chart_title()))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(style::BAR_STYLE)
        .value_style(style::VALUE_STYLE)
        .label_style(style::LABEL_STYLE)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

// Vertical bars, one per bin, labelled with the bin's lower bound. Bars are as wide as the panel
// allows.
fn render_lengths(f: &mut Frame, ui: &UI, area: Rect) {
    let bins = &ui.app().summary.length_histogram;
    if bins.is_empty() {
        render_no_data(f, Panel::Lengths, area);
        return;
    }
    let inner_width = area.width.saturating_sub(BORDERS);
    let slot = inner_width / u16::try_from(bins.len()).unwrap_or(u16::MAX).max(1);
    let bar_width = slot.saturating_sub(1).max(1);
    let bars: Vec<Bar> = bins
        .iter()
        .map(|bin| {
            Bar::default()
                .value(bin.count as u64)
                .label(Line::from(format!("{:.0}", bin.start)))
                .text_value(bin.count.to_string())
        })
        .collect();
    let chart = BarChart::default()
        .block(Block::bordered().title(Panel::Lengths.chart_title()))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(style::BAR_STYLE)
        .value_style(style::VALUE_STYLE)
        .label_style(style::LABEL_STYLE)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

fn render_aspects(f: &mut Frame, ui: &UI, area: Rect) {
    let aspects = &ui.app().summary.aspects;
    if aspects.is_empty() {
        render_no_data(f, Panel::Aspects, area);
        return;
    }
    let bars: Vec<Bar> = aspects
        .iter()
        .map(|ac| {
            Bar::default()
                .value(ac.count as u64)
                .label(Line::from(ac.aspect.clone()))
                .text_value(ac.count.to_string())
        })
        .collect();
    let chart = BarChart::default()
        .block(Block::bordered().title(Panel::Aspects.chart_title()))
        .bar_width(ASPECT_BAR_WIDTH)
        .bar_gap(2)
        .bar_style(style::BAR_STYLE)
        .value_style(style::VALUE_STYLE)
        .label_style(style::LABEL_STYLE)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let text = include_str!("bindings.md");
    let help = Paragraph::new(text).block(Block::bordered().title(" Help "));
    f.render_widget(help, area);
}

fn render_status(f: &mut Frame, ui: &UI, area: Rect) {
    let app = ui.app();
    let status = format!(
        " {} | {} records | {} annotations | ?: help, q: quit",
        app.filename,
        app.num_records(),
        app.num_annotations()
    );
    f.render_widget(Paragraph::new(status).style(style::STATUS_STYLE), area);
}
