// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    io::{stdout, Write},
    path::PathBuf,
    time::Duration,
};

use log::{debug, info};

use clap::Parser;

use crossterm::{
    event::{self, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};

use ratatui::{
    prelude::{CrosstermBackend, Rect, Terminal},
    TerminalOptions, Viewport,
};

use crate::app::App;
use crate::errors::EdaError;
use crate::paths::DataLayout;
use crate::seq::fasta::read_fasta_file;
use crate::terms::read_terms_file;
use crate::ui::{key_handling::handle_key_press, render::render_ui, UI};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Dataset root (must contain data/Train and data/Test (Targets))
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Show key bindings and exit successfully
    #[arg(short = 'k', long = "show-bindings")]
    show_bindings: bool,

    /// Info mode (print a text report, no TUI)
    #[arg(short, long)]
    info: bool,

    /// Print the summary as JSON (no TUI)
    #[arg(short, long, conflicts_with = "info")]
    json: bool,

    /// Number of bins in the length histogram
    #[arg(short, long, default_value_t = 30, value_parser = clap::value_parser!(u16).range(1..))]
    bins: u16,

    /// Number of table rows shown in info mode
    #[arg(short = 'n', long, default_value_t = 5)]
    head: usize,

    /// Fixed terminal width (mostly used for testing/debugging)
    #[arg(short, long, requires = "height")]
    width: Option<u16>,

    /// Fixed terminal height ("tall" -- -h is already used)
    #[arg(short = 't', long, requires = "width")]
    height: Option<u16>,

    /// Poll wait time [ms]
    #[clap(long = "poll-wait-time", default_value_t = 100)]
    poll_wait_time: u64,
}

pub fn run() -> Result<(), EdaError> {
    let cli = Cli::parse();

    if cli.show_bindings {
        println!("{}", include_str!("ui/bindings.md"));
        return Ok(());
    }

    // All directories are checked before anything is read.
    let layout = DataLayout::resolve(&cli.root)?;
    let seq_path = layout.train_sequences();
    let table = read_fasta_file(&seq_path)?;
    let terms = read_terms_file(layout.train_terms())?;
    let app = App::new(&seq_path.display().to_string(), table, &terms, usize::from(cli.bins));

    if cli.json {
        let mut out = stdout().lock();
        app.output_json(&mut out)?;
        out.flush()?;
        return Ok(());
    }
    if cli.info {
        info!("Running in info mode.");
        let mut out = stdout().lock();
        app.output_info(&mut out, cli.head)?;
        out.flush()?;
        return Ok(());
    }

    enable_raw_mode()?;
    if let Err(e) = stdout().execute(EnterAlternateScreen) {
        disable_raw_mode()?;
        return Err(e.into());
    }

    // Restore the terminal even if the loop fails.
    let result = event_loop(&cli, &app);

    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}

fn event_loop(cli: &Cli, app: &App) -> Result<(), EdaError> {
    let backend = CrosstermBackend::new(stdout());
    // Fix viewport dimensions IFF supplied (mainly for tests)
    let viewport = match (cli.width, cli.height) {
        (Some(width), Some(height)) => Viewport::Fixed(Rect::new(0, 0, width, height)),
        _ => Viewport::Fullscreen,
    };
    let mut terminal = Terminal::with_options(backend, TerminalOptions { viewport })?;
    terminal.clear()?;

    let mut app_ui = UI::new(app);

    // main loop
    loop {
        debug!("\n**** Draw Iteration ****");
        terminal.draw(|f| render_ui(f, &mut app_ui))?;
        if event::poll(Duration::from_millis(cli.poll_wait_time))? {
            if let event::Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // handle_key_press() returns true IFF user quits
                    let done = handle_key_press(&mut app_ui, key);
                    if done {
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}
