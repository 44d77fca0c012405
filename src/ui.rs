// src/ui.rs
use crate::filesystem::FileMetadata;
use crate::utils::formatter::report_rows;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use std::io;

fn report_table(report: &FileMetadata) -> Table<'static> {
    let rows = report_rows(report);
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) as u16;

    let rows: Vec<Row> = rows
        .into_iter()
        .map(|(label, value)| {
            Row::new(vec![
                Cell::from(label).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Cell::from(value),
            ])
        })
        .collect();

    Table::new(rows, [Constraint::Length(label_width), Constraint::Min(10)])
        .column_spacing(2)
        .block(
            Block::default()
                .title(" filemeta (q to quit) ")
                .borders(Borders::ALL),
        )
}

/// Shows the report full-screen until `q` or `Esc` is pressed.
pub fn run(report: &FileMetadata) -> io::Result<()> {
    enable_raw_mode()?;
    restore_on_err(execute!(io::stdout(), EnterAlternateScreen), disable_raw_mode)?;

    let result = event_loop(report);

    // restore the terminal even when drawing failed
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    result
}

/// Runs `restore` when `result` is an error, keeping the original error.
fn restore_on_err<T>(result: io::Result<T>, restore: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if result.is_err() {
        let _ = restore();
    }
    result
}

fn event_loop(report: &FileMetadata) -> io::Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let table = report_table(report);

    loop {
        terminal.draw(|f| {
            f.render_widget(table.clone(), f.size());
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                break;
            }
        }
    }

    Ok(())
}
