//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Screen, SetupField, SetupState, WorkoutState};
use crate::workout::{render_progress_bar, Phase, WorkoutSummary};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match &app.screen {
        Screen::Setup(setup) => render_setup(frame, setup, chunks[1]),
        Screen::Workout(state) => render_workout(frame, state, chunks[1]),
        Screen::Summary(summary) => render_summary(frame, summary, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = match &app.screen {
        Screen::Setup(_) => " fitshift - New Break Workout ".to_string(),
        Screen::Workout(state) => {
            let session = state.sequencer.session();
            format!(
                " {} - Exercise {}/{} ",
                session.name,
                state.sequencer.current_index() + 1,
                session.len()
            )
        }
        Screen::Summary(summary) => format!(" {} - Complete ", summary.session_name),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the setup form.
fn render_setup(frame: &mut Frame<'_>, setup: &SetupState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let items: Vec<ListItem<'_>> = SetupField::ALL
        .iter()
        .map(|field| {
            let is_selected = *field == setup.field;
            let style = if is_selected {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", field.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("< {} >", setup.choice.value(*field)),
                    Style::default().fg(Color::Yellow),
                ),
            ]))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );
    frame.render_widget(list, chunks[0]);

    let available = setup.eligible_count();
    let hint = Paragraph::new(vec![
        Line::from(format!("{available} exercises available")),
        Line::from(""),
        Line::from("Press Enter to start"),
    ])
    .style(Style::default().fg(if available == 0 {
        Color::Red
    } else {
        Color::Gray
    }));
    frame.render_widget(hint, chunks[1]);
}

/// Render the running workout.
fn render_workout(frame: &mut Frame<'_>, state: &WorkoutState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let sequencer = &state.sequencer;
    let progress = sequencer.overall_progress();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));
    frame.render_widget(gauge, chunks[0]);

    let big = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    let exercise = sequencer.current_exercise();
    let name = exercise.map(|e| e.name.clone()).unwrap_or_default();

    match sequencer.phase() {
        Phase::Ready { countdown } => {
            lines.push(Line::from("Get ready"));
            lines.push(Line::styled(name, big));
            lines.push(Line::from(""));
            lines.push(Line::styled(
                countdown.remaining_seconds().to_string(),
                big.fg(Color::Yellow),
            ));
        }
        Phase::Active { timer } => {
            lines.push(Line::styled(name, big));
            lines.push(Line::from(""));
            lines.push(Line::styled(timer.format_remaining(), big.fg(Color::Green)));
            lines.push(Line::from(render_progress_bar(timer.progress(), 30)));
            if sequencer.is_paused() {
                lines.push(Line::styled("PAUSED", big.fg(Color::Red)));
            }
        }
        Phase::AwaitingCompletion => {
            lines.push(Line::styled(name, big));
            lines.push(Line::from(""));
            if let Some(exercise) = exercise {
                lines.push(Line::styled(
                    exercise.execution.describe(),
                    big.fg(Color::Green),
                ));
            }
            lines.push(Line::from("Press Enter when done"));
        }
        Phase::Rest { timer } => {
            lines.push(Line::styled("Rest", big.fg(Color::Cyan)));
            lines.push(Line::styled(timer.format_remaining(), big));
            if let Some(next) = sequencer
                .session()
                .exercises
                .get(sequencer.current_index() + 1)
            {
                lines.push(Line::from(""));
                lines.push(Line::from(format!("Up next: {}", next.name)));
            }
        }
        Phase::Done { .. } | Phase::Finished => {
            lines.push(Line::styled("Workout complete!", big.fg(Color::Green)));
        }
        Phase::Aborted => {}
    }

    if let (Some(exercise), Phase::Ready { .. } | Phase::Active { .. } | Phase::AwaitingCompletion) =
        (exercise, sequencer.phase())
    {
        if !exercise.description.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                exercise.description.clone(),
                Style::default().fg(Color::Gray),
            ));
        }
        for (i, step) in exercise.instructions.iter().enumerate() {
            lines.push(Line::styled(
                format!("{}. {step}", i + 1),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, chunks[1]);
}

/// Render the summary.
fn render_summary(frame: &mut Frame<'_>, summary: &WorkoutSummary, area: Rect) {
    let mut lines = vec![
        Line::from(format!(
            "Exercises: {}/{}",
            summary.completed_exercises, summary.total_exercises
        )),
        Line::from(format!("Completion: {:.0}%", summary.completion_rate)),
        Line::from(format!("Duration: {} min", summary.duration_minutes)),
        Line::from(""),
    ];

    for row in &summary.exercises {
        let (icon, color) = if row.completed {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(color)),
            Span::raw(row.name.clone()),
            Span::styled(
                format!("  {}", row.detail),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        summary.message.clone(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    ));

    let body = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let default_help = match (&app.screen, app.has_setup()) {
        (Screen::Setup(_), _) => "↑/↓:field | ←/→:change | Enter:start | q:quit",
        (Screen::Workout(_), true) => "space:pause | Enter:done | s:skip | n:skip rest | q:back",
        (Screen::Workout(_), false) => "space:pause | Enter:done | s:skip | n:skip rest | q:quit",
        (Screen::Summary(_), true) => "Enter:new workout | q:quit",
        (Screen::Summary(_), false) => "Enter/q:close",
    };
    let status_text = app.status.as_deref().unwrap_or(default_help);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::SetupChoice;
    use crate::workout::{Catalog, Difficulty, Focus, Language, RestRange};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_setup_screen() {
        let catalog = Catalog::builtin(Language::En).unwrap();
        let choice = SetupChoice {
            focus: Focus::Upper,
            difficulty: Difficulty::Beginner,
            minutes: 10,
        };
        let app = App::setup(catalog, choice, RestRange::default());

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Upper Body"));
        assert!(text.contains("10 min"));
        assert!(text.contains("Enter:start"));
    }

    #[test]
    fn test_render_workout_countdown() {
        let catalog = Catalog::builtin(Language::En).unwrap();
        let choice = SetupChoice {
            focus: Focus::Full,
            difficulty: Difficulty::Beginner,
            minutes: 5,
        };
        let mut app = App::setup(catalog, choice, RestRange::default());
        app.apply(crate::tui::app::Action::Confirm);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Get ready"));
        assert!(text.contains("Exercise 1/3"));
        assert!(text.contains("q:back"));
    }
}
