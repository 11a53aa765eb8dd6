// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Terminal UI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Interactive chart of the four field curves with a control panel.
//!
//! One key press is one controller event followed by one redraw.

use crate::controller::{ControlEvent, ExplorationController};
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use fusion_scaling::ScalingLaw;
use fusion_types::config::PlotBounds;
use fusion_types::domain::Parameter;
use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};
use std::io::{self, Write};

/// Key-level outcome of one input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    Control(ControlEvent),
}

/// `selected` is the control that Home/End jump to its range limits.
pub fn map_key(code: KeyCode, selected: Parameter) -> Option<Action> {
    let event = match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Down | KeyCode::Char('j') => ControlEvent::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => ControlEvent::SelectPrev,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => ControlEvent::Increase,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => ControlEvent::Decrease,
        KeyCode::Char(']') => ControlEvent::CursorRight,
        KeyCode::Char('[') => ControlEvent::CursorLeft,
        KeyCode::Char('r') => ControlEvent::Reset,
        KeyCode::Home => ControlEvent::Set(selected, selected.domain().min),
        KeyCode::End => ControlEvent::Set(selected, selected.domain().max),
        _ => return None,
    };
    Some(Action::Control(event))
}

fn law_color(law: ScalingLaw) -> Color {
    match law {
        ScalingLaw::FusionPower => Color::Rgb(255, 110, 90),
        ScalingLaw::PowerBalance => Color::Rgb(255, 200, 80),
        ScalingLaw::CurrentDrive => Color::Rgb(100, 180, 255),
        ScalingLaw::DivertorExhaust => Color::Rgb(80, 220, 120),
    }
}

/// Raw mode and the alternate screen, undone on drop so an error or a
/// panic inside the loop still hands back a usable terminal.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());
    }
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

/// Take over the terminal and run until the user quits.
pub fn run(controller: &mut ExplorationController, plot: PlotBounds) -> io::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    event_loop(&mut terminal, controller, &plot)
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut ExplorationController,
    plot: &PlotBounds,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, controller, plot))?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match map_key(key.code, controller.selected()) {
            Some(Action::Quit) => return Ok(()),
            Some(Action::Control(event)) => controller.handle(event),
            None => {}
        }
    }
}

pub fn draw(frame: &mut Frame, controller: &ExplorationController, plot: &PlotBounds) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(100, 180, 255)))
        .title(" Tokamak field/radius scaling ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(120, 200, 255))
                .add_modifier(Modifier::BOLD),
        );
    let area = frame.area();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status
            Constraint::Min(10),   // Controls + chart
            Constraint::Length(2), // Cursor read-out
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(rows[1]);

    frame.render_widget(Paragraph::new(status_line(controller)), rows[0]);
    frame.render_widget(controls_panel(controller), middle[0]);
    draw_chart(frame, middle[1], controller, plot);
    frame.render_widget(Paragraph::new(readout_lines(controller)), rows[2]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "↑/↓ select  ←/→ adjust  Home/End limits  [ ] move cursor  r reset  q quit",
            Style::default().fg(Color::Rgb(140, 140, 160)),
        ))),
        rows[3],
    );
}

fn status_line(controller: &ExplorationController) -> Line<'static> {
    if let Some(err) = controller.error() {
        return Line::from(Span::styled(
            format!("Rejected: {err}"),
            Style::default().fg(Color::Rgb(255, 60, 60)).add_modifier(Modifier::BOLD),
        ));
    }
    let reference = controller.reference();
    let (b_ref, r_ref) = reference.calibration().unwrap_or((f64::NAN, f64::NAN));
    Line::from(vec![
        Span::styled(
            format!("cycle {} ", controller.cycles()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(format!(
            "| reference B={b_ref:.1} T at R={r_ref:.1} m | A={:.1} fixed",
            reference.aspect_ratio
        )),
    ])
}

fn controls_panel(controller: &ExplorationController) -> Paragraph<'static> {
    let lines: Vec<Line> = Parameter::ALL
        .iter()
        .map(|&p| {
            let d = p.domain();
            let selected = p == controller.selected();
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Rgb(255, 200, 80))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:<7}", p.label()), style),
                Span::styled(format!("{:>8.2} {:<3}", controller.value(p), p.unit()), style),
                Span::styled(
                    format!("[{}, {}]", d.min, d.max),
                    Style::default().fg(Color::Rgb(140, 140, 160)),
                ),
            ])
        })
        .collect();
    Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Controls "))
}

fn draw_chart(
    frame: &mut Frame,
    area: Rect,
    controller: &ExplorationController,
    plot: &PlotBounds,
) {
    let radii = controller.radii();
    let x_bounds = [
        radii.first().copied().unwrap_or(0.0),
        radii.last().copied().unwrap_or(1.0),
    ];
    let y_bounds = [plot.field_min_t, plot.field_max_t];

    // Rejected cycles draw empty axes.
    let series: Vec<(ScalingLaw, Vec<(f64, f64)>)> = controller
        .curves()
        .map(|curves| {
            ScalingLaw::ALL
                .iter()
                .map(|&law| {
                    let points = curves
                        .radii
                        .iter()
                        .zip(curves.get(law).iter())
                        .map(|(&r, &b)| (r, b))
                        .collect();
                    (law, points)
                })
                .collect()
        })
        .unwrap_or_default();

    let cursor_r = radii.get(controller.cursor()).copied().unwrap_or(x_bounds[0]);
    let cursor = [(cursor_r, y_bounds[0]), (cursor_r, y_bounds[1])];

    let mut datasets: Vec<Dataset> = series
        .iter()
        .map(|(law, points)| {
            Dataset::default()
                .name(law.label())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(law_color(*law)))
                .data(points)
        })
        .collect();
    datasets.push(
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&cursor),
    );

    let x_mid = 0.5 * (x_bounds[0] + x_bounds[1]);
    let y_mid = 0.5 * (y_bounds[0] + y_bounds[1]);
    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(" Required B [T] vs R [m] "))
        .x_axis(
            Axis::default()
                .title("R [m]")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(vec![
                    Span::raw(format!("{:.0}", x_bounds[0])),
                    Span::raw(format!("{x_mid:.0}")),
                    Span::raw(format!("{:.0}", x_bounds[1])),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("B [T]")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(vec![
                    Span::raw(format!("{:.0}", y_bounds[0])),
                    Span::raw(format!("{y_mid:.1}")),
                    Span::raw(format!("{:.0}", y_bounds[1])),
                ]),
        );
    frame.render_widget(chart, area);
}

fn readout_lines(controller: &ExplorationController) -> Vec<Line<'static>> {
    let Some(curves) = controller.curves() else {
        return vec![Line::from("no curves for this input")];
    };
    let i = controller.cursor();
    let (Some(sample), Some((binding, b_bind))) = (curves.sample(i), curves.binding_field(i))
    else {
        return vec![Line::from("cursor outside sweep")];
    };

    let mut spans = vec![Span::styled(
        format!("R = {:.2} m  ", curves.radii[i]),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for law in ScalingLaw::ALL {
        spans.push(Span::styled(
            format!("{} {:.2} T  ", law.label(), sample[law.index()]),
            Style::default().fg(law_color(law)),
        ));
    }
    vec![
        Line::from(spans),
        Line::from(format!(
            "binding: {} ({}) needs {b_bind:.2} T",
            binding.label(),
            binding.equation()
        )),
    ]
}
