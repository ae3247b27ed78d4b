//! Venus Transit - Terminal User Interface
//!
//! A TUI animation of the Earth/Venus orbital model using ratatui.
//! App logic lives in `venus_transit::tui::app`; this binary owns the
//! driving loop: draw, wait for input up to one tick interval, advance.

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::io::Result<()> {
    use venus_transit::tui::app::TransitApp;
    tui::run(TransitApp::new())
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{
            canvas::{Canvas, Circle, Points},
            Block, Borders, Paragraph,
        },
        Frame, Terminal,
    };
    use std::io;
    use std::time::{Duration, Instant};
    use venus_transit::render::RenderCommand;
    use venus_transit::tui::app::TransitApp;

    /// World-space view half-width (AU).
    const VIEW_BOUND_AU: f64 = 1.5;

    /// Run the TUI application.
    pub fn run(mut app: TransitApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // The cooperative wait between cycles: event polling with a
        // timeout doubles as the tick interval.
        let tick_rate = Duration::from_millis(app.tick_interval_ms);

        loop {
            let start = Instant::now();
            terminal.draw(|f| ui(f, &app))?;

            let timeout = tick_rate.saturating_sub(start.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if app.should_quit {
                break;
            }

            app.update();
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn ui(f: &mut Frame, app: &TransitApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
                Constraint::Length(4),
            ])
            .split(f.area());

        render_title(f, chunks[0], app);
        render_orbit_canvas(f, chunks[1], app);
        render_status(f, chunks[2], app);
        render_transit_panel(f, chunks[3], app);
    }

    fn render_title(f: &mut Frame, area: Rect, app: &TransitApp) {
        let frame = app.current_frame();
        let title = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                " VENUS TRANSIT ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                if app.controller.is_playing() {
                    "[PLAYING]"
                } else {
                    "[PAUSED]"
                },
                Style::default().fg(if app.controller.is_playing() {
                    Color::Green
                } else {
                    Color::Yellow
                }),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("Time: {:.0} days", frame.time_days),
                Style::default().fg(Color::White),
            ),
        ])])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls: [Space] Play/Pause  [R] Reset  [O] Orbits  [+/-] Speed  [Q] Quit"),
        );
        f.render_widget(title, area);
    }

    fn to_tui_color(c: venus_transit::render::Color) -> Color {
        Color::Rgb(c.r, c.g, c.b)
    }

    fn render_orbit_canvas(f: &mut Frame, area: Rect, app: &TransitApp) {
        let commands = app.scene();

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Orbit View"))
            .x_bounds([-VIEW_BOUND_AU, VIEW_BOUND_AU])
            .y_bounds([-VIEW_BOUND_AU, VIEW_BOUND_AU])
            .paint(|ctx| {
                for command in &commands {
                    match command {
                        RenderCommand::Clear { .. } => {}
                        RenderCommand::DrawOrbitPath { points, color } => {
                            ctx.draw(&Points {
                                coords: points,
                                color: to_tui_color(*color),
                            });
                        }
                        RenderCommand::DrawCircle {
                            x,
                            y,
                            radius,
                            color,
                            ..
                        } => {
                            ctx.draw(&Circle {
                                x: *x,
                                y: *y,
                                radius: *radius,
                                color: to_tui_color(*color),
                            });
                        }
                        RenderCommand::HighlightBody {
                            x,
                            y,
                            radius,
                            color,
                        } => {
                            ctx.draw(&Circle {
                                x: *x,
                                y: *y,
                                radius: *radius,
                                color: to_tui_color(*color),
                            });
                        }
                        RenderCommand::DrawText { x, y, text, color } => {
                            ctx.print(
                                *x,
                                *y,
                                Span::styled(
                                    text.clone(),
                                    Style::default().fg(to_tui_color(*color)),
                                ),
                            );
                        }
                    }
                }
            });

        f.render_widget(canvas, area);
    }

    fn render_status(f: &mut Frame, area: Rect, app: &TransitApp) {
        let frame = app.current_frame();
        let status = Paragraph::new(vec![Line::from(vec![
            Span::styled("Earth: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("({:.2}, {:.2})", frame.earth.x, frame.earth.y),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" | "),
            Span::styled("Venus: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("({:.2}, {:.2})", frame.venus.x, frame.venus.y),
                Style::default().fg(Color::LightYellow),
            ),
            Span::raw(" | "),
            Span::styled("Sep: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.3} AU", frame.separation_au()),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled("Speed: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("x{:.2}", app.speed_multiplier),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" | "),
            Span::styled("Frame: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", app.frame_count),
                Style::default().fg(Color::White),
            ),
        ])])
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(status, area);
    }

    fn render_transit_panel(f: &mut Frame, area: Rect, app: &TransitApp) {
        let frame = app.current_frame();
        let lines = if frame.transiting {
            vec![
                Line::from(Span::styled(
                    "TRANSIT IN PROGRESS",
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Venus within the proximity threshold of Earth",
                    Style::default().fg(Color::Gray),
                )),
            ]
        } else {
            vec![Line::from(Span::styled(
                "No active transit",
                Style::default().fg(Color::Green),
            ))]
        };

        let panel =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Transit"));
        f.render_widget(panel, area);
    }

}
