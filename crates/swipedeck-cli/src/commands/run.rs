use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Terminal,
};
use tracing::info;

use swipedeck_core::CarouselConfig;
use swipedeck_input::{Action, CarouselSession, EventHandler, InputEvent};

use crate::view::{track_width, CarouselView, PX_PER_CELL};

/// Vertical px represented by one terminal row
const PX_PER_ROW: f64 = 16.0;

/// A release this long after the last movement carries no velocity
const RELEASE_STALE: Duration = Duration::from_millis(80);

/// Mouse drag in progress, in terminal cells converted to px
struct MouseDrag {
    origin_column: u16,
    origin_row: u16,
    offset_x: f64,
    velocity_x: f64,
    last_at: Instant,
}

pub async fn run(config: CarouselConfig, items: usize) -> Result<()> {
    let event_handler = EventHandler::new(config.motion.frame_rate);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("swipedeck"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &event_handler, config, items);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    event_handler: &EventHandler,
    config: CarouselConfig,
    items: usize,
) -> Result<()> {
    let size = terminal.size()?;
    let mut session = CarouselSession::new(config, track_width(size.width), items);
    let mut drag: Option<MouseDrag> = None;
    let mut last_frame = Instant::now();

    info!(items, width = size.width, "Interactive carousel started");

    loop {
        let now = Instant::now();
        session.tick(now - last_frame);
        last_frame = now;

        terminal.draw(|frame| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(frame.area());

            frame.render_widget(CarouselView::new(session.controller()), rows[0]);
            frame.render_widget(Paragraph::new(status_line(&session)), rows[1]);
        })?;

        if let Some(event) = event_handler.next()? {
            match event {
                InputEvent::Key(key) => {
                    let (action, _) = session.key(key);
                    if action == Action::Quit {
                        break;
                    }
                }
                InputEvent::Mouse(mouse) => handle_mouse(&mut session, &mut drag, mouse),
                InputEvent::Resize(width, _) => session.resize(track_width(width)),
                InputEvent::Tick => {}
            }
        }
    }

    Ok(())
}

fn handle_mouse(session: &mut CarouselSession, drag: &mut Option<MouseDrag>, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            session.drag_start();
            *drag = Some(MouseDrag {
                origin_column: mouse.column,
                origin_row: mouse.row,
                offset_x: 0.0,
                velocity_x: 0.0,
                last_at: Instant::now(),
            });
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(state) = drag.as_mut() else {
                return;
            };
            let offset_x = (mouse.column as f64 - state.origin_column as f64) * PX_PER_CELL;
            let offset_y = (mouse.row as f64 - state.origin_row as f64) * PX_PER_ROW;

            let dt = state.last_at.elapsed().as_secs_f64();
            if dt > 0.0 {
                state.velocity_x = (offset_x - state.offset_x) / dt;
            }
            state.offset_x = offset_x;
            state.last_at = Instant::now();

            session.drag_sample(offset_x, offset_y, state.velocity_x);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(state) = drag.take() {
                let velocity = if state.last_at.elapsed() > RELEASE_STALE {
                    0.0
                } else {
                    state.velocity_x
                };
                session.drag_end(state.offset_x, velocity);
            }
        }
        _ => {}
    }
}

fn status_line(session: &CarouselSession) -> String {
    let controller = session.controller();
    let total = session.geometry().total_items;
    let motion = if session.is_dragging() {
        "dragging"
    } else if controller.is_transitioning() {
        "moving"
    } else {
        "at rest"
    };

    format!(
        " {}/{}  {:>9.1}px  {:<8}  h/l or arrows: step  Home/End  mouse: drag  q: quit",
        (controller.current_index() + 1).min(total.max(1)),
        total,
        controller.position(),
        motion
    )
}
