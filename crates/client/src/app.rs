//! Application loop: runtime events in, frames and key handling out.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::broadcast::error::RecvError;
use tokio::time;

use gridnav_core::{ObstacleField, Position, Robot};
use gridnav_runtime::{NavEvent, NavHandle};

use crate::config::ClientConfig;
use crate::ui;

const FRAME_INTERVAL_MS: u64 = 16;

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub struct App {
    handle: NavHandle,
    paused: bool,
}

impl App {
    /// Builds the world from `config` and spawns the controller worker.
    /// Must be called from within a tokio runtime.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut field = ObstacleField::new(config.width, config.height);
        field
            .scatter(config.obstacles, config.seed)
            .context("scattering obstacles")?;
        let robot = Robot::new(Position::ORIGIN);

        let handle = gridnav_runtime::spawn(field, robot, Duration::from_millis(config.tick_ms));
        Ok(Self {
            handle,
            paused: false,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut events = self.handle.subscribe();
        self.refresh(terminal).await?;

        loop {
            tokio::select! {
                result = events.recv() => {
                    match result {
                        Ok(NavEvent::Started { .. }) | Ok(NavEvent::Moved { .. }) => {
                            self.refresh(terminal).await?;
                        }
                        // Fell behind the broadcast backlog; the next
                        // snapshot repaints the current truth anyway.
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "event stream lagged");
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input().await? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Polls one pending key event. Returns true when the app should quit.
    async fn handle_input(&mut self) -> Result<bool> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(false);
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                KeyCode::Char(' ') => {
                    if self.paused {
                        self.handle.resume().await?;
                    } else {
                        self.handle.pause().await?;
                    }
                    self.paused = !self.paused;
                }
                _ => {}
            }
        }
        Ok(false)
    }

    async fn refresh(&self, terminal: &mut Tui) -> Result<()> {
        let snapshot = self.handle.snapshot().await?;
        terminal.draw(|frame| ui::render(frame, &snapshot))?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
