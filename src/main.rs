//! Hurdle Rush entry point
//!
//! Terminal frontend: owns every crossterm object, translates key events
//! into simulation calls, drives one tick per frame, and projects the
//! plain simulation state into character cells. The simulation never
//! touches the terminal.

use std::io::{self, Write, stdout};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{self, Color},
    terminal::{self, ClearType},
};

use hurdle_rush::HighScores;
use hurdle_rush::consts::*;
use hurdle_rush::sim::{GamePhase, GameState, HurdleKind, advance};

/// Character-cell view the world is projected onto
const VIEW_W: u16 = 80;
const VIEW_H: u16 = 24;

/// Frame duration (~60 Hz, the cadence the per-tick constants are tuned for)
const FRAME: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("Hurdle Rush starting...");

    let mut stdout = stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        terminal::Clear(ClearType::All),
        cursor::Hide
    )?;

    let result = run(&mut stdout);

    // Restore the terminal even when the loop errored out
    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    log::info!("Hurdle Rush exiting");

    result
}

fn run(stdout: &mut impl Write) -> io::Result<()> {
    let mut state = GameState::new();
    let mut scores = HighScores::new();
    let mut run_recorded = false;

    loop {
        let frame_start = Instant::now();

        // --- INPUT ---
        // Drain everything queued since the last frame; sim calls land
        // between ticks, never during one
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Enter => state.start(),
                    KeyCode::Char(' ') => state.jump(),
                    KeyCode::Char('r') | KeyCode::Char('R') => state.restart(),
                    _ => {}
                }
            }
        }

        // --- UPDATE ---
        advance(&mut state);

        // Record each finished run once
        match state.phase {
            GamePhase::GameOver if !run_recorded => {
                match scores.add_score(state.score, state.time_ticks) {
                    Some(rank) => log::info!("run ended: score {} (rank {})", state.score, rank),
                    None => log::info!("run ended: score {}", state.score),
                }
                run_recorded = true;
            }
            GamePhase::GameOver => {}
            _ => run_recorded = false,
        }

        // --- DRAW ---
        draw(stdout, &state, &scores)?;

        if let Some(remaining) = FRAME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Project the simulation state onto the cell grid and flush one frame
fn draw(stdout: &mut impl Write, state: &GameState, scores: &HighScores) -> io::Result<()> {
    // World units per cell
    let cell_w = ARENA_WIDTH / VIEW_W as f32;
    let cell_h = ARENA_HEIGHT / VIEW_H as f32;
    let floor_row = (FLOOR_Y / cell_h) as u16;

    queue!(stdout, terminal::Clear(ClearType::All))?;

    // Floor line
    queue!(
        stdout,
        cursor::MoveTo(0, floor_row),
        style::SetForegroundColor(Color::DarkYellow),
        style::Print("─".repeat(VIEW_W as usize))
    )?;

    // Hurdles: columns rising from the floor, colored by kind
    for hurdle in &state.hurdles {
        let color = match hurdle.kind {
            HurdleKind::Low => Color::Red,
            HurdleKind::Tall => Color::Green,
        };
        queue!(stdout, style::SetForegroundColor(color))?;

        let col_start = (hurdle.pos.x / cell_w).floor() as i32;
        let col_end = ((hurdle.pos.x + HURDLE_WIDTH) / cell_w).ceil() as i32;
        let top_row = (hurdle.pos.y / cell_h) as u16;
        for col in col_start..col_end {
            if col < 0 || col >= VIEW_W as i32 {
                continue;
            }
            for row in top_row..floor_row {
                queue!(stdout, cursor::MoveTo(col as u16, row), style::Print("█"))?;
            }
        }
    }

    // Player block
    queue!(stdout, style::SetForegroundColor(Color::Blue))?;
    let col_start = (state.player.pos.x / cell_w) as u16;
    let col_end = (((state.player.pos.x + PLAYER_SIZE) / cell_w).ceil() as u16).min(VIEW_W);
    let row_start = (state.player.pos.y / cell_h) as u16;
    let row_end = (((state.player.pos.y + PLAYER_SIZE) / cell_h).ceil() as u16).min(VIEW_H);
    for col in col_start..col_end {
        for row in row_start..row_end {
            queue!(stdout, cursor::MoveTo(col, row), style::Print("█"))?;
        }
    }

    // HUD: status on the left, session best on the right
    queue!(
        stdout,
        style::SetForegroundColor(Color::White),
        cursor::MoveTo(0, 0),
        style::Print(state.status_text())
    )?;
    if let Some(best) = scores.top_score() {
        let label = format!("Best: {}", best);
        queue!(
            stdout,
            cursor::MoveTo(VIEW_W.saturating_sub(label.len() as u16), 0),
            style::Print(label)
        )?;
    }

    // Centered prompt while waiting for input
    match state.phase {
        GamePhase::Idle => center_text(
            stdout,
            VIEW_H / 2,
            "HURDLE RUSH - Enter to start, Space to jump, Q to quit",
        )?,
        GamePhase::GameOver => center_text(stdout, VIEW_H / 2, &state.status_text())?,
        GamePhase::Running => {}
    }

    queue!(stdout, style::ResetColor)?;
    stdout.flush()
}

fn center_text(stdout: &mut impl Write, row: u16, text: &str) -> io::Result<()> {
    let col = (VIEW_W as usize).saturating_sub(text.len()) as u16 / 2;
    queue!(stdout, cursor::MoveTo(col, row), style::Print(text))
}
