use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect, Size},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::error;

use crate::core::{BoundsOriginRoot, Cell, Direction, GameError, UserAction, World};
use crate::models::{GameRenderState, PlayerColor};

const TITLE: &str = "Maze Chase";
const INSTRUCTIONS_HEIGHT: u16 = 3;
const INSTRUCTIONS: &str = "h/j/k/l move | H help | S save | L load | R regenerate | Esc quit";

/// Reads an ASCII level: `#` wall, ` ` floor, `@` player, `&` enemy.
/// Short rows are padded with floor.
pub fn parse_level(s: &str) -> Result<World, GameError> {
    let lines: Vec<&str> = s.lines().filter(|line| !line.is_empty()).collect();
    let max_width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(lines.len());
    for line in &lines {
        let mut row: Vec<Cell> = line
            .chars()
            .map(|ch| match ch {
                '#' => Cell::Wall,
                '@' => Cell::Player,
                '&' => Cell::Enemy,
                _ => Cell::Floor,
            })
            .collect();
        row.resize(max_width, Cell::Floor);
        rows.push(row);
    }

    let bounds = BoundsOriginRoot::new(max_width as i32, rows.len() as i32);
    World::from_cells(bounds, &rows)
}

pub fn cell_face(cell: Cell) -> char {
    match cell {
        Cell::Floor => ' ',
        Cell::Wall => '#',
        Cell::Player => '@',
        Cell::Enemy => '&',
        Cell::OutOfGrid => '?',
    }
}

pub fn render_world_to_string(world: &World) -> String {
    let mut result = String::new();
    for row in world.cells() {
        result.extend(row.into_iter().map(cell_face));
        result.push('\n');
    }
    result
}

/// Raw mode and the alternate screen, released on drop no matter how the game ends.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Takes over the terminal and fails if it cannot show all of `grid`.
    pub fn setup(grid: BoundsOriginRoot) -> Result<TerminalGuard> {
        crossterm::terminal::enable_raw_mode().context("failed to enable raw mode")?;
        crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)
            .context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend).context("failed to build terminal backend")?;
        terminal.clear().ok();
        terminal.hide_cursor().ok();
        let guard = TerminalGuard { terminal };

        let available = guard.terminal.size().context("failed to query terminal size")?;
        let needed = required_size(grid);
        if !fits(available, needed) {
            bail!(
                "terminal is {}x{} but the {} grid needs at least {}x{}",
                available.width,
                available.height,
                grid,
                needed.width,
                needed.height
            );
        }
        Ok(guard)
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.terminal.show_cursor().ok();
        if let Err(err) = crossterm::terminal::disable_raw_mode() {
            error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen) {
            error!(?err, "failed to leave alternate screen");
        }
    }
}

/// Terminal cells needed to show `grid` inside its border plus the instructions bar.
pub fn required_size(grid: BoundsOriginRoot) -> Size {
    let clamp = |n: i32| u16::try_from(n.max(0)).unwrap_or(u16::MAX);
    Size::new(
        clamp(grid.columns).saturating_add(2),
        clamp(grid.rows).saturating_add(2 + INSTRUCTIONS_HEIGHT),
    )
}

pub fn fits(available: Size, needed: Size) -> bool {
    available.width >= needed.width && available.height >= needed.height
}

pub fn render_game<B: Backend>(terminal: &mut Terminal<B>, state: &GameRenderState) -> Result<()> {
    terminal.draw(|f| draw_frame(f, state))?;
    Ok(())
}

fn draw_frame(f: &mut Frame, state: &GameRenderState) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(INSTRUCTIONS_HEIGHT)])
        .split(f.area());

    let grid_block = Block::default().borders(Borders::ALL).title(TITLE);
    let grid_area = grid_block.inner(chunks[0]);
    let grid_paragraph = Paragraph::new(grid_text(state)).block(grid_block);
    f.render_widget(grid_paragraph, chunks[0]);

    let instruction_paragraph = Paragraph::new(INSTRUCTIONS)
        .block(Block::default().borders(Borders::ALL).title("Instructions"))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(instruction_paragraph, chunks[1]);

    if let Some(on_start) = state.help {
        let text = help_text(on_start);
        let area = overlay_rect(grid_area, &text);
        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(text).style(Style::default().bg(Color::Black)), area);
    } else if let Some(notice) = state.notice {
        let text = Text::from(Line::from(Span::styled(
            format!("Info: {}", notice),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        let area = overlay_rect(grid_area, &text);
        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(text).style(Style::default().bg(Color::Black)), area);
    }
}

fn grid_text(state: &GameRenderState) -> Text<'static> {
    let player_style = Style::default()
        .fg(match state.player_color {
            PlayerColor::Magenta => Color::Magenta,
            PlayerColor::Yellow => Color::Yellow,
        })
        .add_modifier(Modifier::BOLD);
    let enemy_style = Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = state
        .world
        .cells()
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|cell| {
                    let face = cell_face(cell).to_string();
                    match cell {
                        Cell::Player => Span::styled(face, player_style),
                        Cell::Enemy => Span::styled(face, enemy_style),
                        _ => Span::raw(face),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    Text::from(lines)
}

fn help_text(on_start: bool) -> Text<'static> {
    let title = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(Color::Green);

    let mut lines = vec![
        Line::styled("Help", title),
        Line::styled("   About:", heading),
        Line::styled("        You are `@`. Stay away from the `&`s.", body),
        Line::styled("   Keys:", heading),
        Line::styled("        h,j,k,l   : move left, down, up, right", body),
        Line::styled("        <shift+h> : show/hide this help", body),
        Line::styled("        <shift+r> : regenerate the map", body),
        Line::styled("        <shift+s> : save the current map", body),
        Line::styled("        <shift+l> : load the saved map (if present)", body),
        Line::styled("        <esc>     : quit", body),
    ];
    if on_start {
        lines.push(Line::styled("   Hide this help (<shift+h>) to start the game.", heading));
    }
    Text::from(lines)
}

/// Box for an overlay anchored near the top-left of `area`, clipped to it.
fn overlay_rect(area: Rect, text: &Text) -> Rect {
    let wanted = Rect::new(
        area.x.saturating_add(2),
        area.y.saturating_add(1),
        text.width() as u16,
        text.height() as u16,
    );
    wanted.intersection(area)
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Timeout,
    Unknown,
}

/// Waits up to `timeout` for a key and translates it.
pub fn handle_input(timeout: Duration) -> Result<ConsoleInput> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            return Ok(input_from_key(key));
        }
        return Ok(ConsoleInput::Unknown);
    }
    Ok(ConsoleInput::Timeout)
}

pub fn input_from_key(key: KeyEvent) -> ConsoleInput {
    if key.kind != KeyEventKind::Press {
        return ConsoleInput::Unknown;
    }
    let action = match key.code {
        KeyCode::Esc => UserAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => UserAction::Quit,
        _ if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            return ConsoleInput::Unknown;
        }
        KeyCode::Char('h') => UserAction::Move(Direction::Left),
        KeyCode::Char('j') => UserAction::Move(Direction::Down),
        KeyCode::Char('k') => UserAction::Move(Direction::Up),
        KeyCode::Char('l') => UserAction::Move(Direction::Right),
        KeyCode::Char('H') => UserAction::ToggleHelp,
        KeyCode::Char('S') => UserAction::Save,
        KeyCode::Char('R') => UserAction::Regenerate,
        KeyCode::Char('L') => UserAction::Load,
        _ => return ConsoleInput::Unknown,
    };
    ConsoleInput::UserAction(action)
}
