use crate::core::{Cell, GameState, Occupant, SharedGameState};
use crate::puzzle::{Puzzle, PuzzleError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Parse a level in the usual single-grid text form.
///
/// Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target,
/// '+' player on target, ' ' floor. Empty lines are skipped and short rows are padded
/// with floor.
pub fn parse_level(s: &str) -> Result<(GameState, SharedGameState), PuzzleError> {
    level_to_puzzle(s).build()
}

pub fn level_to_puzzle(s: &str) -> Puzzle {
    let rows: Vec<&str> = s
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .collect();
    let max_width = rows.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut map = Vec::with_capacity(rows.len());
    let mut items = Vec::with_capacity(rows.len());
    for line in &rows {
        let mut map_row = String::with_capacity(max_width);
        let mut item_row = String::with_capacity(max_width);
        for ch in line.chars() {
            let (map_ch, item_ch) = match ch {
                '#' => ('#', ' '),
                '.' => ('.', ' '),
                '$' => (' ', '$'),
                '*' => ('.', '$'),
                '@' => (' ', '@'),
                '+' => ('.', '@'),
                _ => (' ', ' '),
            };
            map_row.push(map_ch);
            item_row.push(item_ch);
        }
        // Pad row to max width with Floor
        let padding = max_width - line.chars().count();
        map_row.extend(std::iter::repeat_n(' ', padding));
        item_row.extend(std::iter::repeat_n(' ', padding));
        map.push(map_row);
        items.push(item_row);
    }

    Puzzle {
        width: max_width,
        height: rows.len(),
        map,
        items,
    }
}

pub fn render_game_to_string(shared: &SharedGameState, game: &GameState) -> String {
    let mut result = String::new();
    for (pos, c) in shared.grid.iter() {
        let occupant = game.occupants.get(&pos).copied().unwrap_or_default();
        let ch = match (c, occupant) {
            (Cell::Wall, _) => '#',
            (Cell::Floor, Occupant::Player) => '@',
            (Cell::Floor, Occupant::Crate) => '$',
            (Cell::Floor, Occupant::Empty) => ' ',
            (Cell::Target, Occupant::Player) => '+',
            (Cell::Target, Occupant::Crate) => '*',
            (Cell::Target, Occupant::Empty) => '.',
        };
        result.push(ch);
        if pos.j == shared.width() - 1 {
            result.push('\n');
        }
    }
    result
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub enum ConsoleInput {
    Quit,
    Timeout,
    Unknown,
}

/// Poll the keyboard without blocking.
pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::ZERO)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
