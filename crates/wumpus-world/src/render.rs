//! Plain-text board rendering for logs.
//!
//! Row 0 (north) is printed first. Each tile is one glyph separated by a
//! space:
//!
//! | Glyph | Meaning |
//! |-------|---------|
//! | `^ > v <` | The player, by facing |
//! | `X` | The player, dead |
//! | `W` / `w` | Live / dead wumpus (revealed boards only) |
//! | `P` | Pit (revealed boards only) |
//! | `G` | Gold still in the cave (revealed boards only) |
//! | `.` | Nothing shown |

use std::fmt::Write as _;

use wumpus_types::{Direction, Position};

use crate::grid_world::{CellContents, GridWorld};
use crate::interface::{EpisodeStatus, WorldInterface};

/// Render `world` as text, hiding its contents unless `reveal` is set.
pub fn render_board(world: &GridWorld, reveal: bool) -> String {
    let grid = world.grid();
    let mut out = String::new();
    for y in 0..grid.height {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..grid.width {
            if x > 0 {
                out.push(' ');
            }
            let position = Position::new(x, y);
            out.push(glyph(world, position, reveal));
        }
    }
    let _ = write!(out, "\nscore {} | {}", world.score(), world.status());
    out
}

fn glyph(world: &GridWorld, position: Position, reveal: bool) -> char {
    if position == world.position() {
        return player_glyph(world);
    }
    if !reveal {
        return '.';
    }
    let cell = world.cell(position).unwrap_or_default();
    cell_glyph(cell)
}

fn player_glyph(world: &GridWorld) -> char {
    if world.status() == EpisodeStatus::Dead {
        return 'X';
    }
    match world.facing() {
        Direction::North => '^',
        Direction::East => '>',
        Direction::South => 'v',
        Direction::West => '<',
    }
}

const fn cell_glyph(cell: CellContents) -> char {
    if cell.wumpus_alive {
        'W'
    } else if cell.wumpus {
        'w'
    } else if cell.pit {
        'P'
    } else if cell.gold {
        'G'
    } else {
        '.'
    }
}
