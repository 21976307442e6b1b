//! ASCII rendering of a level.

use ai_core::{PlayerTarget, Position};
use ai_runtime::{Level, PlayerState};

/// Draws terrain with active monsters as their species letter and the player
/// as `@`.
pub fn render(level: &Level, player: &PlayerState) -> String {
    let mut rows: Vec<Vec<char>> = level
        .terrain()
        .rows()
        .into_iter()
        .map(|row| row.chars().collect())
        .collect();

    let mut put = |position: Position, glyph: char| {
        if let Some(cell) = rows
            .get_mut(position.y as usize)
            .and_then(|row| row.get_mut(position.x as usize))
        {
            *cell = glyph;
        }
    };

    for monster in level.monsters().iter().filter(|m| m.is_active) {
        put(monster.position, monster.species().symbol);
    }
    put(player.position(), '@');

    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
