//! ASCII rendering of carved mazes.

use std::collections::HashSet;
use std::io::{self, Write};

use warren_maze::Room;

use super::commands::CarveSummary;

/// Writes `summary` as an ASCII maze.
///
/// Standing walls are drawn as `---` and `|`, removed walls as gaps, and
/// rooms on the solved route as `*`. The outer border is always closed.
///
/// # Errors
/// Propagates any error raised by `writer`.
pub fn render_summary(summary: &CarveSummary, writer: &mut impl Write) -> io::Result<()> {
    let rows = summary.maze.rows();
    let cols = summary.maze.cols();

    let mut open: HashSet<(Room, Room)> = HashSet::new();
    for wall in &summary.removed {
        let (first, second) = wall.rooms();
        open.insert((first, second));
        open.insert((second, first));
    }
    let on_route: HashSet<Room> = summary.route.iter().flatten().copied().collect();

    for row in 0..rows {
        for col in 0..cols {
            let closed =
                row == 0 || !open.contains(&(Room::new(row - 1, col), Room::new(row, col)));
            write!(writer, "+{}", if closed { "---" } else { "   " })?;
        }
        writeln!(writer, "+")?;

        for col in 0..cols {
            let closed =
                col == 0 || !open.contains(&(Room::new(row, col - 1), Room::new(row, col)));
            let cell = if on_route.contains(&Room::new(row, col)) {
                " * "
            } else {
                "   "
            };
            write!(writer, "{}{cell}", if closed { "|" } else { " " })?;
        }
        writeln!(writer, "|")?;
    }

    for _ in 0..cols {
        write!(writer, "+---")?;
    }
    writeln!(writer, "+")
}
