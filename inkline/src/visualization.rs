use crate::{Color, Snapshot, BOARD_SIZE};

/// Renders a snapshot as a monospace grid with coordinate labels.
///
/// Stones are drawn as `●` (black) and `○` (white), stoneless painted
/// territory as `▓` (black) and `░` (white), empty cells as `·`.
pub fn visualize_board(snapshot: &Snapshot) -> String {
    let mut grid = [['·'; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for report in &snapshot.cells {
        if !report.coord.in_bounds() {
            continue;
        }
        let glyph = match (report.occupant, report.paint) {
            (Some(Color::Black), _) => '●',
            (Some(Color::White), _) => '○',
            (None, Some(Color::Black)) => '▓',
            (None, Some(Color::White)) => '░',
            (None, None) => '·',
        };
        grid[report.coord.row as usize][report.coord.col as usize] = glyph;
    }

    let mut result = String::from("    ");
    for col in 0..BOARD_SIZE {
        result.push((b'A' + col) as char);
        result.push(' ');
    }
    result.push('\n');
    for (row, cols) in grid.iter().enumerate() {
        result += &format!("{:>3} ", row + 1);
        for &glyph in cols {
            result.push(glyph);
            result.push(' ');
        }
        result.push('\n');
    }
    result
}
