use crate::core::board::Board;
use crate::core::occupancy::Occupancy;

pub const EMPTY_GLYPH: char = '.';

/// Text grid of the board: a header of file numbers, then one line per rank
/// starting at rank 0, each prefixed with its number.
///
/// Pieces use [`Piece::glyph`](crate::chess::piece::Piece::glyph).
pub fn render_board(board: &Board, occ: &Occupancy) -> String {
    let width = board.width() as usize;
    let mut cells = vec![EMPTY_GLYPH; board.square_count()];
    for (at, piece) in occ.iter().filter(|&(at, _)| board.in_bounds(at)) {
        cells[at.y as usize * width + at.x as usize] = piece.glyph();
    }

    let mut lines: Vec<String> = Vec::with_capacity(board.height() as usize + 1);
    let header: Vec<String> = (0..board.width()).map(|x| x.to_string()).collect();
    lines.push(format!("  {}", header.join(" ")));

    for (y, rank) in cells.chunks(width).enumerate() {
        let glyphs: Vec<String> = rank.iter().map(char::to_string).collect();
        lines.push(format!("{y} {}", glyphs.join(" ")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::piece::{Piece, PieceKind};
    use crate::core::coord::Coord;

    #[test]
    fn renders_glyphs_by_colour() {
        let board = Board::new(3, 2).unwrap();
        let occ = Occupancy::new()
            .with_piece(Coord::new(0, 0), Piece::white(PieceKind::Knight))
            .with_piece(Coord::new(2, 1), Piece::black(PieceKind::Queen));

        assert_eq!(render_board(&board, &occ), "  0 1 2\n0 N . .\n1 . . q");

        // pieces off a smaller board are left out
        let tiny = Board::new(1, 1).unwrap();
        assert_eq!(render_board(&tiny, &occ), "  0\n0 N");
    }
}
