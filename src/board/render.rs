use super::{Board, Location};

/// Renders a board as a box-drawn grid with file letters and rank numbers,
/// top rank first. Pieces are shown with unicode chess glyphs.
pub fn render_unicode(board: &Board) -> String {
    let size = board.size as usize;
    let mut out = String::new();

    let file_labels = |out: &mut String| {
        out.push_str("   ");
        for x in 0..size {
            out.push_str(&format!("  {} ", (b'a' + x as u8) as char));
        }
        out.push('\n');
    };
    let separator = |out: &mut String, left: char, mid: char, right: char| {
        out.push_str("   ");
        out.push(left);
        for x in 0..size {
            out.push_str("───");
            out.push(if x + 1 == size { right } else { mid });
        }
        out.push('\n');
    };

    file_labels(&mut out);
    separator(&mut out, '┌', '┬', '┐');

    for y in (1..=board.size).rev() {
        out.push_str(&format!("{:>2} │", y));
        for x in 1..=board.size {
            let glyph = match board.piece_at(Location::new(x, y)) {
                Some(piece) => piece.glyph(),
                None => ' ',
            };
            out.push_str(&format!(" {} │", glyph));
        }
        out.push_str(&format!(" {}\n", y));

        if y > 1 {
            separator(&mut out, '├', '┼', '┤');
        }
    }

    separator(&mut out, '└', '┴', '┘');
    file_labels(&mut out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::plain::from_plain;

    #[test]
    fn render_places_glyphs_on_their_squares() {
        let board = from_plain("3\nKa1\nKc3, Bb3\n").unwrap();
        let rendered = render_unicode(&board);

        let lines: Vec<&str> = rendered.lines().collect();
        // labels, frame, 3 ranks with 2 separators, frame, labels
        assert_eq!(lines.len(), 9);
        assert!(lines[0].contains("a   b   c"));
        // top rank holds the black pieces, bottom rank the white king
        assert!(lines[2].starts_with(" 3 │"));
        assert!(lines[2].contains('\u{265A}'));
        assert!(lines[2].contains('\u{265D}'));
        assert!(lines[6].starts_with(" 1 │"));
        assert!(lines[6].contains('\u{2654}'));
    }

    #[test]
    fn render_scales_with_board_size() {
        let board = from_plain("12\nKa1\nKl12\n").unwrap();
        let rendered = render_unicode(&board);
        assert!(rendered.lines().next().unwrap().contains('l'));
        assert!(rendered.contains("12 │"));
    }
}
