//! Positional row reshaping.

use std::ops::Range;

/// Cut `block` out of `row` and reinsert it at `insert_at` (an index into
/// the row after the cut), preserving the relative order of the moved block
/// and of everything around it.
///
/// Rows too short to contain the whole block are returned unmodified. That
/// degraded passthrough is deliberate: a malformed form row skips the
/// reorder instead of failing the run, and callers must tolerate it.
pub fn move_block(mut row: Vec<String>, block: Range<usize>, insert_at: usize) -> Vec<String> {
    if row.len() < block.end {
        return row;
    }
    let cut: Vec<String> = row.drain(block).collect();
    let insert_at = insert_at.min(row.len());
    row.splice(insert_at..insert_at, cut);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn moves_a_block_earlier_preserving_order() {
        let input = row(&["a", "b", "c", "d", "e", "f"]);
        let moved = move_block(input, 4..6, 1);
        assert_eq!(moved, row(&["a", "e", "f", "b", "c", "d"]));
    }

    #[test]
    fn moves_a_block_later_preserving_order() {
        let input = row(&["a", "b", "c", "d", "e", "f"]);
        let moved = move_block(input, 0..2, 3);
        assert_eq!(moved, row(&["c", "d", "e", "a", "b", "f"]));
    }

    #[test]
    fn short_rows_pass_through_unmodified() {
        let input = row(&["a", "b", "c"]);
        assert_eq!(move_block(input.clone(), 16..19, 5), input);
    }

    #[test]
    fn inverse_move_restores_the_original() {
        let input: Vec<String> = (0..21).map(|n| n.to_string()).collect();
        let moved = move_block(input.clone(), 16..19, 5);
        assert_eq!(moved[5], "16");
        assert_eq!(moved[7], "18");
        let restored = move_block(moved, 5..8, 16);
        assert_eq!(restored, input);
    }
}
