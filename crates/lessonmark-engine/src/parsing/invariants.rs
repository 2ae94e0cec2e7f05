use crate::parsing::blocks::Block;
use crate::parsing::lines::lines_of;

/// Panics unless `blocks` is a valid segmentation of `text`: spans are
/// non-empty, in bounds, in order and disjoint, and every non-blank line
/// belongs to exactly one block.
pub fn check(text: &str, blocks: &[Block]) {
    let lines = lines_of(text);
    let n = lines.len();

    let mut prev_end = 0;
    for b in blocks {
        assert!(
            !b.lines.is_empty() && b.lines.end <= n,
            "block span out of bounds: {:?} (line count: {})",
            b.lines,
            n
        );
        assert!(
            b.lines.start >= prev_end,
            "block span overlaps or is out of order: {:?} starts before line {}",
            b.lines,
            prev_end
        );
        prev_end = b.lines.end;
    }

    for line in lines.iter().filter(|l| !l.is_blank()) {
        assert!(
            blocks.iter().any(|b| b.lines.contains(line.index)),
            "line {} is not covered by any block: {:?}",
            line.index,
            line.raw
        );
    }
}
