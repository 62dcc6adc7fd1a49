/// Visible index window over the entry list.
///
/// The window stays pinned to the top of the list until the selection moves
/// past index 2, then follows it with two rows of context above. Near the
/// end of the list the window shrinks instead of re-anchoring, which keeps
/// the selected row in a stable position on screen.
pub fn visible_range(selected: usize, total: usize, page_size: usize) -> (usize, usize) {
    if selected > 2 {
        (selected - 2, (selected + 3).min(total))
    } else {
        (0, page_size.min(total))
    }
}
