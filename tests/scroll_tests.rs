use qgh::app::scroll::{DETAIL_CHROME, LIST_CHROME, ScrollState, Window, capacity};

fn at(cursor: usize, offset: usize) -> ScrollState {
    ScrollState { cursor, offset }
}

fn assert_visible(s: ScrollState, cap: usize) {
    assert!(
        s.offset <= s.cursor && s.cursor < s.offset + cap,
        "cursor {} not in window starting at {} with capacity {}",
        s.cursor,
        s.offset,
        cap
    );
}

// --- Capacity ---

#[test]
fn test_capacity_subtracts_chrome() {
    assert_eq!(capacity(24, LIST_CHROME), 14);
    assert_eq!(capacity(24, DETAIL_CHROME), 15);
}

#[test]
fn test_capacity_is_at_least_one() {
    assert_eq!(capacity(0, LIST_CHROME), 1);
    assert_eq!(capacity(LIST_CHROME, LIST_CHROME), 1);
    assert_eq!(capacity(3, DETAIL_CHROME), 1);
}

#[test]
fn test_list_and_detail_chrome_differ() {
    assert_ne!(LIST_CHROME, DETAIL_CHROME);
}

// --- Window ---

#[test]
fn test_window_at_top() {
    let w = at(0, 0).window(20, 5);
    assert_eq!(
        w,
        Window {
            start: 0,
            end: 5,
            more_above: false,
            more_below: true
        }
    );
}

#[test]
fn test_window_in_middle() {
    let w = at(7, 5).window(20, 5);
    assert_eq!((w.start, w.end), (5, 10));
    assert!(w.more_above);
    assert!(w.more_below);
}

#[test]
fn test_window_at_bottom() {
    let w = at(19, 15).window(20, 5);
    assert_eq!((w.start, w.end), (15, 20));
    assert!(w.more_above);
    assert!(!w.more_below);
}

#[test]
fn test_window_shorter_than_capacity() {
    let w = at(0, 0).window(3, 10);
    assert_eq!((w.start, w.end), (0, 3));
    assert!(!w.more_above);
    assert!(!w.more_below);
}

#[test]
fn test_window_of_empty_list() {
    let w = at(0, 0).window(0, 10);
    assert_eq!((w.start, w.end), (0, 0));
    assert!(!w.more_below);
}

// --- Line movement ---

#[test]
fn test_down_at_last_item_is_noop() {
    let s = at(9, 5);
    assert_eq!(s.down(10, 5), s);
}

#[test]
fn test_up_at_zero_is_noop() {
    assert_eq!(at(0, 0).up(5), at(0, 0));
}

#[test]
fn test_down_scrolls_only_at_bottom_edge() {
    let s = at(3, 0).down(20, 5);
    assert_eq!(s, at(4, 0));
    let s = s.down(20, 5);
    assert_eq!(s, at(5, 1));
}

#[test]
fn test_up_scrolls_only_at_top_edge() {
    let s = at(6, 5).up(5);
    assert_eq!(s, at(5, 5));
    let s = s.up(5);
    assert_eq!(s, at(4, 4));
}

#[test]
fn test_down_on_empty_list_stays_at_zero() {
    assert_eq!(at(0, 0).down(0, 5), at(0, 0));
}

// --- Page movement ---

#[test]
fn test_page_down_moves_one_capacity() {
    let s = at(0, 0).page_down(20, 5);
    assert_eq!(s, at(5, 1));
}

#[test]
fn test_page_down_clamps_to_last_item() {
    let s = at(17, 13).page_down(20, 5);
    assert_eq!(s, at(19, 15));
}

#[test]
fn test_page_up_clamps_to_zero() {
    let s = at(3, 2).page_up(5);
    assert_eq!(s, at(0, 0));
}

#[test]
fn test_page_up_keeps_offset_when_cursor_still_visible() {
    let s = at(14, 8).page_up(5);
    assert_eq!(s, at(9, 8));
}

#[test]
fn test_page_down_on_empty_list() {
    assert_eq!(at(0, 0).page_down(0, 5), at(0, 0));
}

// --- Invariants ---

#[test]
fn test_cursor_stays_visible_through_any_navigation() {
    let len = 37;
    for height in [LIST_CHROME, LIST_CHROME + 1, 15, 24, 60] {
        let cap = capacity(height, LIST_CHROME);
        let mut s = ScrollState::default();
        let moves: [fn(ScrollState, usize, usize) -> ScrollState; 4] = [
            |s, len, cap| s.down(len, cap),
            |s, len, cap| s.page_down(len, cap),
            |s, _, cap| s.up(cap),
            |s, _, cap| s.page_up(cap),
        ];
        for step in 0..200 {
            s = moves[step % 7 % 4](s, len, cap);
            assert!(s.cursor < len);
            assert_visible(s, cap);
        }
    }
}

#[test]
fn test_reveal_after_capacity_shrinks() {
    let s = at(20, 10).reveal(4);
    assert_eq!(s, at(20, 17));
}

#[test]
fn test_reveal_when_cursor_above_window() {
    assert_eq!(at(2, 8).reveal(5), at(2, 2));
}

#[test]
fn test_clamp_to_shorter_list() {
    assert_eq!(at(12, 9).clamp(5), at(4, 4));
    assert_eq!(at(12, 9).clamp(0), at(0, 0));
}
