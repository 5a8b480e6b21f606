#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("चाय और नाश्ता", 4), "चाय…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_rupees() {
    assert_eq!(format_amount(dec!(150), "Rs."), "Rs. 150.00");
}

#[test]
fn test_format_amount_thousands() {
    assert_eq!(format_amount(dec!(1234567.89), "Rs."), "Rs. 1,234,567.89");
}

#[test]
fn test_format_amount_other_symbol() {
    assert_eq!(format_amount(dec!(999.99), "$"), "$ 999.99");
}

#[test]
fn test_format_amount_no_symbol() {
    assert_eq!(format_amount(dec!(12000), ""), "12,000.00");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0), "Rs."), "Rs. 0.00");
}

#[test]
fn test_format_amount_pads_decimals() {
    assert_eq!(format_amount(dec!(1.5), "Rs."), "Rs. 1.50");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50), "Rs."), "-Rs. 42.50");
}

// ── progress_bar ──────────────────────────────────────────────

#[test]
fn test_progress_bar_bounds() {
    assert_eq!(progress_bar(0, 4), "░░░░");
    assert_eq!(progress_bar(100, 4), "████");
    assert_eq!(progress_bar(250, 4), "████");
}

#[test]
fn test_progress_bar_half() {
    assert_eq!(progress_bar(50, 10), "█████░░░░░");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 3, 10);
    assert_eq!(index, 2);
}

#[test]
fn test_scroll_up_pulls_window() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
}

#[test]
fn test_scroll_to_edges() {
    let (mut index, mut scroll) = (4, 2);
    scroll_to_bottom(&mut index, &mut scroll, 20, 5);
    assert_eq!((index, scroll), (19, 15));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}
