//! Terminal text measurement.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` cells, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = char_width(ch);
        if width + w > target_width {
            break;
        }
        result.push(ch);
        width += w;
    }
    result.push('…');
    result
}

/// Truncate or right-pad `s` to exactly `width` cells.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let used = display_width(&out);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// Center `s` within `width` cells, truncating if it does not fit.
pub fn center_in_width(s: &str, width: usize) -> String {
    let body = truncate_to_width(s, width);
    let used = display_width(&body);
    let left = width.saturating_sub(used) / 2;
    let right = width.saturating_sub(used + left);
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(&body);
    out.extend(std::iter::repeat_n(' ', right));
    out
}
