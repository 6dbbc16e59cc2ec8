//! Layout calculations shared by rendering and hit-testing
//!
//! All functions here are pure and measured in terminal cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A rectangle of terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && col < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Width of the drive column, in cells
const DRIVES_WIDTH: u16 = 24;

/// Screen regions for one frame
///
/// ```text
/// +------------------------------------------+
/// | search box                               |
/// +---------+--------------------+-----------+
/// | drives  | files              | preview   |
/// +---------+--------------------+-----------+
/// | status line                              |
/// +------------------------------------------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    pub search: Rect,
    pub drives: Rect,
    pub files: Rect,
    pub preview: Option<Rect>,
    pub status: Rect,
}

impl Layout {
    pub fn compute(width: u16, height: u16, show_preview: bool) -> Self {
        let search = Rect::new(0, 0, width, height.min(1));
        let status = Rect::new(0, height.saturating_sub(1), width, height.min(1));
        let body_height = height.saturating_sub(2);

        let drives_width = DRIVES_WIDTH.min(width / 4);
        let drives = Rect::new(0, 1, drives_width, body_height);

        let rest_x = drives_width.saturating_add(1);
        let rest_width = width.saturating_sub(rest_x);
        let (files, preview) = if show_preview && rest_width >= 20 {
            let files_width = rest_width / 2;
            let preview_x = rest_x + files_width + 1;
            (
                Rect::new(rest_x, 1, files_width, body_height),
                Some(Rect::new(
                    preview_x,
                    1,
                    width.saturating_sub(preview_x),
                    body_height,
                )),
            )
        } else {
            (Rect::new(rest_x, 1, rest_width, body_height), None)
        };

        Self {
            search,
            drives,
            files,
            preview,
            status,
        }
    }
}

/// Rows available for list items below a list's title row
pub fn list_rows(rect: Rect) -> usize {
    rect.height.saturating_sub(1) as usize
}

/// First item shown so that `focused` stays visible in `rows` rows
pub fn scroll_offset(focused: Option<usize>, rows: usize) -> usize {
    match focused {
        Some(index) if rows > 0 && index >= rows => index + 1 - rows,
        _ => 0,
    }
}

/// Item index under `row`, if the row is inside the list body
pub fn item_at_row(rect: Rect, row: u16, offset: usize, len: usize) -> Option<usize> {
    let first_item_row = rect.y + 1;
    if row < first_item_row || row >= rect.y.saturating_add(rect.height) {
        return None;
    }
    let index = offset + (row - first_item_row) as usize;
    (index < len).then_some(index)
}

/// Truncate `text` to at most `width` terminal columns, marking the cut with `~`
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('~');
    out
}

/// `fit_width`, then pad with spaces to exactly `width` columns
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = fit_width(text, width);
    let used = out.width();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Human-readable size ("512 B", "1.5 KB", "3.0 MB")
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_do_not_overlap() {
        let layout = Layout::compute(100, 30, false);
        assert_eq!(layout.search, Rect::new(0, 0, 100, 1));
        assert_eq!(layout.status, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.drives, Rect::new(0, 1, 24, 28));
        assert_eq!(layout.files, Rect::new(25, 1, 75, 28));
        assert!(layout.preview.is_none());
    }

    #[test]
    fn test_layout_with_preview_splits_files() {
        let layout = Layout::compute(100, 30, true);
        let preview = layout.preview.unwrap();
        assert!(layout.files.x + layout.files.width < preview.x);
        assert_eq!(preview.x + preview.width, 100);
    }

    #[test]
    fn test_narrow_terminal_drops_preview() {
        let layout = Layout::compute(24, 10, true);
        assert!(layout.preview.is_none());
    }

    #[test]
    fn test_scroll_offset_keeps_focus_visible() {
        assert_eq!(scroll_offset(None, 10), 0);
        assert_eq!(scroll_offset(Some(3), 10), 0);
        assert_eq!(scroll_offset(Some(10), 10), 1);
        assert_eq!(scroll_offset(Some(25), 10), 16);
    }

    #[test]
    fn test_item_at_row() {
        let rect = Rect::new(0, 1, 20, 6);
        // Row 1 is the title
        assert_eq!(item_at_row(rect, 1, 0, 10), None);
        assert_eq!(item_at_row(rect, 2, 0, 10), Some(0));
        assert_eq!(item_at_row(rect, 4, 3, 10), Some(5));
        assert_eq!(item_at_row(rect, 4, 0, 2), None);
        assert_eq!(item_at_row(rect, 7, 0, 10), None);
    }

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width("short", 10), "short");
        assert_eq!(fit_width("a long name", 6), "a lon~");
        assert_eq!(fit_width("abc", 0), "");
    }

    #[test]
    fn test_fit_width_counts_wide_chars_as_two_columns() {
        let fitted = fit_width("报告文件名称很长的文档.txt", 10);
        assert_eq!(fitted, "报告文件~");
        assert!(fitted.width() <= 10);
        assert_eq!(fit_width("报告.txt", 8), "报告.txt");
    }

    #[test]
    fn test_pad_to_width_aligns_mixed_names() {
        let cjk = pad_to_width("文档.txt", 12);
        let ascii = pad_to_width("notes.txt", 12);
        assert_eq!(cjk.width(), 12);
        assert_eq!(ascii.width(), 12);
        assert_eq!(cjk, "文档.txt    ");
        // A wide char that would straddle the limit is dropped, then padded
        assert_eq!(pad_to_width("ab报告", 4), "ab~ ");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
