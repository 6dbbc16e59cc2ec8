//! View - draws the model to the terminal
//!
//! Rendering is a function of the model and the terminal size. Everything is
//! queued into one buffer and flushed once per frame.

pub mod geometry;

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use fastfm::model::{AppModel, FocusRegion, PaneContent, StatusLevel};

use geometry::{fit_width, format_size, list_rows, pad_to_width, Layout, Rect};
use hit_test::list_offset;

/// One list row ready to draw
struct Row {
    text: String,
    focused: bool,
    selected: bool,
    is_dir: bool,
}

pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn draw(&mut self, model: &AppModel, layout: &Layout) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        self.draw_search(model, layout.search)?;
        self.draw_drives(model, layout.drives)?;
        self.draw_files(model, layout.files)?;
        if let Some(rect) = layout.preview {
            self.draw_preview(model, rect)?;
        }
        self.draw_status(model, layout.status)?;

        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        Ok(())
    }

    fn draw_search(&mut self, model: &AppModel, rect: Rect) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }
        let focused = model.focus.current_region() == FocusRegion::Search;
        let cursor = if focused { "_" } else { "" };
        let text = format!(" Search: {}{}", model.search.query, cursor);
        self.title_line(rect, &text, focused)
    }

    fn draw_drives(&mut self, model: &AppModel, rect: Rect) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }
        let region = FocusRegion::Drives;
        self.title_line(
            Rect { height: 1, ..rect },
            " Drives",
            model.focus.current_region() == region,
        )?;

        let focused = model.focus.current_index(region);
        let rows = model.drives.iter().enumerate().map(|(i, drive)| Row {
            text: format!(" {}", drive.label),
            focused: focused == Some(i),
            selected: false,
            is_dir: true,
        });
        self.list_body(rect, list_offset(model, region, rect), rows)
    }

    fn draw_files(&mut self, model: &AppModel, rect: Rect) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }
        let region = FocusRegion::Files;
        let mut title = match &model.pane.content {
            PaneContent::Welcome => " Select a drive to begin".to_string(),
            PaneContent::Directory => match &model.pane.current_dir {
                Some(dir) => format!(" {}", dir.display()),
                None => String::new(),
            },
            PaneContent::SearchResults { keyword } => {
                format!(" Results for \"{}\" ({})", keyword, model.pane.len())
            }
        };
        if model.pane.pending.is_some() {
            title.push_str(" ...");
        }
        self.title_line(
            Rect { height: 1, ..rect },
            &title,
            model.focus.current_region() == region,
        )?;

        let focused = model.focus.current_index(region);
        let size_width = 10;
        let name_width = (rect.width as usize).saturating_sub(size_width + 3);
        let rows = model.pane.entries.iter().enumerate().map(|(i, entry)| {
            let marker = if entry.is_dir() { '/' } else { ' ' };
            let size = match entry.size {
                Some(bytes) if !entry.is_dir() => format_size(bytes),
                _ => String::new(),
            };
            Row {
                text: format!(
                    " {}{}{:>size_width$}",
                    pad_to_width(&entry.name, name_width),
                    marker,
                    size,
                ),
                focused: focused == Some(i),
                selected: model.pane.is_selected(&entry.path),
                is_dir: entry.is_dir(),
            }
        });
        self.list_body(rect, list_offset(model, region, rect), rows)
    }

    fn draw_preview(&mut self, model: &AppModel, rect: Rect) -> Result<()> {
        let Some(preview) = &model.ui.preview else {
            return Ok(());
        };
        let name = preview
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.title_line(Rect { height: 1, ..rect }, &format!(" {}", name), false)?;

        let width = rect.width as usize;
        for (row, line) in preview.content.lines().take(list_rows(rect)).enumerate() {
            queue!(
                self.out,
                MoveTo(rect.x, rect.y + 1 + row as u16),
                Print(fit_width(&line.replace('\t', "    "), width))
            )?;
        }
        Ok(())
    }

    fn draw_status(&mut self, model: &AppModel, rect: Rect) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }
        let width = rect.width as usize;
        queue!(self.out, MoveTo(rect.x, rect.y))?;

        if let Some(prompt) = &model.ui.prompt {
            let text = format!(" {}: {}_", prompt.label(), prompt.input);
            queue!(
                self.out,
                SetAttribute(Attribute::Bold),
                Print(fit_width(&text, width)),
                SetAttribute(Attribute::Reset)
            )?;
            return Ok(());
        }

        let (text, color) = match &model.ui.status {
            Some(status) => (
                status.text.clone(),
                match status.level {
                    StatusLevel::Info => Color::Reset,
                    StatusLevel::Warning => Color::Yellow,
                    StatusLevel::Error => Color::Red,
                },
            ),
            None => (
                "F2 hidden  F3 preview  F4 reload keys  F5 refresh  F7 new folder  F8 new file  ctrl+q quit"
                    .to_string(),
                Color::DarkGrey,
            ),
        };
        let selected = model.pane.selection.len();
        let text = if selected > 0 {
            format!(" [{} selected] {}", selected, text)
        } else {
            format!(" {}", text)
        };
        queue!(
            self.out,
            SetForegroundColor(color),
            Print(fit_width(&text, width)),
            ResetColor
        )?;
        Ok(())
    }

    fn title_line(&mut self, rect: Rect, text: &str, active: bool) -> Result<()> {
        let width = rect.width as usize;
        let line = pad_to_width(text, width);
        queue!(self.out, MoveTo(rect.x, rect.y))?;
        if active {
            queue!(
                self.out,
                SetAttribute(Attribute::Reverse),
                Print(line),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(
                self.out,
                SetAttribute(Attribute::Bold),
                Print(line),
                SetAttribute(Attribute::Reset)
            )?;
        }
        Ok(())
    }

    fn list_body(
        &mut self,
        rect: Rect,
        offset: usize,
        rows: impl Iterator<Item = Row>,
    ) -> Result<()> {
        let width = rect.width as usize;
        for (line, row) in rows.skip(offset).take(list_rows(rect)).enumerate() {
            let text = pad_to_width(&row.text, width);
            queue!(self.out, MoveTo(rect.x, rect.y + 1 + line as u16))?;
            if row.selected {
                queue!(self.out, SetForegroundColor(Color::Green))?;
            } else if row.is_dir {
                queue!(self.out, SetForegroundColor(Color::Blue))?;
            }
            if row.focused {
                queue!(self.out, SetAttribute(Attribute::Reverse))?;
            }
            queue!(
                self.out,
                Print(text),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        Ok(())
    }
}
