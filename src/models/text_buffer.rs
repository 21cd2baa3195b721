//! 文本缓冲区模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 行列 ↔ 字符偏移映射
//! - 整行区间定位（含行尾换行符）

use super::edit_op::{EditOp, OpKind};
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::io::{self, Write};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// 流式写入到 Writer，避免大文件 OOM
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for chunk in self.rope.chunks() {
            writer.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = (row, col);
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line_slice(&self, row: usize) -> Option<RopeSlice<'_>> {
        if row < self.rope.len_lines() {
            Some(self.rope.line(row))
        } else {
            None
        }
    }

    /// 行内容，不含行尾换行符
    pub fn line_content(&self, row: usize) -> Option<String> {
        let slice = self.line_slice(row)?;
        let line = slice_to_cow(slice);
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Some(line.to_string())
    }

    /// 整行字符区间，含行尾换行符（若有）
    pub fn full_line_span(&self, row: usize) -> Option<Range<usize>> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let start = self.rope.line_to_char(row);
        let end = if row + 1 < self.rope.len_lines() {
            self.rope.line_to_char(row + 1)
        } else {
            self.rope.len_chars()
        };
        Some(start..end)
    }

    pub fn slice_text(&self, range: Range<usize>) -> String {
        self.rope.slice(range).to_string()
    }

    pub fn line_to_char(&self, row: usize) -> usize {
        self.rope.line_to_char(row)
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        let without_newline = line.strip_suffix('\n').unwrap_or(&line);
        let without_newline = without_newline
            .strip_suffix('\r')
            .unwrap_or(without_newline);
        without_newline.graphemes(true).count()
    }

    pub fn apply_op(&mut self, op: &EditOp) {
        op.apply(&mut self.rope);
    }

    /// 应用单个 OpKind（用于 Undo：`op.inverse()`）
    pub fn apply_kind(&mut self, kind: &OpKind) {
        kind.apply(&mut self.rope);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
