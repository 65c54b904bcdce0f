//! 时间显示/输入框
//!
//! 单行文本框，始终持有键盘焦点（窗口上唯一的输入控件）。回车提交，
//! 由上层解析为自定义时间；计时刷新、重置等程序性更新通过 [`TimeField::set_text`]。

use super::{RenderContext, Widget};
use crate::event::KeyInput;
use crate::{Canvas, Rect};

/// 编辑结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldResult {
    /// 文本内容变化
    Changed,
    /// 回车提交当前文本
    Commit(String),
    /// Esc 放弃编辑
    Revert,
    /// 复制选中文本
    CopyText(String),
    /// 剪切选中文本（内容已删除）
    CutText(String),
}

pub struct TimeField {
    bounds: Rect,
    value: String,
    cursor_pos: usize,
    selection_start: Option<usize>, // 选择起始位置
    selection_end: Option<usize>,   // 选择结束位置
    /// 用户正在编辑（显示光标）
    editing: bool,
}

impl TimeField {
    pub fn new(bounds: Rect, text: &str) -> Self {
        Self {
            bounds,
            value: text.to_string(),
            cursor_pos: text.chars().count(),
            selection_start: None,
            selection_end: None,
            editing: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// 程序性替换文本，结束编辑
    pub fn set_text(&mut self, text: &str) {
        self.value = text.to_string();
        self.cursor_pos = self.char_count();
        self.clear_selection();
        self.editing = false;
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// 获取选中范围 (start, end)，保证 start <= end
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        match (self.selection_start, self.selection_end) {
            (Some(s), Some(e)) if s != e => Some((s.min(e), s.max(e))),
            _ => None,
        }
    }

    fn selected_text(&self) -> Option<String> {
        self.selection_range()
            .map(|(start, end)| self.value.chars().skip(start).take(end - start).collect())
    }

    /// 全选
    pub fn select_all(&mut self) {
        self.selection_start = Some(0);
        self.selection_end = Some(self.char_count());
        self.cursor_pos = self.char_count();
    }

    fn clear_selection(&mut self) {
        self.selection_start = None;
        self.selection_end = None;
    }

    /// 删除选中的文本，返回是否有删除
    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection_range() else {
            self.clear_selection();
            return false;
        };
        self.value = self.value
            .chars()
            .enumerate()
            .filter(|(i, _)| *i < start || *i >= end)
            .map(|(_, c)| c)
            .collect();
        self.cursor_pos = start;
        self.clear_selection();
        true
    }

    fn insert_at_cursor(&mut self, text: &str) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let mut inserted = 0;
        for c in text.chars().filter(|c| !c.is_control()) {
            chars.insert(self.cursor_pos + inserted, c);
            inserted += 1;
        }
        self.value = chars.into_iter().collect();
        self.cursor_pos += inserted;
    }

    /// 输入可见字符
    pub fn insert_text(&mut self, text: &str) -> Option<FieldResult> {
        if text.chars().all(|c| c.is_control()) {
            return None;
        }
        self.editing = true;
        self.delete_selection();
        self.insert_at_cursor(text);
        Some(FieldResult::Changed)
    }

    /// 处理编辑按键
    pub fn handle_key(&mut self, key: KeyInput) -> Option<FieldResult> {
        match key {
            KeyInput::Enter => {
                self.editing = false;
                self.clear_selection();
                Some(FieldResult::Commit(self.value.clone()))
            }
            KeyInput::Escape => {
                self.editing = false;
                self.clear_selection();
                Some(FieldResult::Revert)
            }
            KeyInput::Backspace => {
                self.editing = true;
                if self.delete_selection() {
                    return Some(FieldResult::Changed);
                }
                if self.cursor_pos == 0 {
                    return None;
                }
                let mut chars: Vec<char> = self.value.chars().collect();
                chars.remove(self.cursor_pos - 1);
                self.value = chars.into_iter().collect();
                self.cursor_pos -= 1;
                Some(FieldResult::Changed)
            }
            KeyInput::Delete => {
                self.editing = true;
                if self.delete_selection() {
                    return Some(FieldResult::Changed);
                }
                let mut chars: Vec<char> = self.value.chars().collect();
                if self.cursor_pos >= chars.len() {
                    return None;
                }
                chars.remove(self.cursor_pos);
                self.value = chars.into_iter().collect();
                Some(FieldResult::Changed)
            }
            KeyInput::Left => {
                self.editing = true;
                self.clear_selection();
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                None
            }
            KeyInput::Right => {
                self.editing = true;
                self.clear_selection();
                self.cursor_pos = (self.cursor_pos + 1).min(self.char_count());
                None
            }
            KeyInput::Home => {
                self.editing = true;
                self.clear_selection();
                self.cursor_pos = 0;
                None
            }
            KeyInput::End => {
                self.editing = true;
                self.clear_selection();
                self.cursor_pos = self.char_count();
                None
            }
            KeyInput::SelectAll => {
                self.editing = true;
                self.select_all();
                None
            }
            KeyInput::Copy => self.selected_text().map(FieldResult::CopyText),
            KeyInput::Cut => {
                let text = self.selected_text()?;
                self.editing = true;
                self.delete_selection();
                Some(FieldResult::CutText(text))
            }
            KeyInput::Paste(text) => self.insert_text(&text),
            KeyInput::ShiftLeft => {
                self.extend_selection(self.cursor_pos.saturating_sub(1));
                None
            }
            KeyInput::ShiftRight => {
                self.extend_selection((self.cursor_pos + 1).min(self.char_count()));
                None
            }
            KeyInput::ShiftHome => {
                self.extend_selection(0);
                None
            }
            KeyInput::ShiftEnd => {
                self.extend_selection(self.char_count());
                None
            }
        }
    }

    fn extend_selection(&mut self, to: usize) {
        self.editing = true;
        if self.selection_start.is_none() {
            self.selection_start = Some(self.cursor_pos);
        }
        self.cursor_pos = to;
        self.selection_end = Some(to);
    }
}

impl Widget for TimeField {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn render(&self, canvas: &mut Canvas, ctx: &RenderContext) {
        let Some(text) = ctx.text else { return };
        let bounds = self.bounds.scaled(ctx.scale);
        let size = ctx.time_font_size * ctx.scale;
        let origin_x = text.centered_origin(&self.value, &bounds, size);
        let cap = text.cap_height(size);
        let top = bounds.y + (bounds.height - cap) / 2.0;

        // 选中背景
        if let Some((start, end)) = self.selection_range() {
            let x0 = origin_x + text.measure_prefix(&self.value, start, size);
            let x1 = origin_x + text.measure_prefix(&self.value, end, size);
            let highlight = ctx.palette.time.with_alpha(60);
            canvas.fill_rect(&Rect::new(x0, top - 2.0 * ctx.scale, x1 - x0, cap + 4.0 * ctx.scale), highlight);
        }

        text.draw_text(canvas, &self.value, origin_x, top + cap, size, ctx.palette.time);

        // 编辑中显示光标
        if self.editing {
            let x = origin_x + text.measure_prefix(&self.value, self.cursor_pos, size);
            let caret = Rect::new(x, top - 2.0 * ctx.scale, 2.0 * ctx.scale, cap + 4.0 * ctx.scale);
            canvas.fill_rect(&caret, ctx.palette.time);
        }
    }
}
