use std::cell::Cell;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::layout::Position;
use ratatui::text::Line;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::widgets::widget::Component;
use crate::widgets::widget::ComponentRenderCtx;

/// Multi-line text buffer with a grapheme cursor, soft-wrapped to the render width
pub struct TextInput {
	input: String,
	grapheme_index: usize,
	placeholder: &'static str,
	/// First visible row, follows the cursor on render
	scroll: Cell<usize>,
}

impl Default for TextInput {
	fn default() -> Self {
		Self::new()
	}
}

impl TextInput {
	pub fn new() -> Self {
		Self {
			input: String::default(),
			grapheme_index: 0,
			placeholder: "",
			scroll: Cell::new(0),
		}
	}

	pub fn placeholder(mut self, placeholder: &'static str) -> Self {
		self.placeholder = placeholder;
		self
	}

	pub fn value(&self) -> &str {
		&self.input
	}

	pub fn is_empty(&self) -> bool {
		self.input.is_empty()
	}

	pub fn set_input(&mut self, input: String) {
		self.input = input;
		self.grapheme_index = self.grapheme_count();
		self.scroll.set(0);
	}

	pub fn clear(&mut self) {
		self.set_input(String::default());
	}

	pub fn cursor(&self) -> usize {
		self.grapheme_index
	}

	fn grapheme_count(&self) -> usize {
		self.input.graphemes(true).count()
	}

	/// Byte offset of the grapheme under the cursor
	fn byte_index(&self) -> usize {
		self.input
			.grapheme_indices(true)
			.map(|(i, _)| i)
			.nth(self.grapheme_index)
			.unwrap_or(self.input.len())
	}

	fn move_cursor_left(&mut self) {
		self.grapheme_index = self.grapheme_index.saturating_sub(1);
	}

	fn move_cursor_right(&mut self) {
		self.grapheme_index = std::cmp::min(self.grapheme_index + 1, self.grapheme_count());
	}

	fn enter_char(&mut self, new_char: char) {
		let before = self.grapheme_count();
		let index = self.byte_index();
		self.input.insert(index, new_char);
		// A combining mark merges into the previous grapheme instead of adding one
		if self.grapheme_count() > before {
			self.move_cursor_right();
		}
	}

	fn delete_char(&mut self) {
		if self.grapheme_index == 0 {
			return;
		}
		self.move_cursor_left();
		self.delete_next();
	}

	fn delete_next(&mut self) {
		let start = self.byte_index();
		let Some(len) = self.input[start..].graphemes(true).next().map(str::len) else {
			return;
		};
		self.input.replace_range(start..start + len, "");
	}

	/// Splits the buffer into display rows of at most `width` columns.
	///
	/// Returns the rows and the cursor as `(row, column)`.
	pub fn layout(&self, width: u16) -> (Vec<String>, (usize, usize)) {
		let width = width as usize;
		let mut rows = vec![String::new()];
		let mut col = 0;
		let mut cursor = None;

		for (i, grapheme) in self.input.graphemes(true).enumerate() {
			let newline = grapheme == "\n" || grapheme == "\r\n";
			let grapheme_width = grapheme.width();
			if !newline && width > 0 && col > 0 && col + grapheme_width > width {
				rows.push(String::new());
				col = 0;
			}
			if i == self.grapheme_index {
				cursor = Some(if newline && width > 0 && col >= width {
					// Past a full row: show the cursor at the start of the next one
					(rows.len(), 0)
				} else {
					(rows.len() - 1, col)
				});
			}
			if newline {
				rows.push(String::new());
				col = 0;
			} else if let Some(row) = rows.last_mut() {
				row.push_str(grapheme);
				col += grapheme_width;
			}
		}

		let cursor = match cursor {
			Some(cursor) => cursor,
			None if width > 0 && col >= width => {
				rows.push(String::new());
				(rows.len() - 1, 0)
			}
			None => (rows.len() - 1, col),
		};
		(rows, cursor)
	}
}

impl Component for TextInput {
	fn input(&mut self, key: &KeyEvent) -> bool {
		let ctrl_pressed = key.modifiers.contains(KeyModifiers::CONTROL);
		let alt_pressed = key.modifiers.contains(KeyModifiers::ALT);
		match key.code {
			KeyCode::Enter if alt_pressed => self.enter_char('\n'),
			KeyCode::Backspace => self.delete_char(),
			KeyCode::Delete => self.delete_next(),
			// Movement
			KeyCode::Left => self.move_cursor_left(),
			KeyCode::Char('b') if ctrl_pressed => self.move_cursor_left(),
			KeyCode::Right => self.move_cursor_right(),
			KeyCode::Char('f') if ctrl_pressed => self.move_cursor_right(),
			KeyCode::Home => self.grapheme_index = 0,
			KeyCode::Char('a') if ctrl_pressed => self.grapheme_index = 0,
			KeyCode::End => self.grapheme_index = self.grapheme_count(),
			KeyCode::Char('e') if ctrl_pressed => self.grapheme_index = self.grapheme_count(),
			KeyCode::Char('u') if ctrl_pressed => self.clear(),
			KeyCode::Char(to_insert) if !ctrl_pressed => self.enter_char(to_insert),
			_ => return false,
		}
		true
	}

	fn render(&self, frame: &mut Frame, ctx: &mut ComponentRenderCtx) {
		let area = ctx.area;
		if area.width == 0 || area.height == 0 {
			return;
		}

		let (rows, (row, col)) = self.layout(area.width);
		let height = area.height as usize;
		let mut scroll = self.scroll.get();
		if row < scroll {
			scroll = row;
		} else if row >= scroll + height {
			scroll = row + 1 - height;
		}
		self.scroll.set(scroll);

		if self.input.is_empty() {
			frame.render_widget(
				Paragraph::new(Line::styled(self.placeholder, ctx.theme.placeholder)),
				area,
			);
		} else {
			let lines = rows
				.into_iter()
				.skip(scroll)
				.take(height)
				.map(Line::from)
				.collect::<Vec<_>>();
			frame.render_widget(Paragraph::new(Text::from(lines)), area);
		}

		if ctx.selected {
			ctx.cursor = Some(Position::new(
				area.x + col as u16,
				area.y + (row - scroll) as u16,
			));
		}
	}

	fn height(&self) -> u16 {
		self.input.split('\n').count() as u16
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn typed(text: &str) -> TextInput {
		let mut input = TextInput::new();
		for c in text.chars() {
			assert!(input.input(&KeyEvent::from(KeyCode::Char(c))));
		}
		input
	}

	fn press(input: &mut TextInput, code: KeyCode, modifiers: KeyModifiers) -> bool {
		input.input(&KeyEvent::new(code, modifiers))
	}

	#[test]
	fn typing_appends() {
		let input = typed("hello");
		assert_eq!(input.value(), "hello");
		assert_eq!(input.cursor(), 5);
	}

	#[test]
	fn editing_mid_buffer() {
		let mut input = typed("hllo");
		press(&mut input, KeyCode::Home, KeyModifiers::NONE);
		press(&mut input, KeyCode::Right, KeyModifiers::NONE);
		press(&mut input, KeyCode::Char('e'), KeyModifiers::NONE);
		assert_eq!(input.value(), "hello");

		press(&mut input, KeyCode::End, KeyModifiers::NONE);
		press(&mut input, KeyCode::Backspace, KeyModifiers::NONE);
		assert_eq!(input.value(), "hell");

		press(&mut input, KeyCode::Char('a'), KeyModifiers::CONTROL);
		press(&mut input, KeyCode::Delete, KeyModifiers::NONE);
		assert_eq!(input.value(), "ell");
	}

	#[test]
	fn backspace_removes_whole_grapheme() {
		let mut input = TextInput::new();
		input.set_input("ae\u{301}".into());
		assert_eq!(input.cursor(), 2);
		press(&mut input, KeyCode::Backspace, KeyModifiers::NONE);
		assert_eq!(input.value(), "a");
	}

	#[test]
	fn control_keys_are_not_inserted() {
		let mut input = typed("ab");
		assert!(!press(&mut input, KeyCode::Char('x'), KeyModifiers::CONTROL));
		assert!(!press(&mut input, KeyCode::Esc, KeyModifiers::NONE));
		assert!(!press(&mut input, KeyCode::Enter, KeyModifiers::NONE));
		assert_eq!(input.value(), "ab");
	}

	#[test]
	fn alt_enter_inserts_newline() {
		let mut input = typed("a");
		press(&mut input, KeyCode::Enter, KeyModifiers::ALT);
		press(&mut input, KeyCode::Char('b'), KeyModifiers::NONE);
		assert_eq!(input.value(), "a\nb");
		assert_eq!(input.height(), 2);
	}

	#[test]
	fn whitespace_is_content() {
		assert!(TextInput::new().is_empty());
		assert!(!typed("  ").is_empty());

		let mut input = typed(" ");
		press(&mut input, KeyCode::Backspace, KeyModifiers::NONE);
		assert!(input.is_empty());
	}

	#[test]
	fn layout_wraps_and_tracks_cursor() {
		let mut input = TextInput::new();
		input.set_input("abcdefg\nhi".into());
		let (rows, cursor) = input.layout(3);
		assert_eq!(rows, vec!["abc", "def", "g", "hi"]);
		assert_eq!(cursor, (3, 2));

		input.grapheme_index = 3;
		assert_eq!(input.layout(3).1, (1, 0));
	}

	#[test]
	fn layout_moves_cursor_past_full_row() {
		let mut input = TextInput::new();
		input.set_input("abc".into());
		let (rows, cursor) = input.layout(3);
		assert_eq!(rows, vec!["abc", ""]);
		assert_eq!(cursor, (1, 0));
	}

	#[test]
	fn cursor_on_newline_after_full_row_wraps() {
		let mut input = TextInput::new();
		input.set_input("abc\nd".into());
		input.grapheme_index = 3;
		let (rows, cursor) = input.layout(3);
		assert_eq!(rows, vec!["abc", "d"]);
		assert_eq!(cursor, (1, 0));

		input.grapheme_index = 2;
		assert_eq!(input.layout(3).1, (0, 2));
	}

	#[test]
	fn layout_respects_wide_characters() {
		let mut input = TextInput::new();
		input.set_input("日本語".into());
		let (rows, _) = input.layout(4);
		assert_eq!(rows, vec!["日本", "語"]);
	}
}
