use std::cell::Cell;
use std::cell::RefCell;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;
use ratatui::widgets::List;
use ratatui::widgets::ListState;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::ScrollbarState;
use ratatui::Frame;

use crate::data::entry::ListItem;
use crate::style::Theme;
use crate::widgets::widget::Component;
use crate::widgets::widget::ComponentRenderCtx;

/// Each row shows the title, the description and a spacer line
const ROW_HEIGHT: u16 = 3;

/// Scrollable list of entry rows with a single selection
pub struct EntryList {
	items: Vec<ListItem>,
	selected: usize,

	/// Rows that fit in the last rendered area, used for paging
	page: Cell<usize>,
	list_state: RefCell<ListState>,
}

impl Default for EntryList {
	fn default() -> Self {
		Self::new(vec![])
	}
}

impl EntryList {
	pub fn new(items: Vec<ListItem>) -> Self {
		Self {
			items,
			selected: 0,
			page: Cell::new(1),
			list_state: RefCell::default(),
		}
	}

	pub fn items(&self) -> &[ListItem] {
		&self.items
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Replaces every row, keeping the cursor position when possible
	pub fn set_items(&mut self, items: Vec<ListItem>) {
		self.items = items;
		self.selected = std::cmp::min(self.selected, self.items.len().saturating_sub(1));
	}

	pub fn selected_index(&self) -> Option<usize> {
		(!self.items.is_empty()).then_some(self.selected)
	}

	pub fn selected_item(&self) -> Option<&ListItem> {
		self.items.get(self.selected)
	}

	pub fn select_first(&mut self) {
		self.selected = 0;
	}

	fn move_cursor(&mut self, offset: isize) {
		if self.items.is_empty() {
			self.selected = 0;
			return;
		}
		if offset > 0 {
			self.selected = std::cmp::min(self.selected + offset as usize, self.items.len() - 1);
		} else if offset < 0 {
			self.selected = self.selected.saturating_sub(offset.unsigned_abs());
		}
	}

	fn format_item<'i>(
		item: &'i ListItem,
		theme: &Theme,
		id: usize,
		selected: bool,
	) -> ratatui::widgets::ListItem<'i> {
		let bg = theme.row_bg[if selected { 2 } else { id % 2 }];
		let marker = if selected { "▌" } else { " " };
		let text = Text::from(vec![
			Line::from(vec![
				Span::styled(marker, theme.border_focused),
				Span::styled(item.title.as_str(), theme.row_title),
			]),
			Line::from(vec![
				Span::styled(marker, theme.border_focused),
				Span::styled(item.description.as_str(), theme.row_description),
			]),
			Line::from(""),
		]);
		ratatui::widgets::ListItem::new(text).bg(bg)
	}
}

impl Component for EntryList {
	fn input(&mut self, key: &KeyEvent) -> bool {
		let ctrl_pressed = key.modifiers.contains(KeyModifiers::CONTROL);
		let page = self.page.get().max(1) as isize;
		match key.code {
			KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.move_cursor(1),
			KeyCode::Char('n') if ctrl_pressed => self.move_cursor(1),
			KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.move_cursor(-1),
			KeyCode::Char('p') if ctrl_pressed => self.move_cursor(-1),
			KeyCode::PageDown => self.move_cursor(page),
			KeyCode::PageUp => self.move_cursor(-page),
			KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
			KeyCode::End | KeyCode::Char('G') => self.selected = self.items.len().saturating_sub(1),
			_ => return false,
		}
		true
	}

	fn render(&self, frame: &mut Frame, ctx: &mut ComponentRenderCtx) {
		let mut area = ctx.area;
		self.page.set((area.height / ROW_HEIGHT).max(1) as usize);

		// Scrollbar
		let mut scrollbar_area = area;
		scrollbar_area.x = (area.x + area.width).saturating_sub(1);
		scrollbar_area.width = 1;
		area.width = area.width.saturating_sub(1);

		let theme = ctx.theme;
		let focused = ctx.selected;
		let items = self
			.items
			.iter()
			.enumerate()
			.map(|(id, item)| Self::format_item(item, theme, id, focused && id == self.selected))
			.collect::<Vec<_>>();

		let mut list_state = self.list_state.borrow_mut();
		list_state.select(self.selected_index());
		frame.render_stateful_widget(List::new(items), area, &mut *list_state);

		let mut scrollbar = ScrollbarState::new(self.items.len()).position(self.selected);
		frame.render_stateful_widget(
			Scrollbar::default()
				.orientation(ScrollbarOrientation::VerticalRight)
				.style(ctx.theme.scrollbar),
			scrollbar_area,
			&mut scrollbar,
		);
	}

	fn height(&self) -> u16 {
		u16::try_from(self.items.len())
			.unwrap_or(u16::MAX)
			.saturating_mul(ROW_HEIGHT)
	}
}
