use crossterm::event::KeyEvent;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::style::Theme;

/// Render context for [`Component`]
pub struct ComponentRenderCtx<'c> {
	pub area: Rect,
	pub selected: bool,
	pub theme: &'c Theme,
	/// Terminal cursor requested by the focused component
	pub cursor: Option<Position>,
}

impl<'c> ComponentRenderCtx<'c> {
	pub fn new(area: Rect, theme: &'c Theme) -> Self {
		Self {
			area,
			selected: false,
			theme,
			cursor: None,
		}
	}
}

pub trait Component {
	/// Send inputs to the component, returns whether the key was consumed
	fn input(&mut self, key: &KeyEvent) -> bool;
	/// Render the component
	fn render(&self, frame: &mut Frame, ctx: &mut ComponentRenderCtx);
	/// Widget height, for vertical layouts
	fn height(&self) -> u16;
}
