use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Flex;
use ratatui::layout::HorizontalAlignment;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use crate::widgets::widget::ComponentRenderCtx;

/// Text padding inside the border: top, right, bottom, left
const PADDING: [u16; 4] = [0, 1, 0, 1];

/// Centered message box with a single `Ok` button
pub struct Popup<'s> {
	title: String,
	content: Paragraph<'s>,
	layout: Layout,
}

impl<'s> Popup<'s> {
	pub fn new(title: String, message: String) -> Self {
		let horizontal = Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);
		Self {
			title,
			content: Paragraph::new(message).wrap(Wrap { trim: false }),
			layout: horizontal,
		}
	}

	/// Rows the wrapped message occupies at `width`, capped at `max_height`
	fn measured_height(&self, width: u16, max_height: u16) -> u16 {
		if width == 0 || max_height == 0 {
			return 0;
		}
		let area = Rect::new(0, 0, width, max_height);
		let mut buffer = Buffer::empty(area);
		(&self.content).render(area, &mut buffer);

		(0..max_height)
			.rev()
			.find(|&y| (0..width).any(|x| buffer[(x, y)].symbol() != " "))
			.map_or(0, |y| y + 1)
	}

	pub fn render(&self, frame: &mut Frame, ctx: &ComponentRenderCtx) {
		let [area] = ctx.area.layout(&self.layout);

		let text_width = area
			.width
			.saturating_sub(2) // Border
			.saturating_sub(PADDING[1] + PADDING[3]);
		let text_height = self.measured_height(
			text_width,
			ctx.area
				.height
				.saturating_sub(4) // Border + Spacing + Button
				.saturating_sub(PADDING[0] + PADDING[2]),
		);
		let content_height = text_height + 4 + PADDING[0] + PADDING[2];
		let [area] =
			area.layout(&Layout::vertical([Constraint::Length(content_height)]).flex(Flex::Center));

		frame.render_widget(Clear, area);
		let block = Block::bordered()
			.style(ctx.theme.popup_border.bg(ctx.theme.popup_bg))
			.title(self.title.as_str())
			.title_alignment(HorizontalAlignment::Center);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let paragraph_area = Rect {
			x: inner.x + PADDING[3],
			y: inner.y + PADDING[0],
			width: inner.width.saturating_sub(PADDING[1] + PADDING[3]),
			height: inner
				.height
				.saturating_sub(PADDING[0] + PADDING[2])
				.saturating_sub(2), // Empty line + Button
		};
		frame.render_widget(&self.content, paragraph_area);

		let button = Span::styled(" Ok ", ctx.theme.button);
		let button_width = button.width() as u16;
		let button_area = Rect {
			x: (paragraph_area.x + paragraph_area.width / 2).saturating_sub(button_width / 2),
			y: paragraph_area.y + paragraph_area.height + 1,
			width: button_width,
			height: 1,
		};
		frame.render_widget(button, button_area.intersection(ctx.area));
	}
}
