pub mod entry;
pub mod explorer;

use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::app::keymap;
use crate::app::Mode;
use crate::app::ViewState;
use crate::app::Viewport;
use crate::style::Theme;
use crate::widgets::popup::Popup;
use crate::widgets::widget::ComponentRenderCtx;

/// Draws the whole screen for the current state
pub fn draw(frame: &mut Frame, state: &ViewState, theme: &Theme) {
	let area = screen_area(frame.area(), state.viewport());
	frame.render_widget(Clear, area);

	let mut help_area = area;
	help_area.height = 1;
	draw_help(frame, help_area, state, theme);

	let body = Rect {
		y: area.y + 1,
		height: area.height.saturating_sub(1),
		..area
	};
	let mut ctx = ComponentRenderCtx::new(body, theme);
	ctx.selected = state.error().is_none();
	match state.mode() {
		Mode::Listing => explorer::draw(frame, &mut ctx, state),
		Mode::Composing => entry::draw_composer(frame, &mut ctx, state),
		Mode::Viewing => entry::draw_viewer(frame, &mut ctx, state),
		Mode::Editing => entry::draw_editor(frame, &mut ctx, state),
	}

	if let Some(error) = state.error() {
		ctx.area = area;
		let message = format!("{error}\n\nPress any key to continue");
		Popup::new(" Error ".into(), message).render(frame, &ctx);
	} else if let Some(cursor) = ctx.cursor {
		frame.set_cursor_position(cursor);
	}
}

/// Part of the frame covered by the last reported terminal size
pub fn screen_area(frame: Rect, viewport: Viewport) -> Rect {
	frame.intersection(Rect {
		width: viewport.width,
		height: viewport.height,
		..frame
	})
}

fn draw_help(frame: &mut Frame, area: Rect, state: &ViewState, theme: &Theme) {
	let title = match state.mode() {
		Mode::Listing => " Journal ",
		Mode::Composing => " New Entry ",
		Mode::Viewing => " Journal Entry ",
		Mode::Editing => " Edit Entry ",
	};
	let mut spans = vec![Span::styled(title, theme.title)];
	if state.dev_mode() {
		spans.push(Span::styled("[dev] ", theme.title));
	}
	for (key, hint) in keymap::hints(state.mode()) {
		spans.push(Span::styled(*key, theme.key));
		spans.push(Span::styled(format!(" ({hint}) "), theme.hint));
	}
	frame.render_widget(Line::from(spans).bg(theme.help_bg), area);
}
