use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use crate::app::ViewState;
use crate::widgets::widget::Component;
use crate::widgets::widget::ComponentRenderCtx;

fn framed(frame: &mut Frame, ctx: &ComponentRenderCtx, title: &str) -> Rect {
	let block = Block::bordered()
		.title(Line::styled(title, ctx.theme.title))
		.border_style(ctx.theme.border_focused)
		.padding(Padding::horizontal(1));
	let inner = block.inner(ctx.area);
	frame.render_widget(block, ctx.area);
	inner
}

/// Date line above the body, returns the remaining area
fn dated(frame: &mut Frame, ctx: &ComponentRenderCtx, area: Rect, date: String) -> Rect {
	let [date_area, body] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
	frame.render_widget(Line::styled(date, ctx.theme.date), date_area);
	body
}

pub fn draw_composer(frame: &mut Frame, ctx: &mut ComponentRenderCtx, state: &ViewState) {
	ctx.area = framed(frame, ctx, " New Journal Entry ");
	state.input().render(frame, ctx);
}

pub fn draw_viewer(frame: &mut Frame, ctx: &mut ComponentRenderCtx, state: &ViewState) {
	let area = framed(frame, ctx, " Journal Entry ");
	let Some(entry) = state.focus() else {
		frame.render_widget(Line::from("No entry selected"), area);
		return;
	};
	let body = dated(frame, ctx, area, entry.formatted_date());
	frame.render_widget(
		Paragraph::new(entry.content.as_str()).wrap(Wrap { trim: false }),
		body,
	);
}

pub fn draw_editor(frame: &mut Frame, ctx: &mut ComponentRenderCtx, state: &ViewState) {
	let area = framed(frame, ctx, " Edit Journal Entry ");
	let Some(entry) = state.focus() else {
		frame.render_widget(Line::from("No entry selected"), area);
		return;
	};
	let body = dated(frame, ctx, area, entry.formatted_date());
	let input = Block::bordered().border_style(ctx.theme.border);
	ctx.area = input.inner(body);
	frame.render_widget(input, body);
	state.input().render(frame, ctx);
}
