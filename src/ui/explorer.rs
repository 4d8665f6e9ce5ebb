use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Padding;
use ratatui::Frame;

use crate::app::ViewState;
use crate::widgets::widget::Component;
use crate::widgets::widget::ComponentRenderCtx;

pub fn summary(count: usize) -> String {
	match count {
		0 => "No journal entries yet. Press 'n' to create one.".into(),
		1 => "You have 1 journal entry".into(),
		n => format!("You have {n} journal entries"),
	}
}

/// Listing mode: entry count above the scrollable list
pub fn draw(frame: &mut Frame, ctx: &mut ComponentRenderCtx, state: &ViewState) {
	let block = Block::bordered()
		.border_style(ctx.theme.border_focused)
		.padding(Padding::horizontal(1));
	let inner = block.inner(ctx.area);
	frame.render_widget(block, ctx.area);

	let [status_area, list_area] =
		Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);
	let list = state.list();
	frame.render_widget(
		Line::styled(summary(list.items().len()), ctx.theme.status),
		status_area,
	);

	ctx.area = list_area;
	list.render(frame, ctx);
}
