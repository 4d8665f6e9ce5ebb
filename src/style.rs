use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

pub const HELP_LINE_BG: Color = Color::from_u32(0x1a60b5);
/// Background for list rows: Color1, Color2, Selected
pub const ENTRY_BG: [Color; 3] = [
	Color::from_u32(0x322b44),
	Color::from_u32(0x241f31),
	Color::from_u32(0x5d507f),
];
pub const ACCENT: Color = Color::from_u32(0x7d56f4);

/// Colors handed to the render step
#[derive(Debug, Clone)]
pub struct Theme {
	pub help_bg: Color,
	/// Application name in the help bar
	pub title: Style,
	/// Key names in the help bar
	pub key: Style,
	/// Key descriptions in the help bar
	pub hint: Style,
	pub row_bg: [Color; 3],
	pub row_title: Style,
	pub row_description: Style,
	pub date: Style,
	pub border: Style,
	pub border_focused: Style,
	pub placeholder: Style,
	pub status: Style,
	pub popup_bg: Color,
	pub popup_border: Style,
	pub button: Style,
	pub scrollbar: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			help_bg: HELP_LINE_BG,
			title: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
			key: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
			hint: Style::default().fg(Color::White),
			row_bg: ENTRY_BG,
			row_title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
			row_description: Style::default().fg(Color::from_u32(0xafafaf)),
			date: Style::default().fg(ACCENT).add_modifier(Modifier::ITALIC),
			border: Style::default().fg(Color::from_u32(0x4f4f4f)),
			border_focused: Style::default().fg(ACCENT),
			placeholder: Style::default()
				.fg(Color::from_u32(0x626262))
				.add_modifier(Modifier::ITALIC),
			status: Style::default().fg(Color::from_u32(0x626262)),
			popup_bg: Color::from_u32(0x1f1f1f),
			popup_border: Style::default().fg(Color::Red),
			button: Style::default()
				.fg(Color::Black)
				.bg(Color::White)
				.add_modifier(Modifier::BOLD),
			scrollbar: Style::default().fg(Color::from_u32(0x7f7faf)),
		}
	}
}
