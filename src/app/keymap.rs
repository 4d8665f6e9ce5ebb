use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use crate::app::command::Command;
use crate::app::state::Mode;

/// Key bindings shown in the help bar: (key, description)
pub fn hints(mode: Mode) -> &'static [(&'static str, &'static str)] {
	match mode {
		Mode::Listing => &[
			("⮁", "navigate"),
			("n", "new entry"),
			("enter", "view entry"),
			("q", "quit"),
		],
		Mode::Composing | Mode::Editing => &[
			("enter", "save"),
			("alt+enter", "newline"),
			("esc", "cancel"),
			("ctrl+c", "quit"),
		],
		Mode::Viewing => &[("e", "edit"), ("d", "delete"), ("esc", "back")],
	}
}

/// Maps a key press to the command it means in `mode`
pub fn command_for(mode: Mode, key: &KeyEvent) -> Option<Command> {
	let ctrl_pressed = key.modifiers.contains(KeyModifiers::CONTROL);
	match mode {
		Mode::Listing => Some(match key.code {
			KeyCode::Char('c') if ctrl_pressed => Command::Quit,
			KeyCode::Char('q') => Command::Quit,
			KeyCode::Char('n') if !ctrl_pressed => Command::New,
			KeyCode::Enter => Command::Select,
			_ => Command::Navigate(*key),
		}),
		Mode::Composing | Mode::Editing => Some(match key.code {
			KeyCode::Char('c') if ctrl_pressed => Command::Quit,
			KeyCode::Esc => Command::Cancel,
			KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => Command::Input(*key),
			KeyCode::Enter => Command::Confirm,
			_ => Command::Input(*key),
		}),
		Mode::Viewing => match key.code {
			KeyCode::Esc | KeyCode::Char('q') => Some(Command::Back),
			KeyCode::Char('d') => Some(Command::Delete),
			KeyCode::Char('e') => Some(Command::Edit),
			_ => None,
		},
	}
}

/// The key of a press event; releases and non-key events are `None`
pub fn key_press(event: &Event) -> Option<&KeyEvent> {
	match event {
		Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::from(code)
	}

	fn ctrl(c: char) -> KeyEvent {
		KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
	}

	#[test]
	fn listing_bindings() {
		assert_eq!(command_for(Mode::Listing, &key(KeyCode::Char('q'))), Some(Command::Quit));
		assert_eq!(command_for(Mode::Listing, &ctrl('c')), Some(Command::Quit));
		assert_eq!(command_for(Mode::Listing, &key(KeyCode::Char('n'))), Some(Command::New));
		assert_eq!(command_for(Mode::Listing, &key(KeyCode::Enter)), Some(Command::Select));
		assert_eq!(
			command_for(Mode::Listing, &key(KeyCode::Down)),
			Some(Command::Navigate(key(KeyCode::Down)))
		);
		assert_eq!(command_for(Mode::Listing, &ctrl('n')), Some(Command::Navigate(ctrl('n'))));
	}

	#[test]
	fn text_modes_forward_typing() {
		for mode in [Mode::Composing, Mode::Editing] {
			assert_eq!(
				command_for(mode, &key(KeyCode::Char('q'))),
				Some(Command::Input(key(KeyCode::Char('q'))))
			);
			assert_eq!(command_for(mode, &ctrl('c')), Some(Command::Quit));
			assert_eq!(command_for(mode, &key(KeyCode::Esc)), Some(Command::Cancel));
			assert_eq!(command_for(mode, &key(KeyCode::Enter)), Some(Command::Confirm));

			let newline = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
			assert_eq!(command_for(mode, &newline), Some(Command::Input(newline)));
		}
	}

	#[test]
	fn viewing_bindings() {
		assert_eq!(command_for(Mode::Viewing, &key(KeyCode::Esc)), Some(Command::Back));
		assert_eq!(command_for(Mode::Viewing, &key(KeyCode::Char('q'))), Some(Command::Back));
		assert_eq!(command_for(Mode::Viewing, &key(KeyCode::Char('d'))), Some(Command::Delete));
		assert_eq!(command_for(Mode::Viewing, &key(KeyCode::Char('e'))), Some(Command::Edit));
		assert_eq!(command_for(Mode::Viewing, &key(KeyCode::Char('x'))), None);
	}

	#[test]
	fn only_presses_are_keys() {
		let press = Event::Key(key(KeyCode::Char('a')));
		assert!(key_press(&press).is_some());

		let mut release = key(KeyCode::Char('a'));
		release.kind = KeyEventKind::Release;
		assert!(key_press(&Event::Key(release)).is_none());
		assert!(key_press(&Event::Resize(10, 10)).is_none());
	}
}
