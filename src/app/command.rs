use crossterm::event::KeyEvent;

/// Logical user commands, independent of key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	Quit,
	/// Start composing a new entry
	New,
	/// Open the entry under the list cursor
	Select,
	/// Key forwarded to the entry list (cursor movement)
	Navigate(KeyEvent),
	/// Key forwarded to the text input
	Input(KeyEvent),
	Cancel,
	Confirm,
	Edit,
	Delete,
	Back,
	Resize { width: u16, height: u16 },
}

/// What the event loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
	Continue,
	Quit,
}
