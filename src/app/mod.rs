//! View state machine: the four modes, the commands that move between them and the store
//! calls each transition performs.

pub mod command;
pub mod keymap;
pub mod state;

pub use command::Command;
pub use command::Signal;
pub use state::Mode;
pub use state::ViewState;
pub use state::Viewport;
