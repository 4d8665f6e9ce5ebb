pub mod entry_list;
pub mod popup;
pub mod text_input;
pub mod widget;
