pub mod alert;
pub mod button;
pub mod confirm_dialog;
pub mod member_row;
pub mod text_input;
