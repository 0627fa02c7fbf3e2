pub mod header;
pub mod judge_form;
pub mod result_panel;
pub mod share_button;
pub mod footer;
