pub mod display_submitted_data;
pub mod error_message;
pub mod tech_stack_list;
pub mod toast;
pub mod user_form;
