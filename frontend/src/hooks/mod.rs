pub mod use_profile_form;
