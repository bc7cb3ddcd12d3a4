pub mod form_options;
pub mod prompt_form;
pub mod prompt_output;
