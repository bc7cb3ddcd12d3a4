pub mod edit_lang_dto;
pub mod form_update_dto;
pub mod lang_query_dto;
