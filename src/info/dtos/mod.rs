pub mod get_info_dto;
