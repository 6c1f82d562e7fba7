pub mod flow_dto;
pub mod session_dto;
