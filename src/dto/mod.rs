pub mod arreglada_dto;
pub mod auth_dto;
pub mod common_dto;
pub mod equipo_dto;
pub mod orden_dto;
pub mod repuesto_dto;
