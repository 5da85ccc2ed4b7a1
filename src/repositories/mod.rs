pub mod arreglada_repository;
pub mod equipo_repository;
pub mod orden_repository;
pub mod repuesto_repository;
pub mod user_repository;
