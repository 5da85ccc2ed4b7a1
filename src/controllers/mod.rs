pub mod arreglada_controller;
pub mod auth_controller;
pub mod equipo_controller;
pub mod orden_controller;
pub mod repuesto_controller;
