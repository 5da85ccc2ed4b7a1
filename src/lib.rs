//! Backend de gestión de mantenimiento de flota
//!
//! Choferes reportan fallas de equipos; mecánicos y administradores gestionan
//! órdenes de trabajo, inventario de repuestos y disponibilidad de equipos.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
