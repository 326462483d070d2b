// ============================================================================
// MARKETPLACE PWA - Catálogo de productos en Rust/WASM
// ============================================================================
// - Views: pantallas completas montadas por el router
// - Components: piezas de UI reutilizables
// - Hooks: puentes entre los stores y los componentes Yew
// - State: stores reactivos compartidos (sesión y listados)
// - Services: SOLO comunicación API
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;
