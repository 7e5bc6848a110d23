/// Proyectos page
///
/// Placeholder route: the projects module is not built yet.

pub const TITLE: &str = "Proyectos";
pub const PLACEHOLDER: &str = "Módulo en desarrollo 🧑‍💻🧑‍💻.";
