/// Dashboard page
///
/// Static landing page: four stat cards with placeholder values. No data
/// is fetched here yet.

/// One stat card
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
}

/// The cards, in render order
pub fn stat_cards() -> [StatCard; 4] {
    [
        StatCard {
            title: "Proyectos Activos",
            value: "0",
        },
        StatCard {
            title: "Tareas Pendientes",
            value: "0",
        },
        StatCard {
            title: "Miembros del equipo",
            value: "0",
        },
        StatCard {
            title: "Tareas completadas",
            value: "0",
        },
    ]
}
