/// Badge label translation
///
/// Pure lookup from wire enum values (status, priority, role) to the Spanish
/// display strings the interface shows. Unknown values pass through
/// unchanged so a new server-side value renders as itself instead of
/// breaking the view.

/// Translates a status/priority/role wire value to its display label
pub fn badge_label(value: &str) -> &str {
    match value {
        // Task status
        "new" => "Nuevo",
        "pending" => "Pendiente",
        "in_progress" => "En progreso",
        "completed" => "Completado",
        "in_review" => "En revisión",
        "done" => "Finalizado",
        // Task priority
        "low" => "Bajo",
        "medium" => "Medio",
        "high" => "Alto",
        "critical" => "Crítico",
        // User role
        "user" => "Usuario",
        "admin" => "Administrador",
        "maintainer" => "Mantenedor",
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(badge_label("new"), "Nuevo");
        assert_eq!(badge_label("in_progress"), "En progreso");
        assert_eq!(badge_label("done"), "Finalizado");
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(badge_label("high"), "Alto");
        assert_eq!(badge_label("critical"), "Crítico");
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(badge_label("admin"), "Administrador");
        assert_eq!(badge_label("maintainer"), "Mantenedor");
    }

    #[test]
    fn test_unknown_value_passes_through() {
        assert_eq!(badge_label("archived"), "archived");
    }
}
