//! Built-in checklist templates, seeded into an empty store on first read.

use crate::entities::{ChecklistItem, ChecklistTemplate};

fn item(id: &str, text: &str, weight: f64) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        text: text.to_string(),
        weight,
    }
}

/// The ISO 9001 and ISO 14001 default templates.
#[must_use]
pub fn default_checklists() -> Vec<ChecklistTemplate> {
    vec![
        ChecklistTemplate {
            name: "ISO 9001 - Default".into(),
            standard: "ISO 9001".into(),
            version: "1.0".into(),
            items: vec![
                item("9001-1", "Existe un proceso documentado de gestión de la calidad", 3.0),
                item("9001-2", "Se realizan revisiones de desempeño periódicas", 2.0),
                item("9001-3", "Se mide la satisfacción del cliente", 2.0),
                item("9001-4", "Los procesos cuentan con indicadores definidos", 3.0),
            ],
        },
        ChecklistTemplate {
            name: "ISO 14001 - Default".into(),
            standard: "ISO 14001".into(),
            version: "1.0".into(),
            items: vec![
                item("14001-1", "Existe política ambiental documentada", 3.0),
                item("14001-2", "Se identifican aspectos e impactos ambientales", 3.0),
                item("14001-3", "Hay controles operacionales para riesgos ambientales", 2.0),
                item("14001-4", "Se registran no conformidades ambientales", 2.0),
            ],
        },
    ]
}
