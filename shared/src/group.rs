use serde::{Deserialize, Serialize};

/// Marker category. One togglable map layer and one menu node per group.
/// Serialized by the exact display string the dataset uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    #[serde(rename = "SAED - SAPD")]
    SaedSapd,
    #[serde(rename = "Zonas de riesgo")]
    ZonasDeRiesgo,
    #[serde(rename = "Inspecciones de seguridad")]
    InspeccionesDeSeguridad,
    #[serde(rename = "Incidentes Abiertos")]
    IncidentesAbiertos,
    #[serde(rename = "Incidentes Cerrados")]
    IncidentesCerrados,
    #[serde(rename = "Casos aislados")]
    CasosAislados,
    #[serde(rename = "Operaciones de rescate")]
    OperacionesDeRescate,
}

/// All groups in menu/layer-control order.
pub const ALL_GROUPS: [Group; 7] = [
    Group::SaedSapd,
    Group::ZonasDeRiesgo,
    Group::InspeccionesDeSeguridad,
    Group::IncidentesAbiertos,
    Group::IncidentesCerrados,
    Group::CasosAislados,
    Group::OperacionesDeRescate,
];

impl Group {
    pub fn label(self) -> &'static str {
        match self {
            Self::SaedSapd => "SAED - SAPD",
            Self::ZonasDeRiesgo => "Zonas de riesgo",
            Self::InspeccionesDeSeguridad => "Inspecciones de seguridad",
            Self::IncidentesAbiertos => "Incidentes Abiertos",
            Self::IncidentesCerrados => "Incidentes Cerrados",
            Self::CasosAislados => "Casos aislados",
            Self::OperacionesDeRescate => "Operaciones de rescate",
        }
    }

    /// Parse a dataset group string. `None` for categories outside the fixed set.
    pub fn from_label(label: &str) -> Option<Self> {
        ALL_GROUPS.into_iter().find(|g| g.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        for group in ALL_GROUPS {
            assert_eq!(Group::from_label(group.label()), Some(group));
        }
        assert_eq!(Group::from_label("Zona desconocida"), None);
    }

    #[test]
    fn serde_uses_display_strings() {
        let json = serde_json::to_string(&Group::ZonasDeRiesgo).unwrap();
        assert_eq!(json, "\"Zonas de riesgo\"");
        let back: Group = serde_json::from_str("\"Casos aislados\"").unwrap();
        assert_eq!(back, Group::CasosAislados);
    }

    #[test]
    fn fixed_order_is_stable() {
        assert_eq!(ALL_GROUPS.len(), 7);
        assert_eq!(ALL_GROUPS[0], Group::SaedSapd);
        assert_eq!(ALL_GROUPS[6], Group::OperacionesDeRescate);
    }
}
