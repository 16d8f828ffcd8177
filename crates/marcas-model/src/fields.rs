//! Canonical field set and the header synonym catalog.
//!
//! The catalog is plain data: an ordered list of synonym strings per
//! canonical field. The built-in table covers the Spanish headers seen in
//! real attendance sheets; alternate catalogs (other locales, client-specific
//! headers) can be loaded from JSON without touching the matching logic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fixed set of worker attributes the pipeline extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    /// National identifier (RUT).
    Rut,
    /// Check character when it arrives in its own column.
    Dv,
    /// Worker full name.
    Nombre,
    /// Trade or specialty.
    Especialidad,
    /// Contract type.
    Contrato,
    /// Direct supervisor.
    Supervisor,
    /// Employer's national identifier.
    RutEmpleador,
}

impl CanonicalField {
    /// All canonical fields in declaration order.
    pub const ALL: [CanonicalField; 7] = [
        CanonicalField::Rut,
        CanonicalField::Dv,
        CanonicalField::Nombre,
        CanonicalField::Especialidad,
        CanonicalField::Contrato,
        CanonicalField::Supervisor,
        CanonicalField::RutEmpleador,
    ];

    /// The published schema label for this field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CanonicalField::Rut => "rut",
            CanonicalField::Dv => "dv",
            CanonicalField::Nombre => "nombre",
            CanonicalField::Especialidad => "especialidad",
            CanonicalField::Contrato => "contrato",
            CanonicalField::Supervisor => "supervisor",
            CanonicalField::RutEmpleador => "rut_empleador",
        }
    }
}

/// Ordered synonym lists per canonical field.
///
/// Synonym order is a priority order: the header mapper takes the first
/// synonym that matches an actual column and stops there.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCatalog {
    synonyms: BTreeMap<CanonicalField, Vec<String>>,
}

impl FieldCatalog {
    /// Build a catalog from explicit synonym lists.
    #[must_use]
    pub fn new(synonyms: BTreeMap<CanonicalField, Vec<String>>) -> Self {
        Self { synonyms }
    }

    /// Synonyms for one field, in priority order. Empty when the catalog
    /// does not cover the field.
    #[must_use]
    pub fn synonyms(&self, field: CanonicalField) -> &[String] {
        self.synonyms.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Iterate `(field, synonyms)` pairs for every canonical field the
    /// catalog covers.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &[String])> {
        CanonicalField::ALL
            .iter()
            .filter_map(|field| Some((*field, self.synonyms.get(field)?.as_slice())))
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        let mut synonyms = BTreeMap::new();
        let mut insert = |field: CanonicalField, values: &[&str]| {
            synonyms.insert(field, values.iter().map(|v| (*v).to_string()).collect());
        };
        insert(
            CanonicalField::Rut,
            &[
                "rut",
                "run",
                "r.u.t",
                "r.u.n",
                "documento",
                "doc",
                "id",
                "dni",
                "rut trabajador",
                "run trabajador",
                "cod. pers",
                "cod pers",
                "codigo persona",
                "codigo trabajador",
            ],
        );
        insert(
            CanonicalField::Dv,
            &["dv", "digito verificador", "d.v", "digito", "dígito"],
        );
        insert(
            CanonicalField::Nombre,
            &[
                "nombre",
                "nombres",
                "trabajador",
                "colaborador",
                "empleado",
                "persona",
                "nombre trabajador",
            ],
        );
        insert(
            CanonicalField::Especialidad,
            &[
                "especialidad",
                "especialización",
                "especialidad laboral",
                "oficio",
                "perfil",
                "cargo",
                "puesto",
                "ocupacion",
                "ocupación",
            ],
        );
        insert(
            CanonicalField::Contrato,
            &[
                "contrato",
                "tipo contrato",
                "tipocontrato",
                "modalidad",
                "tipo de contrato",
                "relacion laboral",
                "relación laboral",
            ],
        );
        insert(
            CanonicalField::Supervisor,
            &[
                "supervisor",
                "jefe directo",
                "jefe",
                "encargado",
                "capataz",
                "mandante supervisor",
                "line manager",
            ],
        );
        insert(
            CanonicalField::RutEmpleador,
            &[
                "rut empleador",
                "rut empresa",
                "rut contratista",
                "rut contratante",
                "rut razon social",
                "rut razón social",
                "rut de la empresa",
                "rut del empleador",
            ],
        );
        Self { synonyms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_covers_every_field() {
        let catalog = FieldCatalog::default();
        for field in CanonicalField::ALL {
            assert!(
                !catalog.synonyms(field).is_empty(),
                "no synonyms for {field:?}"
            );
        }
    }

    #[test]
    fn first_synonym_is_the_canonical_label() {
        let catalog = FieldCatalog::default();
        assert_eq!(catalog.synonyms(CanonicalField::Rut)[0], "rut");
        assert_eq!(catalog.synonyms(CanonicalField::Nombre)[0], "nombre");
    }
}
