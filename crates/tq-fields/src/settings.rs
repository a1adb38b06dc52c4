//! Function object dictionaries.
//!
//! A dictionary is a YAML mapping. Each function object pulls its typed
//! settings out of it and ignores entries it does not know about (`type`,
//! host scheduling keys, ...).

use crate::error::{FieldsError, FieldsResult};
use serde::{Deserialize, Serialize};
use tq_core::{Real, ensure_positive};
use tq_models::CMU;

/// A function object dictionary.
pub type Dict = serde_yaml::Mapping;

/// Parse a dictionary from YAML text.
pub fn parse_dict(text: &str) -> FieldsResult<Dict> {
    let dict: Dict = serde_yaml::from_str(text)?;
    Ok(dict)
}

/// Read a string entry.
pub fn lookup_str<'a>(dict: &'a Dict, key: &'static str) -> FieldsResult<&'a str> {
    dict.get(key)
        .ok_or(FieldsError::MissingEntry { what: key })?
        .as_str()
        .ok_or_else(|| FieldsError::InvalidSetting {
            what: format!("'{key}' must be a string"),
        })
}

fn default_cmu() -> Real {
    CMU
}

/// Settings of the `turbulenceFields` function object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurbulenceFieldsSettings {
    /// A single field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// A list of field names. Ignored when `field` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// Cmu used to derive omega from k and epsilon.
    #[serde(default = "default_cmu", rename = "Cmu")]
    pub cmu: Real,
}

impl Default for TurbulenceFieldsSettings {
    fn default() -> Self {
        Self {
            field: None,
            fields: None,
            cmu: CMU,
        }
    }
}

impl TurbulenceFieldsSettings {
    pub fn from_dict(dict: &Dict) -> FieldsResult<Self> {
        let settings: Self = serde_yaml::from_value(serde_yaml::Value::Mapping(dict.clone()))?;
        ensure_positive(settings.cmu, "Cmu").map_err(|_| FieldsError::InvalidSetting {
            what: format!("Cmu must be positive and finite, got {}", settings.cmu),
        })?;
        Ok(settings)
    }

    /// Requested names: `field` if present, else the `fields` list.
    pub fn requested_names(&self) -> FieldsResult<Vec<String>> {
        match (&self.field, &self.fields) {
            (Some(field), _) => Ok(vec![field.clone()]),
            (None, Some(fields)) => Ok(fields.clone()),
            (None, None) => Err(FieldsError::MissingEntry { what: "fields" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_field_and_list_are_equivalent() {
        let single = TurbulenceFieldsSettings::from_dict(&parse_dict("field: k").unwrap()).unwrap();
        let list = TurbulenceFieldsSettings::from_dict(&parse_dict("fields: [k]").unwrap()).unwrap();
        assert_eq!(
            single.requested_names().unwrap(),
            list.requested_names().unwrap()
        );
    }

    #[test]
    fn field_takes_precedence_over_fields() {
        let dict = parse_dict("field: R\nfields: [k, epsilon]").unwrap();
        let settings = TurbulenceFieldsSettings::from_dict(&dict).unwrap();
        assert_eq!(settings.requested_names().unwrap(), vec!["R".to_string()]);
    }

    #[test]
    fn missing_selection_is_an_error() {
        let dict = parse_dict("type: turbulenceFields").unwrap();
        let settings = TurbulenceFieldsSettings::from_dict(&dict).unwrap();
        let err = settings.requested_names().unwrap_err();
        assert!(matches!(err, FieldsError::MissingEntry { what: "fields" }));
    }

    #[test]
    fn cmu_defaults_and_validates() {
        let dict = parse_dict("fields: [omega]").unwrap();
        assert_eq!(TurbulenceFieldsSettings::from_dict(&dict).unwrap().cmu, 0.09);

        let dict = parse_dict("fields: [omega]\nCmu: 0.1").unwrap();
        assert_eq!(TurbulenceFieldsSettings::from_dict(&dict).unwrap().cmu, 0.1);

        for bad in ["-1", "0", ".nan", ".inf"] {
            let dict = parse_dict(&format!("fields: [omega]\nCmu: {bad}")).unwrap();
            assert!(matches!(
                TurbulenceFieldsSettings::from_dict(&dict),
                Err(FieldsError::InvalidSetting { .. })
            ));
        }
    }

    #[test]
    fn lookup_str_reports_missing_and_mistyped_entries() {
        let dict = parse_dict("type: 3").unwrap();
        assert!(matches!(
            lookup_str(&dict, "type"),
            Err(FieldsError::InvalidSetting { .. })
        ));
        assert!(matches!(
            lookup_str(&dict, "name"),
            Err(FieldsError::MissingEntry { what: "name" })
        ));
    }
}
