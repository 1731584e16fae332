//! Cell snapshot passed to painters
//!
//! The host grid builds a fresh `CellData` for every render and discards it
//! afterwards. Field names follow the host's JavaScript objects
//! (`isDisabled`, `columnModel.editOption.list`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value::display_string;
use crate::error::PainterError;

/// One selectable choice of an enumerated column
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OptionItem {
    /// Stored value; numbers and strings are both accepted
    pub value: Value,

    /// Label shown to the user
    pub text: String,
}

impl OptionItem {
    pub fn new(value: impl Into<Value>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }

    /// Whether this option's value has the given string form
    pub fn matches(&self, value: &str) -> bool {
        display_string(&self.value) == value
    }
}

/// Edit configuration of a column
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ColumnEditOption {
    /// Edit type name (`select`, `text`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub edit_type: Option<String>,

    /// Enumerated choices, in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<OptionItem>>,
}

/// The part of the column model a painter reads
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnModel {
    #[serde(default)]
    pub column_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_option: Option<ColumnEditOption>,
}

impl ColumnModel {
    /// Column with a `select` edit option over the given choices
    pub fn select(column_name: impl Into<String>, list: Vec<OptionItem>) -> Self {
        Self {
            column_name: column_name.into(),
            edit_option: Some(ColumnEditOption {
                edit_type: Some("select".to_string()),
                list: Some(list),
            }),
        }
    }
}

/// Read-only snapshot of one cell for one render
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    /// Current value; absent and `undefined` values read as null and match as `"null"`
    #[serde(default)]
    pub value: Value,

    #[serde(default)]
    pub is_disabled: bool,

    pub column_model: ColumnModel,
}

impl CellData {
    pub fn new(value: impl Into<Value>, column_model: ColumnModel) -> Self {
        Self {
            value: value.into(),
            is_disabled: false,
            column_model,
        }
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    /// String form of the cell value, as used for option matching
    pub fn value_string(&self) -> String {
        display_string(&self.value)
    }

    /// Option list of the column, or a configuration error if it is missing
    pub fn options(&self) -> Result<&[OptionItem], PainterError> {
        self.column_model
            .edit_option
            .as_ref()
            .and_then(|edit_option| edit_option.list.as_deref())
            .ok_or_else(|| PainterError::MissingOptionList {
                column: self.column_model.column_name.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_host_shape() {
        let data: CellData = serde_json::from_value(json!({
            "value": 2,
            "isDisabled": true,
            "columnModel": {
                "columnName": "priority",
                "editOption": {
                    "type": "select",
                    "list": [
                        {"value": 1, "text": "Low"},
                        {"value": "2", "text": "High"}
                    ]
                }
            }
        }))
        .unwrap();

        assert!(data.is_disabled);
        assert_eq!(data.value_string(), "2");
        let options = data.options().unwrap();
        assert_eq!(options.len(), 2);
        assert!(options[1].matches("2"));
    }

    #[test]
    fn test_missing_value_reads_as_null() {
        let data: CellData = serde_json::from_value(json!({
            "columnModel": {"columnName": "c"}
        }))
        .unwrap();

        assert_eq!(data.value, Value::Null);
        assert_eq!(data.value_string(), "null");
        assert!(!data.is_disabled);

        let explicit: CellData = serde_json::from_value(json!({
            "value": null,
            "columnModel": {"columnName": "c"}
        }))
        .unwrap();
        assert_eq!(explicit.value_string(), data.value_string());
    }

    #[test]
    fn test_missing_list_is_config_error() {
        let data = CellData::new("1", ColumnModel {
            column_name: "status".to_string(),
            edit_option: Some(ColumnEditOption::default()),
        });

        assert_eq!(
            data.options(),
            Err(PainterError::MissingOptionList { column: "status".to_string() })
        );
    }

    #[test]
    fn test_option_matches_across_types() {
        let item = OptionItem::new(3, "Three");
        assert!(item.matches("3"));
        assert!(!item.matches("03"));
    }
}
