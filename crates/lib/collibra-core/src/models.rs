//! Catalog resources returned by the list tools.
//!
//! Every field is optional and unknown fields are kept in `extra`, so records
//! reach the caller as the catalog sent them. A `null` is treated like an
//! absent field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reference to a related resource by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ResourceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_on: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `{ name }` selection used for attribute types, roles, statuses and tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringAttribute {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NamedRef>,
    #[serde(default)]
    pub string_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanAttribute {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NamedRef>,
    #[serde(default)]
    pub boolean_value: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericAttribute {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NamedRef>,
    #[serde(default)]
    pub numeric_value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateAttribute {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NamedRef>,
    /// Kept raw: the knowledge graph may return a string or epoch millis.
    #[serde(default)]
    pub date_value: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiValueAttribute {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NamedRef>,
    #[serde(default)]
    pub string_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsibleUser {
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsibility {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<NamedRef>,
    #[serde(default)]
    pub user: Option<ResponsibleUser>,
}

/// Asset as selected by the assets-by-type GraphQL query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_attributes: Option<Vec<StringAttribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean_attributes: Option<Vec<BooleanAttribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_attributes: Option<Vec<NumericAttribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_attributes: Option<Vec<DateAttribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_value_attributes: Option<Vec<MultiValueAttribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<Responsibility>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<NamedRef>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn asset_decodes_nested_attributes_and_nulls() {
        let raw = json!({
            "displayName": "Customer Orders",
            "stringAttributes": [{"type": {"name": "Definition"}, "stringValue": null}],
            "numericAttributes": [{"type": {"name": "Row Count"}, "numericValue": 12.5}],
            "booleanAttributes": null,
            "responsibilities": [{"role": {"name": "Owner"}, "user": null}],
            "type": {"name": "Data Set"},
            "status": null,
            "tags": null
        });

        let asset: Asset = serde_json::from_value(raw).expect("asset should decode");

        assert_eq!(asset.display_name.as_deref(), Some("Customer Orders"));
        let strings = asset.string_attributes.as_deref().unwrap_or_default();
        assert_eq!(
            strings[0].kind.as_ref().and_then(|kind| kind.name.as_deref()),
            Some("Definition")
        );
        assert_eq!(strings[0].string_value, None);
        let numbers = asset.numeric_attributes.as_deref().unwrap_or_default();
        assert_eq!(numbers[0].numeric_value, Some(12.5));
        assert_eq!(asset.boolean_attributes, None);
        let responsibilities = asset.responsibilities.as_deref().unwrap_or_default();
        assert_eq!(responsibilities[0].user, None);
        assert_eq!(
            asset.kind.and_then(|kind| kind.name).as_deref(),
            Some("Data Set")
        );
        assert_eq!(asset.status, None);
        assert_eq!(asset.tags, None);
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let raw = json!({
            "id": "a",
            "name": "Data Set",
            "createdBy": "u1",
            "symbolData": {"color": "#ffffff", "symbolType": "ICON_CODE"},
            "parent": {"id": "p", "name": "Asset", "resourceType": "AssetType", "depth": 1}
        });

        let asset_type: AssetType =
            serde_json::from_value(raw.clone()).expect("asset type should decode");
        assert_eq!(asset_type.extra["createdBy"], "u1");

        let value = serde_json::to_value(&asset_type).expect("asset type should serialize");
        assert_eq!(value, raw);
    }

    #[test]
    fn records_without_identity_fields_still_decode() {
        let community: Community =
            serde_json::from_value(json!({"name": "Finance"})).expect("community should decode");
        assert_eq!(community.id, None);
        assert_eq!(community.name.as_deref(), Some("Finance"));

        let asset: Asset =
            serde_json::from_value(json!({"tags": [{"name": "pii"}], "domain": {"name": "Sales"}}))
                .expect("asset should decode");
        assert_eq!(asset.display_name, None);
        assert_eq!(asset.extra["domain"]["name"], "Sales");
    }

    #[test]
    fn asset_type_serializes_camel_case_and_skips_absent_fields() {
        let asset_type = AssetType {
            id: Some("00000000-0000-0000-0000-000000031008".to_string()),
            name: Some("Data Set".to_string()),
            public_id: Some("DataSet".to_string()),
            system: Some(true),
            ..AssetType::default()
        };

        let value = serde_json::to_value(&asset_type).expect("asset type should serialize");
        assert_eq!(
            value,
            json!({
                "id": "00000000-0000-0000-0000-000000031008",
                "name": "Data Set",
                "publicId": "DataSet",
                "system": true
            })
        );
    }
}
