//! The inventory record.

use serde::{Deserialize, Deserializer, Serialize};

/// One car in the inventory, as stored in the backing table.
///
/// Missing or `null` columns decode to the field's zero value and unknown
/// columns are ignored, so a schema change upstream does not turn every read
/// into a decode failure. The encoded form always carries every field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Car {
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub brand: String,
    #[serde(deserialize_with = "nullable")]
    pub year: i32,
    #[serde(deserialize_with = "nullable")]
    pub price: i64,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub images: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub mileage: i64,
    #[serde(deserialize_with = "nullable")]
    pub fuel: String,
    #[serde(deserialize_with = "nullable")]
    pub transmission: String,
    #[serde(deserialize_with = "nullable")]
    pub engine: String,
    #[serde(deserialize_with = "nullable")]
    pub color: String,
    #[serde(deserialize_with = "nullable")]
    pub condition: String,
    #[serde(deserialize_with = "nullable")]
    pub availability: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub features: Vec<String>,
}

fn nullable<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}
