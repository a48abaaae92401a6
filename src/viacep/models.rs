use serde::{Deserialize, Deserializer, Serialize};
use serde::de::Error as _;
use serde_json::Value;

/// Address as returned by ViaCEP, field for field.
///
/// Missing or null fields fall back to empty strings, numbers and booleans
/// are kept as their text. For unknown codes ViaCEP answers
/// `{"erro": true}`, which is kept untouched in `erro`.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressResult {
    #[serde(deserialize_with = "lenient_string")]
    pub cep: String,
    #[serde(deserialize_with = "lenient_string")]
    pub logradouro: String,
    #[serde(deserialize_with = "lenient_string")]
    pub complemento: String,
    #[serde(deserialize_with = "lenient_string")]
    pub unidade: String,
    #[serde(deserialize_with = "lenient_string")]
    pub bairro: String,
    #[serde(deserialize_with = "lenient_string")]
    pub localidade: String,
    #[serde(deserialize_with = "lenient_string")]
    pub uf: String,
    #[serde(deserialize_with = "lenient_string")]
    pub estado: String,
    #[serde(deserialize_with = "lenient_string")]
    pub regiao: String,
    #[serde(deserialize_with = "lenient_string")]
    pub ibge: String,
    #[serde(deserialize_with = "lenient_string")]
    pub gia: String,
    #[serde(deserialize_with = "lenient_string")]
    pub ddd: String,
    #[serde(deserialize_with = "lenient_string")]
    pub siafi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erro: Option<Value>
}

impl AddressResult {
    /// Decodes an upstream body. Only a JSON object is accepted, the derived
    /// impl alone would also fill the fields from an array by position.
    pub fn from_slice(bytes: &[u8]) -> Result<AddressResult, serde_json::Error> {
        let value: Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom(
                format!("expected a JSON object, got {}", value)
            ));
        }
        serde_json::from_value(value)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(D::Error::custom(
            format!("expected a string, got {}", other)
        )),
    }
}
