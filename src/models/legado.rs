// src/models/legado.rs
//
// Normalização de valores vindos do front-end legado. O sistema antigo
// guardava e enviava flags booleanas como texto ("true"/"false"); aqui
// esses valores são convertidos para `bool` uma única vez, na borda.
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Interpreta uma flag legada em texto. Qualquer coisa fora do conjunto
/// afirmativo conta como `false`.
pub fn parse_flag_legado(valor: &str) -> bool {
    matches!(
        valor.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "1" | "sim"
    )
}

/// Deserializer para campos de formulário que o front-end antigo envia
/// como texto ("true", "on", "1") em vez de booleano.
pub fn de_flag_legado<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Valor {
        Booleano(bool),
        Texto(String),
    }

    Ok(match Valor::deserialize(deserializer)? {
        Valor::Booleano(b) => b,
        Valor::Texto(s) => parse_flag_legado(&s),
    })
}

/// Campos de data opcionais chegam como string vazia quando o input
/// do formulário fica em branco.
pub fn de_data_opcional<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let texto = Option::<String>::deserialize(deserializer)?;
    match texto.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

pub fn default_true() -> bool {
    true
}
