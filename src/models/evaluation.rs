use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

/// Date format used by `data_avaliacao` and `data_venda`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_HINT: &str = "AAAA-MM-DD";

/// One used-car evaluation (avaliação), keyed by the `avaliacoes` table columns.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct EvaluationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    // Cliente
    #[serde(default)]
    pub data_avaliacao: String,
    #[serde(default)]
    pub cliente_nome: String,
    #[serde(default)]
    pub cliente_celular: Option<String>,
    #[serde(default)]
    pub cliente_endereco: Option<String>,
    #[serde(default)]
    pub cliente_cidade: Option<String>,
    /// Por onde veio: Instagram, Google, Indicação, Outros
    #[serde(default)]
    pub cliente_origem: Option<String>,

    // Veículo
    #[serde(default)]
    pub veiculo_modelo: String,
    #[serde(default)]
    pub veiculo_ano: Option<String>,
    #[serde(default)]
    pub veiculo_versao: Option<String>,
    #[serde(default)]
    pub veiculo_motor: Option<String>,
    #[serde(default)]
    pub veiculo_placa: Option<String>,
    #[serde(default)]
    pub veiculo_km: Option<String>,
    #[serde(default)]
    pub veiculo_fipe: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub veiculo_manual: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub veiculo_chave_copia: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub veiculo_sinistro: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub veiculo_leilao: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub veiculo_batido: bool,
    #[serde(default)]
    pub veiculo_obs: Option<String>,

    // Documentação
    #[serde(default)]
    pub doc_nome_proprietario: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub doc_financiamento: bool,
    #[serde(default)]
    pub doc_valor_quitacao: Option<String>,
    #[serde(default)]
    pub doc_debitos_detran: Option<String>,
    #[serde(default)]
    pub doc_historico_km: Option<String>,

    // Avaliação
    #[serde(default)]
    pub aval_lataria: Option<String>,
    #[serde(default)]
    pub aval_motor: Option<String>,
    #[serde(default)]
    pub aval_suspensao: Option<String>,
    #[serde(default)]
    pub aval_luzes_painel: Option<String>,
    #[serde(default)]
    pub aval_parabrisa: Option<String>,
    #[serde(default)]
    pub aval_ar_condicionado: Option<String>,
    #[serde(default)]
    pub aval_pneus: Option<String>,
    #[serde(default)]
    pub aval_interna: Option<String>,

    #[serde(default)]
    pub avaliador_nome: String,

    // Venda
    #[serde(default, deserialize_with = "null_as_default")]
    pub vendido: bool,
    #[serde(default)]
    pub data_venda: Option<String>,
    #[serde(default)]
    pub valor_venda: Option<String>,

    /// Photo URLs in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub fotos: Vec<String>,
    /// Damaged region ids from the damage map; order is not significant.
    #[serde(default, deserialize_with = "null_as_default")]
    pub danos_mapeados: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Returns the value only when it holds something other than whitespace.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl EvaluationRecord {
    /// Creates a record with only the required fields filled in.
    pub fn new(
        data_avaliacao: impl Into<String>,
        cliente_nome: impl Into<String>,
        veiculo_modelo: impl Into<String>,
        avaliador_nome: impl Into<String>,
    ) -> Self {
        Self {
            data_avaliacao: data_avaliacao.into(),
            cliente_nome: cliente_nome.into(),
            veiculo_modelo: veiculo_modelo.into(),
            avaliador_nome: avaliador_nome.into(),
            ..Default::default()
        }
    }

    /// Names of the required fields that are blank.
    pub fn missing_required_fields(&self) -> Vec<String> {
        [
            ("data_avaliacao", &self.data_avaliacao),
            ("cliente_nome", &self.cliente_nome),
            ("veiculo_modelo", &self.veiculo_modelo),
            ("avaliador_nome", &self.avaliador_nome),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect()
    }

    /// Checks the required fields and the format of both dates. Every problem
    /// is reported, not just the first.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut invalid = self.missing_required_fields();
        if !self.data_avaliacao.trim().is_empty() && !is_valid_date(&self.data_avaliacao) {
            invalid.push(format!("data_avaliacao ({})", DATE_HINT));
        }
        if let Some(data_venda) = non_empty(&self.data_venda) {
            if !is_valid_date(data_venda) {
                invalid.push(format!("data_venda ({})", DATE_HINT));
            }
        }
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(invalid))
        }
    }

    /// Parsed evaluation date, `None` when the stored text is not `YYYY-MM-DD`.
    pub fn evaluation_date(&self) -> Option<NaiveDate> {
        parse_date(&self.data_avaliacao)
    }

    /// Sale date and amount, hidden unless the vehicle is marked as sold.
    pub fn sale_details(&self) -> Option<(Option<&str>, Option<&str>)> {
        self.vendido
            .then(|| (non_empty(&self.data_venda), non_empty(&self.valor_venda)))
    }
}

/// Accepts plain dates and the date prefix of RFC 3339 timestamps.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// Strict check for stored dates: a full `YYYY-MM-DD` value or an RFC 3339
/// timestamp.
pub fn is_valid_date(value: &str) -> bool {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendido: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_venda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_venda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub veiculo_obs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fotos: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub danos_mapeados: Option<Vec<String>>,
}

impl EvaluationPatch {
    pub fn sale(vendido: bool, data_venda: Option<String>, valor_venda: Option<String>) -> Self {
        Self {
            vendido: Some(vendido),
            data_venda,
            valor_venda,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Rejects a sale date that is neither blank nor a valid date.
    pub fn validate(&self) -> Result<(), AppError> {
        match non_empty(&self.data_venda) {
            Some(value) if !is_valid_date(value) => Err(AppError::InvalidInput(format!(
                "data_venda inválida: {} ({})",
                value, DATE_HINT
            ))),
            _ => Ok(()),
        }
    }

    pub fn apply_to(&self, record: &mut EvaluationRecord) {
        if let Some(vendido) = self.vendido {
            record.vendido = vendido;
        }
        if let Some(data_venda) = &self.data_venda {
            record.data_venda = Some(data_venda.clone());
        }
        if let Some(valor_venda) = &self.valor_venda {
            record.valor_venda = Some(valor_venda.clone());
        }
        if let Some(obs) = &self.veiculo_obs {
            record.veiculo_obs = Some(obs.clone());
        }
        if let Some(fotos) = &self.fotos {
            record.fotos = fotos.clone();
        }
        if let Some(danos) = &self.danos_mapeados {
            record.danos_mapeados = danos.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_accept_complete_record() {
        let record = EvaluationRecord::new("2024-03-10", "Maria", "Onix", "Carlos");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_missing_required_fields_are_all_reported() {
        let record = EvaluationRecord {
            cliente_nome: "  ".to_string(),
            veiculo_modelo: "Gol".to_string(),
            ..Default::default()
        };
        match record.validate() {
            Err(AppError::Validation(fields)) => assert_eq!(
                fields,
                vec!["data_avaliacao", "cliente_nome", "avaliador_nome"]
            ),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_dates_are_reported() {
        let mut record = EvaluationRecord::new("15/01/2024", "Maria", "Onix", "Carlos");
        record.data_venda = Some("ontem".to_string());
        match record.validate() {
            Err(AppError::Validation(fields)) => assert_eq!(
                fields,
                vec!["data_avaliacao (AAAA-MM-DD)", "data_venda (AAAA-MM-DD)"]
            ),
            other => panic!("unexpected result: {:?}", other),
        }

        record.data_avaliacao = "2024-01-15T09:30:00-03:00".to_string();
        record.data_venda = Some("  ".to_string());
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_is_valid_date_is_strict() {
        assert!(is_valid_date("2024-02-29"));
        assert!(is_valid_date(" 2024-03-10 "));
        assert!(is_valid_date("2024-03-10T12:00:00Z"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2024-03-10garbage"));
        assert!(!is_valid_date("10/03/2024"));
    }

    #[test]
    fn test_patch_rejects_bad_sale_date() {
        let bad = EvaluationPatch::sale(true, Some("amanhã".to_string()), None);
        assert!(matches!(bad.validate(), Err(AppError::InvalidInput(_))));

        assert!(EvaluationPatch::sale(true, Some(String::new()), None)
            .validate()
            .is_ok());
        assert!(EvaluationPatch::sale(true, Some("2024-05-01".to_string()), None)
            .validate()
            .is_ok());
        assert!(EvaluationPatch::sale(false, None, None).validate().is_ok());
    }

    #[test]
    fn test_sale_details_hidden_when_not_sold() {
        let mut record = EvaluationRecord::new("2024-03-10", "Maria", "Onix", "Carlos");
        record.data_venda = Some("2024-04-01".to_string());
        record.valor_venda = Some("R$ 50.000".to_string());
        assert_eq!(record.sale_details(), None);

        record.vendido = true;
        assert_eq!(
            record.sale_details(),
            Some((Some("2024-04-01"), Some("R$ 50.000")))
        );
    }

    #[test]
    fn test_deserialize_tolerates_nulls_and_missing_fields() {
        let json = r#"{
            "id": "1700000000000",
            "data_avaliacao": "2024-03-10",
            "cliente_nome": "Maria",
            "veiculo_modelo": "Onix",
            "avaliador_nome": "Carlos",
            "veiculo_manual": null,
            "fotos": null,
            "cliente_celular": ""
        }"#;
        let record: EvaluationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_deref(), Some("1700000000000"));
        assert!(!record.veiculo_manual);
        assert!(record.fotos.is_empty());
        assert!(record.danos_mapeados.is_empty());
        assert_eq!(non_empty(&record.cliente_celular), None);
    }

    #[test]
    fn test_serialize_skips_unassigned_identity() {
        let record = EvaluationRecord::new("2024-03-10", "Maria", "Onix", "Carlos");
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("created_at").is_none());
        assert_eq!(value["cliente_nome"], "Maria");
    }

    #[test]
    fn test_parse_date_accepts_timestamp_prefix() {
        assert_eq!(
            parse_date("2024-03-10T12:00:00Z"),
            NaiveDate::from_ymd_opt(2024, 3, 10)
        );
        assert_eq!(parse_date("10/03/2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut record = EvaluationRecord::new("2024-03-10", "Maria", "Onix", "Carlos");
        record.fotos = vec!["https://cdn/a.jpg".to_string()];
        let patch = EvaluationPatch::sale(true, Some("2024-05-01".to_string()), None);
        assert!(!patch.is_empty());
        patch.apply_to(&mut record);
        assert!(record.vendido);
        assert_eq!(record.data_venda.as_deref(), Some("2024-05-01"));
        assert_eq!(record.valor_venda, None);
        assert_eq!(record.fotos.len(), 1);
        assert!(EvaluationPatch::default().is_empty());
    }
}
