//! Printable evaluation sheet and list-card summaries.

use std::fmt::Write as _;

use crate::damage_map::region_name;
use crate::models::{non_empty, parse_date, EvaluationRecord};

pub const NOT_AVAILABLE: &str = "N/A";
pub const SOLD_BANNER: &str = "VEÍCULO VENDIDO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub banner: Option<&'static str>,
    pub fields: Vec<Field>,
}

impl Section {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            banner: None,
            fields: Vec::new(),
        }
    }

    fn push(&mut self, label: &'static str, value: impl Into<String>) {
        self.fields.push(Field {
            label,
            value: value.into(),
        });
    }

    fn push_optional(&mut self, label: &'static str, value: &Option<String>) {
        self.push(label, or_na(value));
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

fn or_na(value: &Option<String>) -> String {
    non_empty(value).unwrap_or(NOT_AVAILABLE).to_string()
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Sim"
    } else {
        "Não"
    }
}

/// `YYYY-MM-DD` to `DD/MM/YYYY`; unparseable text is shown as stored.
pub fn format_date(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

const ASSESSMENT_LABELS: [&str; 8] = [
    "Lataria em Geral",
    "Motor/Barulhos/Funcionamento",
    "Suspensão/Embreagem",
    "Luzes Acesas no Painel",
    "Parabrisa e Vidros",
    "Ar Condicionado",
    "Pneus",
    "Parte Interna",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationSheet {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: Vec<Section>,
}

impl EvaluationSheet {
    pub fn from_record(record: &EvaluationRecord) -> Self {
        let mut sections = Vec::new();

        let mut client = Section::new("DADOS DO CLIENTE");
        client.push("Data", format_date(&record.data_avaliacao));
        client.push("Cliente", record.cliente_nome.clone());
        client.push_optional("Celular", &record.cliente_celular);
        client.push_optional("Cidade", &record.cliente_cidade);
        client.push_optional("Por onde veio", &record.cliente_origem);
        client.push_optional("Endereço", &record.cliente_endereco);
        sections.push(client);

        let mut vehicle = Section::new("DADOS DO VEÍCULO");
        vehicle.push("Modelo", record.veiculo_modelo.clone());
        vehicle.push_optional("Ano", &record.veiculo_ano);
        vehicle.push_optional("Versão", &record.veiculo_versao);
        vehicle.push_optional("Motor", &record.veiculo_motor);
        vehicle.push_optional("Placa", &record.veiculo_placa);
        vehicle.push_optional("KM", &record.veiculo_km);
        vehicle.push_optional("FIPE", &record.veiculo_fipe);
        vehicle.push("Manual", yes_no(record.veiculo_manual));
        vehicle.push("Chave Cópia", yes_no(record.veiculo_chave_copia));
        vehicle.push("Sinistro", yes_no(record.veiculo_sinistro));
        vehicle.push("Leilão", yes_no(record.veiculo_leilao));
        vehicle.push("Batido", yes_no(record.veiculo_batido));
        if let Some(obs) = non_empty(&record.veiculo_obs) {
            vehicle.push("Observações", obs);
        }
        sections.push(vehicle);

        let mut docs = Section::new("DOCUMENTAÇÃO");
        docs.push_optional("Em Nome de", &record.doc_nome_proprietario);
        docs.push("Financiamento", yes_no(record.doc_financiamento));
        docs.push_optional("Valor Quitação", &record.doc_valor_quitacao);
        docs.push_optional("Débitos DETRAN", &record.doc_debitos_detran);
        docs.push_optional("Histórico KM", &record.doc_historico_km);
        sections.push(docs);

        let mut assessment = Section::new("AVALIAÇÃO");
        let narratives = [
            &record.aval_lataria,
            &record.aval_motor,
            &record.aval_suspensao,
            &record.aval_luzes_painel,
            &record.aval_parabrisa,
            &record.aval_ar_condicionado,
            &record.aval_pneus,
            &record.aval_interna,
        ];
        for (label, value) in ASSESSMENT_LABELS.into_iter().zip(narratives) {
            if let Some(text) = non_empty(value) {
                assessment.push(label, text);
            }
        }
        sections.push(assessment);

        let mut evaluator = Section::new("AVALIADOR");
        evaluator.push("Avaliador", record.avaliador_nome.clone());
        sections.push(evaluator);

        if let Some((date, amount)) = record.sale_details() {
            let mut sale = Section::new("STATUS DE VENDA");
            sale.banner = Some(SOLD_BANNER);
            if let Some(date) = date {
                sale.push("Data da Venda", format_date(date));
            }
            if let Some(amount) = amount {
                sale.push("Valor da Venda", amount);
            }
            sections.push(sale);
        }

        if !record.danos_mapeados.is_empty() {
            let mut damages = Section::new("MAPA DE DANOS");
            for id in &record.danos_mapeados {
                damages.push("Dano", region_name(id));
            }
            sections.push(damages);
        }

        if !record.fotos.is_empty() {
            let mut photos = Section::new("FOTOS");
            for url in &record.fotos {
                photos.push("Foto", url.clone());
            }
            sections.push(photos);
        }

        Self {
            title: "AVALIAÇÃO TÉCNICA",
            subtitle: "THE CAR",
            sections,
        }
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn is_sold(&self) -> bool {
        self.section("STATUS DE VENDA")
            .is_some_and(|s| s.banner == Some(SOLD_BANNER))
    }

    /// Plain-text print layout.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", self.subtitle);
        for section in &self.sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", section.title);
            let _ = writeln!(out, "{}", "-".repeat(section.title.chars().count()));
            if let Some(banner) = section.banner {
                let _ = writeln!(out, "{}", banner);
            }
            match section.title {
                "FOTOS" => {
                    for (index, field) in section.fields.iter().enumerate() {
                        let _ = writeln!(out, "Foto {}: {}", index + 1, field.value);
                    }
                    let _ = writeln!(out, "{} foto(s) anexada(s)", section.fields.len());
                }
                "MAPA DE DANOS" => {
                    for field in &section.fields {
                        let _ = writeln!(out, "- {}", field.value);
                    }
                }
                _ => {
                    for field in &section.fields {
                        let _ = writeln!(out, "{}: {}", field.label, field.value);
                    }
                }
            }
        }
        out
    }
}

/// One card on the evaluations list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: Option<String>,
    pub model: String,
    pub trim_and_year: String,
    pub sold: bool,
    pub client: String,
    pub origin: String,
    pub plate: String,
    pub km: String,
    pub date: String,
    pub sold_on: Option<String>,
    pub sale_value: Option<String>,
    pub evaluator: String,
}

impl ListEntry {
    pub fn from_record(record: &EvaluationRecord) -> Self {
        let (sold_on, sale_value) = match record.sale_details() {
            Some((date, amount)) => (date.map(format_date), amount.map(str::to_string)),
            None => (None, None),
        };
        Self {
            id: record.id.clone(),
            model: record.veiculo_modelo.clone(),
            trim_and_year: format!(
                "{} - {}",
                non_empty(&record.veiculo_versao).unwrap_or_default(),
                non_empty(&record.veiculo_ano).unwrap_or_default()
            ),
            sold: record.vendido,
            client: record.cliente_nome.clone(),
            origin: or_na(&record.cliente_origem),
            plate: or_na(&record.veiculo_placa),
            km: or_na(&record.veiculo_km),
            date: format_date(&record.data_avaliacao),
            sold_on,
            sale_value,
            evaluator: record.avaliador_nome.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> EvaluationRecord {
        EvaluationRecord::new("2024-03-10", "Maria", "Onix", "Carlos")
    }

    #[test]
    fn test_unset_optionals_render_na() {
        let sheet = EvaluationSheet::from_record(&minimal());
        let client = sheet.section("DADOS DO CLIENTE").unwrap();
        assert_eq!(client.field("Data"), Some("10/03/2024"));
        for label in ["Celular", "Cidade", "Por onde veio", "Endereço"] {
            assert_eq!(client.field(label), Some(NOT_AVAILABLE), "{}", label);
        }
        let vehicle = sheet.section("DADOS DO VEÍCULO").unwrap();
        assert_eq!(vehicle.field("Placa"), Some(NOT_AVAILABLE));
        assert_eq!(vehicle.field("Manual"), Some("Não"));
        assert_eq!(vehicle.field("Observações"), None);
    }

    #[test]
    fn test_only_filled_assessments_are_listed() {
        let mut record = minimal();
        record.aval_motor = Some("Sem ruídos".to_string());
        record.aval_pneus = Some("   ".to_string());
        let sheet = EvaluationSheet::from_record(&record);
        let assessment = sheet.section("AVALIAÇÃO").unwrap();
        assert_eq!(assessment.fields.len(), 1);
        assert_eq!(
            assessment.field("Motor/Barulhos/Funcionamento"),
            Some("Sem ruídos")
        );
    }

    #[test]
    fn test_sale_section_follows_sold_flag() {
        let mut record = minimal();
        record.data_venda = Some("2024-04-02".to_string());
        assert!(!EvaluationSheet::from_record(&record).is_sold());

        record.vendido = true;
        let sheet = EvaluationSheet::from_record(&record);
        assert!(sheet.is_sold());
        let sale = sheet.section("STATUS DE VENDA").unwrap();
        assert_eq!(sale.field("Data da Venda"), Some("02/04/2024"));
        assert_eq!(sale.field("Valor da Venda"), None);
    }

    #[test]
    fn test_damages_use_region_names() {
        let mut record = minimal();
        record.danos_mapeados = vec!["capo".to_string(), "antena".to_string()];
        let text = EvaluationSheet::from_record(&record).render_text();
        assert!(text.contains("MAPA DE DANOS"));
        assert!(text.contains("- Capô"));
        assert!(text.contains("- antena"));
    }

    #[test]
    fn test_render_text_counts_photos() {
        let mut record = minimal();
        record.fotos = vec!["https://cdn/a.jpg".to_string(), "https://cdn/b.jpg".to_string()];
        let text = EvaluationSheet::from_record(&record).render_text();
        assert!(text.starts_with("AVALIAÇÃO TÉCNICA\nTHE CAR\n"));
        assert!(text.contains("Foto 2: https://cdn/b.jpg"));
        assert!(text.contains("2 foto(s) anexada(s)"));
    }

    #[test]
    fn test_list_entry() {
        let mut record = minimal();
        record.veiculo_versao = Some("LT".to_string());
        record.veiculo_ano = Some("2020".to_string());
        record.valor_venda = Some("R$ 60.000".to_string());
        let entry = ListEntry::from_record(&record);
        assert_eq!(entry.trim_and_year, "LT - 2020");
        assert_eq!(entry.plate, NOT_AVAILABLE);
        assert_eq!(entry.sale_value, None);

        record.vendido = true;
        let entry = ListEntry::from_record(&record);
        assert!(entry.sold);
        assert_eq!(entry.sale_value.as_deref(), Some("R$ 60.000"));
        assert_eq!(entry.sold_on, None);
    }
}
