use chrono::NaiveDate;

use crate::models::EvaluationRecord;

pub const CSV_HEADERS: [&str; 22] = [
    "Data",
    "Cliente",
    "Celular",
    "Cidade",
    "Endereço",
    "Modelo",
    "Ano",
    "Versão",
    "Motor",
    "Placa",
    "KM",
    "FIPE",
    "Manual",
    "Chave Cópia",
    "Sinistro",
    "Leilão",
    "Batido",
    "Proprietário",
    "Financiamento",
    "Valor Quitação",
    "Débitos DETRAN",
    "Avaliador",
];

pub fn export_file_name(date: NaiveDate) -> String {
    format!("relatorio_avaliacoes_{}.csv", date.format("%Y-%m-%d"))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Sim"
    } else {
        "Não"
    }
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

fn row(record: &EvaluationRecord) -> [&str; 22] {
    [
        record.data_avaliacao.as_str(),
        record.cliente_nome.as_str(),
        opt(&record.cliente_celular),
        opt(&record.cliente_cidade),
        opt(&record.cliente_endereco),
        record.veiculo_modelo.as_str(),
        opt(&record.veiculo_ano),
        opt(&record.veiculo_versao),
        opt(&record.veiculo_motor),
        opt(&record.veiculo_placa),
        opt(&record.veiculo_km),
        opt(&record.veiculo_fipe),
        yes_no(record.veiculo_manual),
        yes_no(record.veiculo_chave_copia),
        yes_no(record.veiculo_sinistro),
        yes_no(record.veiculo_leilao),
        yes_no(record.veiculo_batido),
        opt(&record.doc_nome_proprietario),
        yes_no(record.doc_financiamento),
        opt(&record.doc_valor_quitacao),
        opt(&record.doc_debitos_detran),
        record.avaliador_nome.as_str(),
    ]
}

/// Header line followed by one fully quoted line per record, joined by `\n`.
pub fn export_csv(records: &[EvaluationRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for record in records {
        let cells: Vec<String> = row(record).iter().map(|cell| quote(cell)).collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<Vec<String>> {
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(content.as_bytes());
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_header_only_for_empty_collection() {
        let content = export_csv(&[]);
        assert_eq!(content, CSV_HEADERS.join(","));
        assert!(!content.ends_with('\n'));
    }

    #[test]
    fn test_comma_in_client_name_stays_in_one_column() {
        let record = EvaluationRecord::new("2024-03-10", "Souza, Maria", "Onix", "Carlos");
        let content = export_csv(&[record]);
        let rows = parse(&content);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), CSV_HEADERS.len());
        assert_eq!(rows[1].len(), CSV_HEADERS.len());
        assert_eq!(rows[1][1], "Souza, Maria");
        assert!(content.lines().nth(1).unwrap().starts_with("\"2024-03-10\",\"Souza, Maria\","));
    }

    #[test]
    fn test_flags_and_missing_optionals() {
        let mut record = EvaluationRecord::new("2024-03-10", "Maria", "Onix", "Carlos");
        record.veiculo_sinistro = true;
        record.doc_financiamento = true;
        record.veiculo_placa = Some("ABC1D23".to_string());
        let rows = parse(&export_csv(&[record]));
        let data = &rows[1];
        assert_eq!(data[2], "");
        assert_eq!(data[9], "ABC1D23");
        assert_eq!(data[12], "Não");
        assert_eq!(data[14], "Sim");
        assert_eq!(data[18], "Sim");
        assert_eq!(data[21], "Carlos");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let mut record = EvaluationRecord::new("2024-03-10", "Maria", "Onix", "Carlos");
        record.veiculo_versao = Some("1.0 \"Turbo\"".to_string());
        let rows = parse(&export_csv(&[record]));
        assert_eq!(rows[1][7], "1.0 \"Turbo\"");
    }

    #[test]
    fn test_file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 9).unwrap();
        assert_eq!(export_file_name(date), "relatorio_avaliacoes_2024-07-09.csv");
    }
}
