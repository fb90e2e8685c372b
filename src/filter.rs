use crate::models::EvaluationRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoldStatus {
    #[default]
    Any,
    Sold,
    NotSold,
}

impl SoldStatus {
    /// Parses the list page's select values (`vendido`, `nao-vendido`); anything else is `Any`.
    pub fn parse(value: &str) -> SoldStatus {
        match value.trim() {
            "vendido" | "sold" => SoldStatus::Sold,
            "nao-vendido" | "not-sold" => SoldStatus::NotSold,
            _ => SoldStatus::Any,
        }
    }

    fn matches(&self, vendido: bool) -> bool {
        match self {
            SoldStatus::Any => true,
            SoldStatus::Sold => vendido,
            SoldStatus::NotSold => !vendido,
        }
    }
}

/// List page criteria. Blank criteria match everything; set criteria are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationFilter {
    /// Case-insensitive substring of client name, plate or model.
    pub search: String,
    /// Exact vehicle year.
    pub year: String,
    pub model: String,
    pub evaluator: String,
    pub sold: SoldStatus,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn criterion(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

impl EvaluationFilter {
    pub fn is_active(&self) -> bool {
        criterion(&self.search).is_some()
            || criterion(&self.year).is_some()
            || criterion(&self.model).is_some()
            || criterion(&self.evaluator).is_some()
            || self.sold != SoldStatus::Any
    }

    pub fn matches(&self, record: &EvaluationRecord) -> bool {
        if let Some(term) = criterion(&self.search) {
            let plate = record.veiculo_placa.as_deref().unwrap_or_default();
            if !(contains_ci(&record.cliente_nome, term)
                || contains_ci(plate, term)
                || contains_ci(&record.veiculo_modelo, term))
            {
                return false;
            }
        }
        if let Some(year) = criterion(&self.year) {
            if record.veiculo_ano.as_deref().map(str::trim) != Some(year) {
                return false;
            }
        }
        if let Some(model) = criterion(&self.model) {
            if !contains_ci(&record.veiculo_modelo, model) {
                return false;
            }
        }
        if let Some(evaluator) = criterion(&self.evaluator) {
            if !contains_ci(&record.avaliador_nome, evaluator) {
                return false;
            }
        }
        self.sold.matches(record.vendido)
    }

    /// Matching records in input order.
    pub fn apply(&self, records: &[EvaluationRecord]) -> Vec<EvaluationRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(
        cliente: &str,
        modelo: &str,
        placa: &str,
        ano: &str,
        avaliador: &str,
        vendido: bool,
    ) -> EvaluationRecord {
        EvaluationRecord {
            veiculo_placa: Some(placa.to_string()),
            veiculo_ano: Some(ano.to_string()),
            vendido,
            ..EvaluationRecord::new("2024-01-10", cliente, modelo, avaliador)
        }
    }

    fn sample() -> Vec<EvaluationRecord> {
        vec![
            record("Maria Souza", "Onix LT", "ABC1D23", "2019", "Carlos", false),
            record("João Lima", "Gol", "XYZ9K88", "2015", "Ana", true),
            record("Pedro Onofre", "HB20", "QWE4R56", "2019", "Carlos Alberto", false),
            record("Lucia", "Onix Plus", "JKL7M89", "2021", "Ana", true),
        ]
    }

    fn names(records: &[EvaluationRecord]) -> Vec<&str> {
        records.iter().map(|r| r.cliente_nome.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = EvaluationFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&sample()).len(), 4);
    }

    #[rstest]
    #[case("onix", vec!["Maria Souza", "Lucia"])]
    #[case("ONO", vec!["Pedro Onofre"])]
    #[case("xyz9", vec!["João Lima"])]
    #[case("   ", vec!["Maria Souza", "João Lima", "Pedro Onofre", "Lucia"])]
    fn test_search_is_case_insensitive_across_fields(
        #[case] term: &str,
        #[case] expected: Vec<&str>,
    ) {
        let filter = EvaluationFilter {
            search: term.to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&sample())), expected);
    }

    #[test]
    fn test_year_is_exact_match() {
        let filter = EvaluationFilter {
            year: "2019".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&sample())), vec!["Maria Souza", "Pedro Onofre"]);

        let filter = EvaluationFilter {
            year: "201".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[rstest]
    #[case(SoldStatus::Sold, vec!["João Lima", "Lucia"])]
    #[case(SoldStatus::NotSold, vec!["Maria Souza", "Pedro Onofre"])]
    #[case(SoldStatus::Any, vec!["Maria Souza", "João Lima", "Pedro Onofre", "Lucia"])]
    fn test_sold_status(#[case] sold: SoldStatus, #[case] expected: Vec<&str>) {
        let filter = EvaluationFilter {
            sold,
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&sample())), expected);
    }

    #[test]
    fn test_criteria_are_anded() {
        let filter = EvaluationFilter {
            model: "onix".to_string(),
            evaluator: "ana".to_string(),
            sold: SoldStatus::Sold,
            ..Default::default()
        };
        assert!(filter.is_active());
        assert_eq!(names(&filter.apply(&sample())), vec!["Lucia"]);
    }

    #[test]
    fn test_composition_order_does_not_matter() {
        let by_model = EvaluationFilter {
            model: "o".to_string(),
            ..Default::default()
        };
        let by_evaluator = EvaluationFilter {
            evaluator: "carlos".to_string(),
            ..Default::default()
        };
        let records = sample();
        let a = by_evaluator.apply(&by_model.apply(&records));
        let b = by_model.apply(&by_evaluator.apply(&records));
        let combined = EvaluationFilter {
            model: "o".to_string(),
            evaluator: "carlos".to_string(),
            ..Default::default()
        };
        assert_eq!(a, b);
        assert_eq!(a, combined.apply(&records));
    }

    #[test]
    fn test_sold_status_parse() {
        assert_eq!(SoldStatus::parse("vendido"), SoldStatus::Sold);
        assert_eq!(SoldStatus::parse("nao-vendido"), SoldStatus::NotSold);
        assert_eq!(SoldStatus::parse(""), SoldStatus::Any);
    }
}
