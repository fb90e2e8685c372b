//! Statistics and CSV export for the reports page.

pub mod csv;

pub use self::csv::{export_csv, export_file_name, CSV_HEADERS};

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{parse_date, EvaluationRecord};

pub const TOP_MODELS_LIMIT: usize = 5;

/// Inclusive range over `data_avaliacao`. Unset bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Builds a range from form values; blank means unbounded.
    pub fn parse(from: &str, to: &str) -> Result<Self, String> {
        let bound = |value: &str| -> Result<Option<NaiveDate>, String> {
            if value.trim().is_empty() {
                return Ok(None);
            }
            parse_date(value)
                .map(Some)
                .ok_or_else(|| format!("invalid date: {}", value))
        };
        Ok(Self {
            from: bound(from)?,
            to: bound(to)?,
        })
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Records with an unreadable date only pass an unbounded range.
    pub fn contains(&self, record: &EvaluationRecord) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(date) = record.evaluation_date() else {
            return false;
        };
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    pub fn apply(&self, records: &[EvaluationRecord]) -> Vec<EvaluationRecord> {
        records
            .iter()
            .filter(|record| self.contains(record))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub unique_models: usize,
    pub unique_evaluators: usize,
    pub unique_clients: usize,
    /// Most evaluated models, count descending, ties in first-seen order.
    pub top_models: Vec<(String, usize)>,
}

fn distinct<'a>(
    records: &'a [EvaluationRecord],
    field: impl Fn(&'a EvaluationRecord) -> &'a str,
) -> usize {
    records.iter().map(field).collect::<HashSet<&str>>().len()
}

pub fn summarize(records: &[EvaluationRecord]) -> ReportSummary {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        let model = match record.veiculo_modelo.as_str() {
            "" => "N/A",
            other => other,
        };
        match counts.iter_mut().find(|(name, _)| name.as_str() == model) {
            Some((_, count)) => *count += 1,
            None => counts.push((model.to_string(), 1)),
        }
    }
    // stable: equal counts keep encounter order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_MODELS_LIMIT);

    ReportSummary {
        total: records.len(),
        unique_models: distinct(records, |r| r.veiculo_modelo.as_str()),
        unique_evaluators: distinct(records, |r| r.avaliador_nome.as_str()),
        unique_clients: distinct(records, |r| r.cliente_nome.as_str()),
        top_models: counts,
    }
}

/// Applies the range and summarizes what is left.
pub fn summarize_range(records: &[EvaluationRecord], range: &DateRange) -> ReportSummary {
    summarize(&range.apply(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, cliente: &str, modelo: &str, avaliador: &str) -> EvaluationRecord {
        EvaluationRecord::new(date, cliente, modelo, avaliador)
    }

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn sample() -> Vec<EvaluationRecord> {
        vec![
            record("2024-01-05", "Maria", "Gol", "Carlos"),
            record("2024-01-20", "João", "Onix", "Ana"),
            record("2024-02-02", "Maria", "Onix", "Carlos"),
            record("2024-02-15", "Pedro", "HB20", "Ana"),
            record("2024-03-01", "Lucia", "Gol", "Bruno"),
            record("not-a-date", "Rita", "Kwid", "Bruno"),
        ]
    }

    #[test]
    fn test_unfiltered_total_matches_collection() {
        let records = sample();
        let summary = summarize_range(&records, &DateRange::default());
        assert_eq!(summary.total, records.len());
        assert_eq!(summary.unique_models, 4);
        assert_eq!(summary.unique_evaluators, 3);
        assert_eq!(summary.unique_clients, 5);
    }

    #[test]
    fn test_top_models_ties_keep_first_seen_order() {
        let summary = summarize(&sample());
        assert_eq!(
            summary.top_models,
            vec![
                ("Gol".to_string(), 2),
                ("Onix".to_string(), 2),
                ("HB20".to_string(), 1),
                ("Kwid".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_models_capped_at_five() {
        let records: Vec<EvaluationRecord> = ["A", "B", "C", "D", "E", "F", "F"]
            .iter()
            .map(|m| record("2024-01-01", "X", m, "Y"))
            .collect();
        let summary = summarize(&records);
        assert_eq!(summary.top_models.len(), TOP_MODELS_LIMIT);
        assert_eq!(summary.top_models[0], ("F".to_string(), 2));
        assert_eq!(summary.top_models[4], ("D".to_string(), 1));
    }

    #[test]
    fn test_empty_model_counted_as_na() {
        let summary = summarize(&[record("2024-01-01", "X", "", "Y")]);
        assert_eq!(summary.top_models, vec![("N/A".to_string(), 1)]);
    }

    #[test]
    fn test_range_is_inclusive_and_skips_bad_dates() {
        let range = DateRange::new(ymd(2024, 1, 20), ymd(2024, 2, 15));
        let filtered = range.apply(&sample());
        let clients: Vec<&str> = filtered.iter().map(|r| r.cliente_nome.as_str()).collect();
        assert_eq!(clients, vec!["João", "Maria", "Pedro"]);

        let open_end = DateRange::new(ymd(2024, 2, 20), None);
        assert_eq!(open_end.apply(&sample()).len(), 1);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = DateRange::new(ymd(2024, 3, 1), ymd(2024, 1, 1));
        assert_eq!(summarize_range(&sample(), &range).total, 0);
    }

    #[test]
    fn test_parse_range() {
        let range = DateRange::parse("2024-01-01", "").unwrap();
        assert_eq!(range, DateRange::new(ymd(2024, 1, 1), None));
        assert!(DateRange::parse("", "").unwrap().is_unbounded());
        assert!(DateRange::parse("01/01/2024", "").is_err());
    }
}
