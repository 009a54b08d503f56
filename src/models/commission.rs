use crate::config::Config;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Commission totals for a single calendar day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyCommission {
    pub date: String,
    pub total_commission: f64,
    pub total_payment: f64,
}

/// Commission totals for a week, keyed by `week_id` and displayed as `week`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeeklyCommission {
    pub week_id: String,
    pub week: String,
    pub total_commission: f64,
    pub total_payment: f64,
}

/// Body of `GET /shop_commission/{shop_id}`.
///
/// Both arrays may be missing or `null`; either way they read as empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommissionReport {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub daily_commissions: Vec<DailyCommission>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub weekly_commissions: Vec<WeeklyCommission>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Formats a monetary amount with the currency label, e.g. `SSP 10.00`.
pub fn format_amount(amount: f64) -> String {
    format!("{} {:.2}", Config::CURRENCY_LABEL, amount)
}

/// One rendered table row, shared by the daily and weekly tables.
#[derive(Clone, Debug, PartialEq)]
pub struct CommissionRow {
    pub key: String,
    pub label: String,
    pub commission: String,
    pub payment: String,
}

impl From<&DailyCommission> for CommissionRow {
    fn from(c: &DailyCommission) -> Self {
        Self {
            key: c.date.clone(),
            label: c.date.clone(),
            commission: format_amount(c.total_commission),
            payment: format_amount(c.total_payment),
        }
    }
}

impl From<&WeeklyCommission> for CommissionRow {
    fn from(c: &WeeklyCommission) -> Self {
        Self {
            key: c.week_id.clone(),
            label: c.week.clone(),
            commission: format_amount(c.total_commission),
            payment: format_amount(c.total_payment),
        }
    }
}

impl CommissionReport {
    pub fn daily_rows(&self) -> Vec<CommissionRow> {
        with_unique_keys(self.daily_commissions.iter().map(Into::into))
    }

    pub fn weekly_rows(&self) -> Vec<CommissionRow> {
        with_unique_keys(self.weekly_commissions.iter().map(Into::into))
    }
}

/// Rows are rendered as a keyed list, so a repeated key is replaced by
/// `{index}-{key}`.
fn with_unique_keys(rows: impl Iterator<Item = CommissionRow>) -> Vec<CommissionRow> {
    let mut seen = HashSet::new();

    rows.enumerate()
        .map(|(idx, mut row)| {
            if !seen.insert(row.key.clone()) {
                row.key = format!("{idx}-{}", row.key);
                seen.insert(row.key.clone());
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(10.0), "SSP 10.00");
        assert_eq!(format_amount(1234.5), "SSP 1234.50");
        assert_eq!(format_amount(0.126), "SSP 0.13");
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let report: CommissionReport = serde_json::from_str("{}").unwrap();
        assert!(report.daily_commissions.is_empty());
        assert!(report.weekly_commissions.is_empty());
    }

    #[test]
    fn test_null_arrays_default_to_empty() {
        let json = r#"{"daily_commissions": null, "weekly_commissions": null}"#;
        let report: CommissionReport = serde_json::from_str(json).unwrap();
        assert_eq!(report, CommissionReport::default());
    }

    #[test]
    fn test_weekly_row_uses_week_label_and_id_key() {
        let weekly = WeeklyCommission {
            week_id: "2024-W01".to_string(),
            week: "Jan 1 - Jan 7".to_string(),
            total_commission: 70.0,
            total_payment: 630.25,
        };
        let row = CommissionRow::from(&weekly);
        assert_eq!(row.key, "2024-W01");
        assert_eq!(row.label, "Jan 1 - Jan 7");
        assert_eq!(row.commission, "SSP 70.00");
        assert_eq!(row.payment, "SSP 630.25");
    }

    #[test]
    fn test_duplicate_dates_get_unique_row_keys() {
        let day = DailyCommission {
            date: "2024-01-01".to_string(),
            total_commission: 1.0,
            total_payment: 9.0,
        };
        let report = CommissionReport {
            daily_commissions: vec![day.clone(), day],
            weekly_commissions: Vec::new(),
        };

        let rows = report.daily_rows();
        assert_eq!(rows[0].key, "2024-01-01");
        assert_eq!(rows[1].key, "1-2024-01-01");
        assert_eq!(rows[1].label, "2024-01-01");
    }
}
