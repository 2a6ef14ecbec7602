use std::fmt::Write;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ChartError {
    #[error("chart has {labels} labels but {values} values")]
    LengthMismatch { labels: usize, values: usize },
}

/// Labelled series attached to an assistant message.
///
/// `labels` and `values` always have the same length; both construction and
/// deserialization enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChartData")]
pub struct ChartData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    labels: Vec<String>,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawChartData {
    #[serde(default)]
    title: Option<String>,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl TryFrom<RawChartData> for ChartData {
    type Error = ChartError;

    fn try_from(raw: RawChartData) -> Result<Self, Self::Error> {
        ChartData::new(raw.title, raw.labels, raw.values)
    }
}

impl ChartData {
    pub fn new(
        title: Option<String>,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> Result<Self, ChartError> {
        if labels.len() != values.len() {
            return Err(ChartError::LengthMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            title,
            labels,
            values,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// `(label, value)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// `Label,Value` header plus one row per point, newline separated.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("Label,Value");
        for (label, value) in self.points() {
            let _ = write!(csv, "\n{label},{value}");
        }
        csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engagement() -> ChartData {
        ChartData::new(
            Some("Monthly User Engagement".into()),
            vec!["Jan".into(), "Feb".into(), "Mar".into()],
            vec![1200.0, 1900.0, 2.5],
        )
        .unwrap()
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = ChartData::new(None, vec!["a".into()], vec![]).unwrap_err();
        assert_eq!(
            err,
            ChartError::LengthMismatch {
                labels: 1,
                values: 0,
            }
        );
    }

    #[test]
    fn csv_has_header_and_rows() {
        assert_eq!(
            engagement().to_csv(),
            "Label,Value\nJan,1200\nFeb,1900\nMar,2.5"
        );
    }

    #[test]
    fn deserialize_validates() {
        let ok: ChartData =
            serde_json::from_str(r#"{"title":"T","labels":["a","b"],"values":[1,2]}"#).unwrap();
        assert_eq!(ok.values(), &[1.0, 2.0]);

        let bad = serde_json::from_str::<ChartData>(r#"{"labels":["a"],"values":[1,2]}"#);
        assert!(bad.is_err());
    }
}
