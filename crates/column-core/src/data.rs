// File: crates/column-core/src/data.rs
// Summary: Tabular dataset model: one category key plus ordered numeric series values per record.
// Notes:
// - Field order is significant: the first field is the category, the rest are
//   series in display order. Construction validates that every record agrees.

use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// One row of the dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub key: String,
    pub values: Vec<f64>,
}

impl Record {
    pub fn new(key: impl Into<String>, values: Vec<f64>) -> Self {
        Self { key: key.into(), values }
    }

    /// Running partial sums: element `i` is the sum of values `0..=i`.
    pub fn running_sums(&self) -> Vec<f64> {
        self.values
            .iter()
            .scan(0.0, |acc, v| {
                *acc += v;
                Some(*acc)
            })
            .collect()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Validated, non-empty dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    category_field: String,
    series_names: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset, checking that it is non-empty and every record has one
    /// value per series.
    pub fn new(
        category_field: impl Into<String>,
        series_names: Vec<String>,
        records: Vec<Record>,
    ) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        let expected = series_names.len();
        for (index, r) in records.iter().enumerate() {
            if r.values.len() != expected {
                return Err(ChartError::RaggedRecord { index, expected, found: r.values.len() });
            }
        }
        Ok(Self { category_field: category_field.into(), series_names, records })
    }

    /// Parse a JSON array of objects. Object key order is preserved; the first
    /// key of the first object names the category field.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }

    pub fn from_json_value(value: &Value) -> ChartResult<Self> {
        let rows = value
            .as_array()
            .ok_or_else(|| ChartError::InvalidData("expected an array of records".into()))?;
        let first = rows.first().ok_or(ChartError::EmptyDataset)?;
        let first = first
            .as_object()
            .ok_or_else(|| ChartError::InvalidData("record 0 is not an object".into()))?;
        let fields: Vec<String> = first.keys().cloned().collect();
        let (category_field, series_names) = match fields.split_first() {
            Some((c, rest)) => (c.clone(), rest.to_vec()),
            None => return Err(ChartError::EmptyRecord { index: 0 }),
        };

        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let obj = row
                .as_object()
                .ok_or_else(|| ChartError::InvalidData(format!("record {index} is not an object")))?;
            if obj.len() != fields.len() {
                return Err(ChartError::RaggedRecord {
                    index,
                    expected: series_names.len(),
                    found: obj.len().saturating_sub(1),
                });
            }
            let mut key = String::new();
            let mut values = Vec::with_capacity(series_names.len());
            for (pos, ((name, v), want)) in obj.iter().zip(&fields).enumerate() {
                if name != want {
                    return Err(ChartError::FieldMismatch {
                        index,
                        expected: want.clone(),
                        found: name.clone(),
                    });
                }
                if pos == 0 {
                    key = match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                } else {
                    values.push(parse_number(v).ok_or_else(|| ChartError::NonNumeric {
                        index,
                        field: name.clone(),
                        value: v.to_string(),
                    })?);
                }
            }
            records.push(Record { key, values });
        }
        Self::new(category_field, series_names, records)
    }

    pub fn category_field(&self) -> &str {
        &self.category_field
    }

    pub fn series_names(&self) -> &[String] {
        &self.series_names
    }

    pub fn series_count(&self) -> usize {
        self.series_names.len()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Category keys in record order, duplicates included.
    pub fn keys(&self) -> Vec<String> {
        self.records.iter().map(|r| r.key.clone()).collect()
    }
}

fn parse_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
