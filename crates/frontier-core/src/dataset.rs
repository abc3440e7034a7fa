// File: crates/frontier-core/src/dataset.rs
// Summary: Immutable benchmark dataset: records, validation, builtin data, CSV loading.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::error::DataError;
use crate::vendor::VendorId;

pub const ONE_DAY_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// One benchmark measurement. Immutable after dataset construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub model: String,
    pub date: NaiveDate,
    pub score: f64,
    pub vendor: VendorId,
}

impl Record {
    /// X-axis value: milliseconds since the Unix epoch at UTC midnight.
    pub fn epoch_ms(&self) -> f64 {
        date_to_ms(self.date)
    }
}

pub fn date_to_ms(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis() as f64
}

pub fn ms_to_date(ms: f64) -> Option<NaiveDate> {
    chrono::DateTime::from_timestamp_millis(ms as i64).map(|dt| dt.date_naive())
}

/// Shape of a CSV row (`model,date,score,vendor`); validated into `Record`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    model: String,
    date: String,
    score: f64,
    vendor: String,
}

/// Ordered, read-only sequence of benchmark records. Insertion order is
/// preserved; it is the tie-break for same-date sorting downstream.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Validate and wrap records: dates already parsed, scores must be finite
    /// and non-negative (vendor validity is enforced by the `VendorId` type).
    pub fn from_records(records: Vec<Record>) -> Result<Self, DataError> {
        if records.is_empty() {
            return Err(DataError::EmptyDataset);
        }
        for r in &records {
            if !r.score.is_finite() || r.score < 0.0 {
                return Err(DataError::InvalidScore(r.score, r.model.clone()));
            }
        }
        Ok(Self { records })
    }

    /// The canonical embedded benchmark dataset.
    pub fn builtin() -> Self {
        let records = BUILTIN
            .iter()
            .map(|&(model, date, score, vendor)| {
                let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .expect("builtin dataset dates are valid");
                Record { model: model.to_string(), date, score, vendor }
            })
            .collect();
        Self { records }
    }

    pub fn from_csv_path(path: impl AsRef<std::path::Path>) -> Result<Self, DataError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Read `model,date,score,vendor` rows. Any malformed row is an input
    /// error; an unknown vendor id names the offender.
    pub fn from_csv_reader(reader: impl std::io::Read) -> Result<Self, DataError> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        let mut records = Vec::new();
        for row in rdr.deserialize::<RawRecord>() {
            let raw = row?;
            let date = NaiveDate::parse_from_str(raw.date.trim(), "%Y-%m-%d")
                .map_err(|source| DataError::InvalidDate { value: raw.date.clone(), source })?;
            let vendor: VendorId = raw.vendor.parse()?;
            records.push(Record { model: raw.model, date, score: raw.score, vendor });
        }
        tracing::debug!(count = records.len(), "loaded dataset from csv");
        Self::from_records(records)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_vendor(&self, vendor: VendorId) -> bool {
        self.records.iter().any(|r| r.vendor == vendor)
    }

    /// Earliest and latest record dates. `None` only for an empty dataset,
    /// which `from_records` already rejects.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut it = self.records.iter().map(|r| r.date);
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some((min, max))
    }
}

const BUILTIN: [(&str, &str, f64, VendorId); 44] = [
    ("GPT-3.5", "2022-11-15", 923.0, VendorId::Openai),
    ("Mixtral 8×7B", "2023-12-15", 829.0, VendorId::Mistral),
    ("Mistral Large", "2024-02-15", 797.0, VendorId::Mistral),
    ("Llama 3", "2024-04-15", 894.0, VendorId::Meta),
    ("GPT-4o", "2024-05-13", 1137.0, VendorId::Openai),
    ("Claude 3.5 Sonnet", "2024-06-20", 1082.0, VendorId::Anthropic),
    ("Llama 3.1", "2024-07-15", 907.0, VendorId::Meta),
    ("Gemini 2.0 Flash", "2024-12-11", 1056.0, VendorId::Google),
    ("o1", "2024-12-15", 1081.0, VendorId::Openai),
    ("DeepSeek-V3", "2024-12-26", 1073.0, VendorId::Deepseek),
    ("DeepSeek-R1", "2025-01-20", 958.0, VendorId::Deepseek),
    ("Grok-3", "2025-02-15", 1151.0, VendorId::Xai),
    ("Claude 3.7 Sonnet", "2025-02-15", 1231.0, VendorId::Anthropic),
    ("QwQ-32B", "2025-03-15", 1064.0, VendorId::Alibaba),
    ("DeepSeek-V3-0324", "2025-03-24", 1129.0, VendorId::Deepseek),
    ("o3", "2025-04-16", 1075.0, VendorId::Openai),
    ("o4-mini-high", "2025-04-16", 1039.0, VendorId::Openai),
    ("GLM-4", "2025-04-15", 892.0, VendorId::Zhipu),
    ("Qwen3", "2025-04-28", 1282.0, VendorId::Alibaba),
    ("Claude Sonnet 4", "2025-05-15", 1203.0, VendorId::Anthropic),
    ("GPT-4.1", "2025-05-14", 1173.0, VendorId::Openai),
    ("o3-pro", "2025-06-15", 1148.0, VendorId::Openai),
    ("MiniMax-M1", "2025-06-17", 689.0, VendorId::Minimax),
    ("Gemini 2.5 Pro", "2025-06-17", 1228.0, VendorId::Google),
    ("Gemini 2.5 Flash", "2025-06-17", 1130.0, VendorId::Google),
    ("Grok-4", "2025-07-10", 1168.0, VendorId::Xai),
    ("Kimi K2", "2025-07-15", 1086.0, VendorId::Moonshot),
    ("GLM-4.5", "2025-07-28", 1114.0, VendorId::Zhipu),
    ("GPT-5", "2025-08-07", 1216.0, VendorId::Openai),
    ("DeepSeek-V3.1", "2025-08-21", 1100.0, VendorId::Deepseek),
    ("Qwen3 Next 80B", "2025-09-11", 1226.0, VendorId::Alibaba),
    ("Claude Sonnet 4.5", "2025-09-15", 1326.0, VendorId::Anthropic),
    ("GLM-4.6", "2025-09-15", 1243.0, VendorId::Zhipu),
    ("DeepSeek-V3.2-Exp", "2025-09-29", 1154.0, VendorId::Deepseek),
    ("Claude Haiku 4.5", "2025-10-15", 1308.0, VendorId::Anthropic),
    ("MiniMax-M2", "2025-10-23", 1226.0, VendorId::Minimax),
    ("GPT-5.1", "2025-11-12", 1413.0, VendorId::Openai),
    ("Claude Opus 4.5", "2025-11-15", 1431.0, VendorId::Anthropic),
    ("Gemini 3 Pro", "2025-11-18", 1395.0, VendorId::Google),
    ("Grok 4.1 Fast", "2025-11-18", 1246.0, VendorId::Xai),
    ("DeepSeek-V3.2", "2025-12-01", 1259.0, VendorId::Deepseek),
    ("GPT-5.2", "2025-12-11", 1368.0, VendorId::Openai),
    ("GLM-4.7", "2025-12-22", 1198.0, VendorId::Zhipu),
    ("Kimi K2.5", "2026-01-15", 1209.0, VendorId::Moonshot),
];
