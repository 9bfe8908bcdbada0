use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::loader;
use crate::price::extract_price;
use crate::record::SurveyRecord;
use crate::sources::{in_person::InPersonSource, online::OnlineSource, NormalizedRow, SurveySource};

/// Result of a complete normalization run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub online_rows: usize,
    pub in_person_rows: usize,
    pub dropped_by_source: usize,
    pub dropped_inconsistent: usize,
    pub output_rows: usize,
    pub output_file: String,
}

pub struct Pipeline;

impl Pipeline {
    /// Run the whole normalization: load both sources, merge online rows
    /// ahead of in-person rows, drop inconsistent rows, resolve prices,
    /// and write the combined JSON dataset.
    pub fn run(
        online_path: &Path,
        in_person_path: &Path,
        output_path: &Path,
    ) -> Result<PipelineResult> {
        info!("starting normalization run");

        let (online, online_raw, online_dropped) =
            Self::load_and_normalize(online_path, &OnlineSource)?;
        let (in_person, in_person_raw, in_person_dropped) =
            Self::load_and_normalize(in_person_path, &InPersonSource)?;

        // Merge preserves within-source order; identity is positional.
        let mut merged: Vec<NormalizedRow> = online;
        merged.extend(in_person);

        let before = merged.len();
        merged.retain(|row| row.record.connectivity_consistent());
        let dropped_inconsistent = before - merged.len();
        if dropped_inconsistent > 0 {
            warn!(
                dropped = dropped_inconsistent,
                "dropped rows with contradictory connectivity answers"
            );
        }

        let records: Vec<SurveyRecord> = merged.into_iter().map(Self::resolve_prices).collect();

        Self::persist_to_json(&records, output_path)?;
        info!(rows = records.len(), output = %output_path.display(), "wrote normalized dataset");

        Ok(PipelineResult {
            online_rows: online_raw,
            in_person_rows: in_person_raw,
            dropped_by_source: online_dropped + in_person_dropped,
            dropped_inconsistent,
            output_rows: records.len(),
            output_file: output_path.to_string_lossy().to_string(),
        })
    }

    /// Load one source and normalize its rows, returning the kept rows,
    /// the raw row count, and how many rows the source rejected.
    fn load_and_normalize(
        path: &Path,
        source: &dyn SurveySource,
    ) -> Result<(Vec<NormalizedRow>, usize, usize)> {
        let raw_rows = loader::load_rows(path, source)?;
        let total = raw_rows.len();

        let normalized: Vec<NormalizedRow> = raw_rows
            .iter()
            .filter_map(|row| source.normalize(row))
            .collect();

        let dropped = total - normalized.len();
        if dropped > 0 {
            warn!(
                source = source.source_id(),
                dropped, "source rejected invalid rows"
            );
        }
        debug!(
            source = source.source_id(),
            total,
            kept = normalized.len(),
            "normalized source"
        );
        Ok((normalized, total, dropped))
    }

    /// Turn raw price text into numbers. A premise-internet price is only
    /// meaningful when the respondent reported premise internet; without
    /// it the raw text (often a mobile-plan figure) is discarded.
    fn resolve_prices(row: NormalizedRow) -> SurveyRecord {
        let mut record = row.record;
        record.internet_price = if record.has_internet_premise {
            row.internet_price_raw.as_deref().and_then(extract_price)
        } else {
            None
        };
        record.mobile_price = row.mobile_price_raw.as_deref().and_then(extract_price);
        record
    }

    /// Persist normalized records as a pretty-printed JSON array.
    fn persist_to_json(records: &[SurveyRecord], output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json_content = serde_json::to_string_pretty(records)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SurveyRecord;
    use crate::vocab::{Agreement, Form, Importance, UseFrequency};

    fn row(premise: bool, mobile_only: bool, ext_only: bool) -> NormalizedRow {
        NormalizedRow {
            record: SurveyRecord {
                form: Some(Form::EnglishOnline),
                internet_use_freq: Some(UseFrequency::AllDayEveryDay),
                has_internet_premise: premise,
                has_internet_mobile_only: mobile_only,
                has_internet_ext_only: ext_only,
                internet_price: None,
                mobile_price: None,
                isp: None,
                isp_tech: None,
                dislikes: None,
                dispute_resolvers: None,
                importance_student: Importance::NotImportant,
                importance_low_income: Importance::NotImportant,
                support_utility: Agreement::StronglyDisagree,
                importance_user_input: Agreement::StronglyDisagree,
                importance_rates_direct: Agreement::StronglyDisagree,
                subsidize_subscribers: Agreement::StronglyDisagree,
                subsidize_taxpayers: Agreement::StronglyDisagree,
                support_financial: Agreement::StronglyDisagree,
            },
            internet_price_raw: None,
            mobile_price_raw: None,
        }
    }

    #[test]
    fn test_price_cleared_without_premise_internet() {
        let mut input = row(false, true, false);
        input.internet_price_raw = Some("$55.00".to_string());
        input.mobile_price_raw = Some("$30".to_string());

        let record = Pipeline::resolve_prices(input);
        assert_eq!(record.internet_price, None);
        assert_eq!(record.mobile_price, Some(30.0));
    }

    #[test]
    fn test_price_extracted_with_premise_internet() {
        let mut input = row(true, false, false);
        input.internet_price_raw = Some("$55.00".to_string());

        let record = Pipeline::resolve_prices(input);
        assert_eq!(record.internet_price, Some(55.0));
    }

    #[test]
    fn test_unparsable_price_is_missing() {
        let mut input = row(true, false, false);
        input.internet_price_raw = Some("n/a".to_string());

        let record = Pipeline::resolve_prices(input);
        assert_eq!(record.internet_price, None);
    }
}
