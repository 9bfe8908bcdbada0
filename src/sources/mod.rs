use crate::loader::RawRow;
use crate::record::SurveyRecord;

pub mod in_person;
pub mod online;

/// A normalized row whose price answers are still raw text.
///
/// Price extraction and the premise-internet price rule run after the
/// merge, alongside the cross-source consistency filter, so sources hand
/// the pipeline the raw answer text untouched.
#[derive(Debug, Clone)]
pub struct NormalizedRow {
    pub record: SurveyRecord,
    pub internet_price_raw: Option<String>,
    pub mobile_price_raw: Option<String>,
}

/// Core trait that each questionnaire source implements.
pub trait SurveySource {
    /// Unique identifier for this source, used in logs and errors.
    fn source_id(&self) -> &'static str;

    /// Rename table from exact question-text headers to canonical field
    /// names. Columns not in this table are dropped at load time.
    fn column_map(&self) -> &'static [(&'static str, &'static str)];

    /// Normalize one raw row into the canonical record shape.
    ///
    /// Returns `None` for rows the source considers invalid (e.g. online
    /// respondents claiming to never use the internet).
    fn normalize(&self, raw: &RawRow) -> Option<NormalizedRow>;
}

/// The questionnaires only ever affirm with the literal "Yes"; anything
/// else, including no answer, is false.
pub(crate) fn yes(raw: Option<&str>) -> bool {
    matches!(raw, Some("Yes"))
}

/// Parse a raw ordinal answer. Scale answers arrive as 1-based integer
/// codes, sometimes with a decimal point from the export.
pub(crate) fn scale_code(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
}

/// Split a multiple-choice cell on the source's delimiter and categorize
/// each element independently. An absent cell stays absent.
pub(crate) fn categorize_list<T>(
    raw: Option<&str>,
    delimiter: &str,
    correct: fn(&str) -> &str,
    categorize: fn(&str) -> T,
) -> Option<Vec<T>> {
    raw.map(|cell| {
        cell.split(delimiter)
            .map(|item| categorize(correct(item)))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Dislike;

    #[test]
    fn test_yes_literal_only() {
        assert!(yes(Some("Yes")));
        assert!(!yes(Some("yes")));
        assert!(!yes(Some("No")));
        assert!(!yes(None));
    }

    #[test]
    fn test_scale_code_parses_ints_and_floats() {
        assert_eq!(scale_code(Some("3")), Some(3.0));
        assert_eq!(scale_code(Some("3.0")), Some(3.0));
        assert_eq!(scale_code(Some("maybe")), None);
        assert_eq!(scale_code(None), None);
    }

    #[test]
    fn test_categorize_list_keeps_absence() {
        let out = categorize_list(None, ";", |s| s, Dislike::from_raw);
        assert!(out.is_none());

        let out = categorize_list(Some("Price;Made-up gripe"), ";", |s| s, Dislike::from_raw);
        assert_eq!(out, Some(vec![Dislike::Price, Dislike::Other]));
    }
}
