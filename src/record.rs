use serde::{Deserialize, Serialize};

use crate::vocab::{
    Agreement, Dislike, DisputeResolver, Form, Importance, Isp, IspTech, UseFrequency,
};

/// One fully-normalized survey submission.
///
/// Field names here are the canonical output schema; every serialized key
/// matches a short field identifier rather than the long question text the
/// raw exports use. Absent answers stay `None` and serialize as `null`;
/// they are never collapsed into a vocabulary's "Other" bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub form: Option<Form>,
    pub internet_use_freq: Option<UseFrequency>,
    pub has_internet_premise: bool,
    pub has_internet_mobile_only: bool,
    pub has_internet_ext_only: bool,
    pub internet_price: Option<f64>,
    pub mobile_price: Option<f64>,
    pub isp: Option<Isp>,
    pub isp_tech: Option<IspTech>,
    pub dislikes: Option<Vec<Dislike>>,
    pub dispute_resolvers: Option<Vec<DisputeResolver>>,
    pub importance_student: Importance,
    pub importance_low_income: Importance,
    pub support_utility: Agreement,
    pub importance_user_input: Agreement,
    pub importance_rates_direct: Agreement,
    pub subsidize_subscribers: Agreement,
    pub subsidize_taxpayers: Agreement,
    pub support_financial: Agreement,
}

impl SurveyRecord {
    /// Whether the row's connectivity answers are mutually consistent.
    ///
    /// External-only access excludes both premise and mobile-only access,
    /// and mobile-only access excludes premise access. Rows failing this
    /// are survey-taking mistakes and get dropped after the merge.
    pub fn connectivity_consistent(&self) -> bool {
        if self.has_internet_ext_only && (self.has_internet_premise || self.has_internet_mobile_only)
        {
            return false;
        }
        if self.has_internet_mobile_only && self.has_internet_premise {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_record() -> SurveyRecord {
        SurveyRecord {
            form: Some(Form::EnglishOnline),
            internet_use_freq: Some(UseFrequency::AllDayEveryDay),
            has_internet_premise: false,
            has_internet_mobile_only: false,
            has_internet_ext_only: false,
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
        }
    }

    #[test]
    fn test_ext_only_excludes_premise_and_mobile_only() {
        let mut rec = base_record();
        rec.has_internet_ext_only = true;
        assert!(rec.connectivity_consistent());

        rec.has_internet_premise = true;
        assert!(!rec.connectivity_consistent());

        rec.has_internet_premise = false;
        rec.has_internet_mobile_only = true;
        assert!(!rec.connectivity_consistent());
    }

    #[test]
    fn test_mobile_only_excludes_premise() {
        let mut rec = base_record();
        rec.has_internet_mobile_only = true;
        assert!(rec.connectivity_consistent());

        rec.has_internet_premise = true;
        assert!(!rec.connectivity_consistent());
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let mut rec = base_record();
        rec.internet_price = Some(55.0);
        rec.has_internet_premise = true;
        rec.dislikes = Some(vec![Dislike::Price, Dislike::Other]);

        let json = serde_json::to_string_pretty(&rec).unwrap();
        let back: SurveyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, back);
    }
}
