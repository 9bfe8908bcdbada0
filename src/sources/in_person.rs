use crate::loader::RawRow;
use crate::record::SurveyRecord;
use crate::sources::{categorize_list, scale_code, yes, NormalizedRow, SurveySource};
use crate::vocab::{Agreement, Dislike, DisputeResolver, Form, Importance, Isp, IspTech, UseFrequency};

/// The in-person questionnaire (paper forms, transcribed).
///
/// Its export tags each row with the form variant handed out, delimits
/// multiple-choice cells with ", ", and asked about mobile internet use in
/// general rather than mobile-exclusivity, so mobile-only is derived here.
pub struct InPersonSource;

const COLUMN_MAP: &[(&str, &str)] = &[
    ("Form", "form"),
    ("How often do you use the internet?", "internet_use_freq"),
    (
        "Do you only have internet access through the generosity of someone who is not in your household, such as free Wi-Fi, a neighbor, your workplace, or the library?",
        "has_internet_ext_only",
    ),
    ("Excluding mobile plans, do you have internet access at home?", "has_internet_premise"),
    ("Who provides your home internet service?", "isp_raw"),
    (
        "Excluding mobile plans, about how much is the price per month of your home internet service?",
        "internet_price",
    ),
    ("Do you have internet access through a mobile plan?", "has_internet_mobile"),
    (
        "If you marked Yes, about how much is the price per month of your household's mobile plan?",
        "mobile_price",
    ),
    ("What do you dislike about your internet service?", "dislikes"),
    (
        "When you have an issue with your internet provider, from which institutions can you get satisfaction?",
        "dispute_resolvers",
    ),
    ("How important is it for students to have internet access?", "importance_student"),
    (
        "How important is it for low-income families to have internet access?",
        "importance_low_income",
    ),
    ("I support a publicly-owned internet utility.", "support_utility"),
    (
        "Community input is important in governance of an internet utility.",
        "importance_user_input",
    ),
    ("Rates should only pay for utility costs.", "importance_rates_direct"),
    (
        "Subscribers should subsidize internet access for families that can't afford it.",
        "subsidize_subscribers",
    ),
    (
        "All taxpayers should subsidize internet access for families that can't afford it.",
        "subsidize_taxpayers",
    ),
    (
        "I would financially support a campaign to create a publicly-owned internet utility.",
        "support_financial",
    ),
];

/// The in-person wording matches the canonical vocabularies exactly.
fn identity(raw: &str) -> &str {
    raw
}

impl SurveySource for InPersonSource {
    fn source_id(&self) -> &'static str {
        "in_person"
    }

    fn column_map(&self) -> &'static [(&'static str, &'static str)] {
        COLUMN_MAP
    }

    fn normalize(&self, raw: &RawRow) -> Option<NormalizedRow> {
        let has_premise = yes(raw.get("has_internet_premise"));
        // The paper form asked about mobile use in general; exclusivity
        // is derived, and the raw mobile answer goes no further.
        let has_mobile = yes(raw.get("has_internet_mobile"));
        let has_mobile_only = !has_premise && has_mobile;

        let isp_raw = raw.get("isp_raw");

        let record = SurveyRecord {
            form: raw.get("form").and_then(Form::from_raw),
            internet_use_freq: raw.get("internet_use_freq").and_then(UseFrequency::from_raw),
            has_internet_premise: has_premise,
            has_internet_mobile_only: has_mobile_only,
            has_internet_ext_only: yes(raw.get("has_internet_ext_only")),
            internet_price: None,
            mobile_price: None,
            isp: isp_raw.map(Isp::from_raw),
            isp_tech: isp_raw.map(IspTech::from_raw_isp),
            dislikes: categorize_list(raw.get("dislikes"), ", ", identity, Dislike::from_raw),
            dispute_resolvers: categorize_list(
                raw.get("dispute_resolvers"),
                ", ",
                identity,
                DisputeResolver::from_raw,
            ),
            importance_student: Importance::from_code(scale_code(raw.get("importance_student"))),
            importance_low_income: Importance::from_code(scale_code(raw.get("importance_low_income"))),
            support_utility: Agreement::from_code(scale_code(raw.get("support_utility"))),
            importance_user_input: Agreement::from_code(scale_code(raw.get("importance_user_input"))),
            importance_rates_direct: Agreement::from_code(scale_code(raw.get("importance_rates_direct"))),
            subsidize_subscribers: Agreement::from_code(scale_code(raw.get("subsidize_subscribers"))),
            subsidize_taxpayers: Agreement::from_code(scale_code(raw.get("subsidize_taxpayers"))),
            support_financial: Agreement::from_code(scale_code(raw.get("support_financial"))),
        };

        Some(NormalizedRow {
            record,
            internet_price_raw: raw.get("internet_price").map(str::to_string),
            mobile_price_raw: raw.get("mobile_price").map(str::to_string),
        })
    }
}
