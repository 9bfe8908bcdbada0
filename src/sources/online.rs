use crate::loader::RawRow;
use crate::record::SurveyRecord;
use crate::sources::{categorize_list, scale_code, yes, NormalizedRow, SurveySource};
use crate::vocab::{Agreement, Dislike, DisputeResolver, Form, Importance, Isp, IspTech, UseFrequency};

/// The online questionnaire (a web-form export).
///
/// Its multiple-choice cells are semicolon-delimited, several answers use
/// wording that drifted from the in-person questionnaire, and the support
/// question was asked as a plain Yes/No rather than on the agreement
/// scale.
pub struct OnlineSource;

const COLUMN_MAP: &[(&str, &str)] = &[
    ("Do you use the Internet?", "internet_use_freq"),
    ("Do you have Internet in your home/business?", "has_internet_premise"),
    ("Who provides your home/business Internet service?", "isp_raw"),
    (
        "About how much is your monthly Internet service in your home/business (excluding mobile plans)?",
        "internet_price",
    ),
    ("Do you ONLY have Internet access through a mobile data plan?", "has_internet_mobile_only"),
    (
        "About how much is the price per month for your family's mobile service?",
        "mobile_price",
    ),
    (
        "Do you ONLY have Internet access through the generosity of someone who is not in your household (e.g. free wifi, a neighbor, at work, the library)?",
        "has_internet_ext_only",
    ),
    (
        "What do you dislike about your home/business Internet service? (check all that apply)",
        "dislikes",
    ),
    (
        "When there is a dispute with your home/business Internet provider, from which institutions can you get satisfaction? (check any that apply)",
        "dispute_resolvers",
    ),
    ("How important is it for students to have Internet access?", "importance_student"),
    (
        "How important is it for low-income families to have Internet access?",
        "importance_low_income",
    ),
    ("Do you support a publicly-owned telecommunications utility?", "support_utility"),
    (
        "How important is user input in governance of a public telecommunications utility?",
        "importance_user_input",
    ),
    ("How important is it that rates pay only for utility costs?", "importance_rates_direct"),
    (
        "Subscribers should subsidize access for families who can't afford home Internet access.",
        "subsidize_subscribers",
    ),
    (
        "Taxpayers should subsidize access for families who can't afford home Internet access.",
        "subsidize_taxpayers",
    ),
    (
        "I care enough about this issue that I would financially support a campaign to create a publicly-owned telecommunications utility.",
        "support_financial",
    ),
];

/// The online form asked about recency ("Within the last day") where the
/// canonical vocabulary speaks of frequency.
fn correct_use_freq(raw: &str) -> &str {
    match raw {
        "Within the last day" => "A few times per day",
        "Within the last week" => "A few times per week",
        "Within the last month" => "A few times per month",
        "Within the last year" => "A few times per year",
        other => other,
    }
}

fn correct_dislike(raw: &str) -> &str {
    match raw {
        "Lack of choices in providers" => "Lack of choice in providers",
        "Your subscription fees funding ISPs lobbying to tilt regulation in their favor" => {
            "Subscription fees funding providers' lobbying to tilt regulation in their favor"
        }
        other => other,
    }
}

fn correct_dispute_resolver(raw: &str) -> &str {
    match raw {
        "Office of Community Technology" => "Portland Office of Community Technology",
        "City Council" => "Portland City Council",
        "None of these institutions can/will help" => "None of these",
        other => other,
    }
}

impl SurveySource for OnlineSource {
    fn source_id(&self) -> &'static str {
        "online"
    }

    fn column_map(&self) -> &'static [(&'static str, &'static str)] {
        COLUMN_MAP
    }

    fn normalize(&self, raw: &RawRow) -> Option<NormalizedRow> {
        // Respondents claiming to never use the internet answered the
        // rest of the online form inconsistently; their rows are invalid.
        let freq_raw = raw.get("internet_use_freq");
        if freq_raw == Some("Never") {
            return None;
        }

        // The online form asked Yes/No; remap onto the ends of the
        // agreement scale before decoding.
        let support_code = match raw.get("support_utility") {
            Some("Yes") => Some(5.0),
            Some("No") => Some(1.0),
            _ => None,
        };

        let isp_raw = raw.get("isp_raw");

        let record = SurveyRecord {
            form: Some(Form::EnglishOnline),
            internet_use_freq: freq_raw.and_then(|s| UseFrequency::from_raw(correct_use_freq(s))),
            has_internet_premise: yes(raw.get("has_internet_premise")),
            has_internet_mobile_only: yes(raw.get("has_internet_mobile_only")),
            has_internet_ext_only: yes(raw.get("has_internet_ext_only")),
            internet_price: None,
            mobile_price: None,
            isp: isp_raw.map(Isp::from_raw),
            isp_tech: isp_raw.map(IspTech::from_raw_isp),
            dislikes: categorize_list(raw.get("dislikes"), ";", correct_dislike, Dislike::from_raw),
            dispute_resolvers: categorize_list(
                raw.get("dispute_resolvers"),
                ";",
                correct_dispute_resolver,
                DisputeResolver::from_raw,
            ),
            importance_student: Importance::from_code(scale_code(raw.get("importance_student"))),
            importance_low_income: Importance::from_code(scale_code(raw.get("importance_low_income"))),
            support_utility: Agreement::from_code(support_code),
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
