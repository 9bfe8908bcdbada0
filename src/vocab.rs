use serde::{Deserialize, Serialize};

/// Which questionnaire a response came from.
///
/// This vocabulary has no catch-all: a form label outside the set is
/// treated as absent rather than collapsed to "Other".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Form {
    #[serde(rename = "English Online")]
    EnglishOnline,
    #[serde(rename = "English Q9NP")]
    EnglishQ9np,
    #[serde(rename = "English Q9P")]
    EnglishQ9p,
    #[serde(rename = "Spanish")]
    Spanish,
}

impl Form {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "English Online" => Some(Self::EnglishOnline),
            "English Q9NP" => Some(Self::EnglishQ9np),
            "English Q9P" => Some(Self::EnglishQ9p),
            "Spanish" => Some(Self::Spanish),
            _ => None,
        }
    }
}

/// How often the respondent uses the internet. No catch-all variant;
/// unrecognized answers are treated as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UseFrequency {
    #[serde(rename = "All day, every day")]
    AllDayEveryDay,
    #[serde(rename = "A few times per day")]
    FewTimesPerDay,
    #[serde(rename = "A few times per week")]
    FewTimesPerWeek,
    #[serde(rename = "A few times per month")]
    FewTimesPerMonth,
    #[serde(rename = "A few times per year")]
    FewTimesPerYear,
    #[serde(rename = "Never")]
    Never,
}

impl UseFrequency {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "All day, every day" => Some(Self::AllDayEveryDay),
            "A few times per day" => Some(Self::FewTimesPerDay),
            "A few times per week" => Some(Self::FewTimesPerWeek),
            "A few times per month" => Some(Self::FewTimesPerMonth),
            "A few times per year" => Some(Self::FewTimesPerYear),
            "Never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Internet service providers named on both questionnaires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Isp {
    #[serde(rename = "Comcast")]
    Comcast,
    #[serde(rename = "CenturyLink")]
    CenturyLink,
    #[serde(rename = "Frontier")]
    Frontier,
    #[serde(rename = "A fixed wireless provider (microwave)")]
    FixedWireless,
    #[serde(rename = "Another fiber provider")]
    AnotherFiber,
    #[serde(rename = "A dial-up provider")]
    DialUp,
    #[serde(rename = "Other")]
    Other,
}

impl Isp {
    /// Categorize a raw ISP answer. Both questionnaires spell out the
    /// provider's technology for CenturyLink and Frontier; those collapse
    /// to the provider name here and feed [`IspTech`] separately.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Comcast" => Self::Comcast,
            "CenturyLink" | "CenturyLink (fiber)" | "CenturyLink (DSL)" => Self::CenturyLink,
            "Frontier" | "Frontier (fiber)" | "Frontier (DSL)" => Self::Frontier,
            "A fixed wireless provider (microwave)" => Self::FixedWireless,
            "Another fiber provider" => Self::AnotherFiber,
            "A dial-up provider" => Self::DialUp,
            _ => Self::Other,
        }
    }
}

/// Last-mile technology, derived from the same raw ISP answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IspTech {
    #[serde(rename = "Cable")]
    Cable,
    #[serde(rename = "Fiber")]
    Fiber,
    #[serde(rename = "DSL")]
    Dsl,
    #[serde(rename = "Fixed wireless")]
    FixedWireless,
    #[serde(rename = "Dial-up")]
    DialUp,
    #[serde(rename = "Other")]
    Other,
}

impl IspTech {
    pub fn from_raw_isp(raw: &str) -> Self {
        match raw {
            "Comcast" => Self::Cable,
            "CenturyLink (fiber)" | "Frontier (fiber)" | "Another fiber provider" => Self::Fiber,
            "CenturyLink (DSL)" | "Frontier (DSL)" => Self::Dsl,
            "A fixed wireless provider (microwave)" => Self::FixedWireless,
            "A dial-up provider" => Self::DialUp,
            _ => Self::Other,
        }
    }
}

/// Things respondents dislike about their service (multiple choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dislike {
    #[serde(rename = "Price")]
    Price,
    #[serde(rename = "Reliability")]
    Reliability,
    #[serde(rename = "Customer service")]
    CustomerService,
    #[serde(rename = "Billing")]
    Billing,
    #[serde(rename = "Lack of choice in providers")]
    LackOfChoice,
    #[serde(rename = "Download speed")]
    DownloadSpeed,
    #[serde(rename = "Upload speed")]
    UploadSpeed,
    #[serde(rename = "Bandwidth caps")]
    BandwidthCaps,
    #[serde(rename = "Lack of network neutrality guarantees")]
    LackOfNetNeutrality,
    #[serde(rename = "Lack of privacy guarantees")]
    LackOfPrivacy,
    #[serde(rename = "Subscription fees funding providers' lobbying to tilt regulation in their favor")]
    FeesFundLobbying,
    #[serde(rename = "Other")]
    Other,
}

impl Dislike {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Price" => Self::Price,
            "Reliability" => Self::Reliability,
            "Customer service" => Self::CustomerService,
            "Billing" => Self::Billing,
            "Lack of choice in providers" => Self::LackOfChoice,
            "Download speed" => Self::DownloadSpeed,
            "Upload speed" => Self::UploadSpeed,
            "Bandwidth caps" => Self::BandwidthCaps,
            "Lack of network neutrality guarantees" => Self::LackOfNetNeutrality,
            "Lack of privacy guarantees" => Self::LackOfPrivacy,
            "Subscription fees funding providers' lobbying to tilt regulation in their favor" => {
                Self::FeesFundLobbying
            }
            _ => Self::Other,
        }
    }
}

/// Institutions a respondent believes can resolve a provider dispute
/// (multiple choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisputeResolver {
    #[serde(rename = "The provider itself")]
    Provider,
    #[serde(rename = "US Congress")]
    UsCongress,
    #[serde(rename = "Federal Communications Commission")]
    Fcc,
    #[serde(rename = "State legislature")]
    StateLegislature,
    #[serde(rename = "Oregon Public Utilities Commission")]
    OregonPuc,
    #[serde(rename = "Oregon Department of Justice")]
    OregonDoj,
    #[serde(rename = "Mount Hood Cable Regulatory Commission")]
    MountHoodCableCommission,
    #[serde(rename = "Portland Office of Community Technology")]
    PortlandOct,
    #[serde(rename = "Portland City Council")]
    PortlandCityCouncil,
    #[serde(rename = "None of these")]
    NoneOfThese,
    #[serde(rename = "Other")]
    Other,
}

impl DisputeResolver {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "The provider itself" => Self::Provider,
            "US Congress" => Self::UsCongress,
            "Federal Communications Commission" => Self::Fcc,
            "State legislature" => Self::StateLegislature,
            "Oregon Public Utilities Commission" => Self::OregonPuc,
            "Oregon Department of Justice" => Self::OregonDoj,
            "Mount Hood Cable Regulatory Commission" => Self::MountHoodCableCommission,
            "Portland Office of Community Technology" => Self::PortlandOct,
            "Portland City Council" => Self::PortlandCityCouncil,
            "None of these" => Self::NoneOfThese,
            _ => Self::Other,
        }
    }
}

/// Five-point importance scale, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Importance {
    #[serde(rename = "Not important")]
    NotImportant,
    #[serde(rename = "Less important")]
    LessImportant,
    #[serde(rename = "Somewhat important")]
    SomewhatImportant,
    #[serde(rename = "More important")]
    MoreImportant,
    #[serde(rename = "Very important")]
    VeryImportant,
}

impl Importance {
    const SCALE: [Self; 5] = [
        Self::NotImportant,
        Self::LessImportant,
        Self::SomewhatImportant,
        Self::MoreImportant,
        Self::VeryImportant,
    ];

    /// Decode a raw 1-based scale code. Absent answers decode to the
    /// weakest category; out-of-range codes clamp to the scale ends.
    pub fn from_code(code: Option<f64>) -> Self {
        Self::SCALE[decode_ordinal(code)]
    }
}

/// Five-point agreement scale, ordered from strongest disagreement to
/// strongest agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Agreement {
    #[serde(rename = "Strongly disagree")]
    StronglyDisagree,
    #[serde(rename = "Somewhat disagree")]
    SomewhatDisagree,
    #[serde(rename = "Neither agree nor disagree")]
    NeitherAgreeNorDisagree,
    #[serde(rename = "Somewhat agree")]
    SomewhatAgree,
    #[serde(rename = "Strongly agree")]
    StronglyAgree,
}

impl Agreement {
    const SCALE: [Self; 5] = [
        Self::StronglyDisagree,
        Self::SomewhatDisagree,
        Self::NeitherAgreeNorDisagree,
        Self::SomewhatAgree,
        Self::StronglyAgree,
    ];

    /// Decode a raw 1-based scale code, with the same absent/out-of-range
    /// policy as [`Importance::from_code`].
    pub fn from_code(code: Option<f64>) -> Self {
        Self::SCALE[decode_ordinal(code)]
    }
}

/// Shared 1-based-code-to-index decode for the five-point scales.
fn decode_ordinal(code: Option<f64>) -> usize {
    match code {
        Some(c) if c.is_finite() => ((c as i64) - 1).clamp(0, 4) as usize,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importance_decode() {
        assert_eq!(Importance::from_code(Some(3.0)), Importance::SomewhatImportant);
        assert_eq!(Importance::from_code(Some(1.0)), Importance::NotImportant);
        assert_eq!(Importance::from_code(Some(5.0)), Importance::VeryImportant);
        // Absent answers are treated as the weakest category
        assert_eq!(Importance::from_code(None), Importance::NotImportant);
        // Out-of-range codes clamp
        assert_eq!(Importance::from_code(Some(0.0)), Importance::NotImportant);
        assert_eq!(Importance::from_code(Some(9.0)), Importance::VeryImportant);
    }

    #[test]
    fn test_agreement_decode() {
        assert_eq!(Agreement::from_code(Some(5.0)), Agreement::StronglyAgree);
        assert_eq!(Agreement::from_code(None), Agreement::StronglyDisagree);
    }

    #[test]
    fn test_isp_synonyms_collapse_to_provider() {
        assert_eq!(Isp::from_raw("CenturyLink (fiber)"), Isp::CenturyLink);
        assert_eq!(Isp::from_raw("CenturyLink (DSL)"), Isp::CenturyLink);
        assert_eq!(Isp::from_raw("Frontier (fiber)"), Isp::Frontier);
        assert_eq!(Isp::from_raw("Some local WISP"), Isp::Other);
    }

    #[test]
    fn test_isp_tech_derived_from_same_answer() {
        assert_eq!(IspTech::from_raw_isp("Comcast"), IspTech::Cable);
        assert_eq!(IspTech::from_raw_isp("CenturyLink (fiber)"), IspTech::Fiber);
        assert_eq!(IspTech::from_raw_isp("CenturyLink (DSL)"), IspTech::Dsl);
        assert_eq!(IspTech::from_raw_isp("Another fiber provider"), IspTech::Fiber);
        assert_eq!(IspTech::from_raw_isp("Some local WISP"), IspTech::Other);
    }

    #[test]
    fn test_unmatched_form_is_absent_not_other() {
        assert_eq!(Form::from_raw("Klingon"), None);
        assert_eq!(Form::from_raw("English Q9P"), Some(Form::EnglishQ9p));
    }

    #[test]
    fn test_dislike_serializes_to_canonical_string() {
        let json = serde_json::to_string(&Dislike::FeesFundLobbying).unwrap();
        assert_eq!(
            json,
            "\"Subscription fees funding providers' lobbying to tilt regulation in their favor\""
        );
    }
}
