//! Notice kinds accepted by the `ptype` search filter.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Procurement type of a notice. The API identifies each type by a
/// single-letter code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcurementType {
    #[serde(rename = "u")]
    JustificationAndApproval,
    #[serde(rename = "p")]
    Presolicitation,
    #[serde(rename = "a")]
    AwardNotice,
    #[serde(rename = "r")]
    SourcesSought,
    #[serde(rename = "s")]
    SpecialNotice,
    #[serde(rename = "o")]
    Solicitation,
    #[serde(rename = "g")]
    SaleOfSurplusProperty,
    #[serde(rename = "k")]
    CombinedSynopsisSolicitation,
    #[serde(rename = "i")]
    IntentToBundleRequirements,
    #[serde(rename = "f")]
    ForeignGovernmentStandard,
    #[serde(rename = "l")]
    FairOpportunityLimitedSources,
}

impl ProcurementType {
    /// Every procurement type, in the order the API documents them.
    pub const ALL: [ProcurementType; 11] = [
        ProcurementType::JustificationAndApproval,
        ProcurementType::Presolicitation,
        ProcurementType::AwardNotice,
        ProcurementType::SourcesSought,
        ProcurementType::SpecialNotice,
        ProcurementType::Solicitation,
        ProcurementType::SaleOfSurplusProperty,
        ProcurementType::CombinedSynopsisSolicitation,
        ProcurementType::IntentToBundleRequirements,
        ProcurementType::ForeignGovernmentStandard,
        ProcurementType::FairOpportunityLimitedSources,
    ];

    /// The single-letter wire code sent as `ptype`.
    pub fn code(&self) -> &'static str {
        match self {
            ProcurementType::JustificationAndApproval => "u",
            ProcurementType::Presolicitation => "p",
            ProcurementType::AwardNotice => "a",
            ProcurementType::SourcesSought => "r",
            ProcurementType::SpecialNotice => "s",
            ProcurementType::Solicitation => "o",
            ProcurementType::SaleOfSurplusProperty => "g",
            ProcurementType::CombinedSynopsisSolicitation => "k",
            ProcurementType::IntentToBundleRequirements => "i",
            ProcurementType::ForeignGovernmentStandard => "f",
            ProcurementType::FairOpportunityLimitedSources => "l",
        }
    }

    /// Human-readable label, as sam.gov displays it.
    pub fn label(&self) -> &'static str {
        match self {
            ProcurementType::JustificationAndApproval => "Justification and Approval (J&A)",
            ProcurementType::Presolicitation => "Presolicitation",
            ProcurementType::AwardNotice => "Award Notice",
            ProcurementType::SourcesSought => "Sources Sought",
            ProcurementType::SpecialNotice => "Special Notice",
            ProcurementType::Solicitation => "Solicitation",
            ProcurementType::SaleOfSurplusProperty => "Sale of Surplus Property",
            ProcurementType::CombinedSynopsisSolicitation => "Combined Synopsis/Solicitation",
            ProcurementType::IntentToBundleRequirements => "Intent to Bundle Requirements",
            ProcurementType::ForeignGovernmentStandard => "Foreign Government Standard",
            ProcurementType::FairOpportunityLimitedSources => {
                "Fair Opportunity / Limited Sources Justification"
            }
        }
    }
}

impl std::fmt::Display for ProcurementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ProcurementType {
    type Err = ();

    /// Parses a wire code. Codes are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProcurementType::ALL
            .iter()
            .find(|ptype| ptype.code() == s)
            .copied()
            .ok_or(())
    }
}
