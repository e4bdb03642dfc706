//! Static reference text published with every pricebook document.

use crate::domain::model::LevelDescriptions;

pub const TERMS: [&str; 8] = [
    "All prices exclusive of taxes.",
    "5% Service Management fee on monthly billing.",
    "Travel >50km: $0.40/km extra.",
    "Business hours only; out-of-hours x1.5, weekends/holidays x2.",
    "Access denied: Full rate charged.",
    "Cancellation <24h: 50% charge.",
    "Transition costs at T&M.",
    "USA Tier 1 cities: Atlanta, Austin, etc.",
];

pub const L1_DESCRIPTION: &str =
    "Basic troubleshooting (network connectivity, password reset, equipment install). Min 6 months exp.";
pub const L2_DESCRIPTION: &str =
    "Advanced troubleshooting (logs, config routers/switches). Min 18 months exp.";
pub const L3_DESCRIPTION: &str =
    "Complex resolution (diagnostics, packet capture, design). Min 2 years exp.";
pub const L4_DESCRIPTION: &str =
    "Infrastructure mgmt, monitoring, security, vendor mgmt. 3-5 years exp.";
pub const L5_DESCRIPTION: &str = "Architecture, critical support, optimization, project lead.";

pub fn terms() -> Vec<String> {
    TERMS.iter().map(|term| term.to_string()).collect()
}

pub fn descriptions() -> LevelDescriptions {
    LevelDescriptions {
        l1: L1_DESCRIPTION.to_string(),
        l2: L2_DESCRIPTION.to_string(),
        l3: L3_DESCRIPTION.to_string(),
        l4: L4_DESCRIPTION.to_string(),
        l5: L5_DESCRIPTION.to_string(),
    }
}
