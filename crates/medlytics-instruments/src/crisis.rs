//! Crisis messaging shared by every instrument that screens for suicidal
//! ideation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CrisisResource {
    pub name: String,
    pub contact: String,
    pub available: String,
}

const RESOURCES: [(&str, &str, &str); 3] = [
    ("National Suicide Prevention Lifeline", "988 (US)", "24/7"),
    ("Crisis Text Line", "Text \"HELLO\" to 741741", "24/7"),
    (
        "International Association for Suicide Prevention",
        "https://www.iasp.info/resources/Crisis_Centres/",
        "Find local crisis centers",
    ),
];

/// The fixed crisis contact list, in display order.
pub fn crisis_resources() -> Vec<CrisisResource> {
    RESOURCES
        .iter()
        .map(|(name, contact, available)| CrisisResource {
            name: name.to_string(),
            contact: contact.to_string(),
            available: available.to_string(),
        })
        .collect()
}

/// Depression crisis messages, always the first three recommendations when
/// suicidal thoughts are reported.
pub const DEPRESSION_CRISIS_MESSAGES: [&str; 3] = [
    "🚨 CRISIS: Call National Suicide Prevention Lifeline: 988 (US) or 112 (India)",
    "🚨 EMERGENCY: Seek immediate help from a mental health professional or emergency room",
    "🚨 Tell someone you trust immediately - do not stay alone",
];

/// Anxiety crisis messages, used for suicidal ideation or a composite at
/// the severe boundary.
pub const ANXIETY_CRISIS_MESSAGES: [&str; 3] = [
    "🚨 URGENT: Contact a mental health crisis line immediately",
    "National Suicide Prevention Lifeline: 988 (US) or your local emergency number",
    "Seek immediate evaluation by a mental health professional",
];
