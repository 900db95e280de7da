//! Object key conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the
//! canonical layout of analysis records in the Medlytics bucket:
//!
//! - `analyses/{kind}/anonymous/{id}.json` for submissions without a caller
//! - `analyses/{kind}/users/{subject}/{id}.json` for authenticated callers,
//!   with the subject base64url-encoded

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use uuid::Uuid;

use crate::models::analysis::AnalysisKind;

/// Owner segment used for submissions made without a caller identity.
pub const ANONYMOUS_OWNER: &str = "anonymous";

pub const ANALYSES_PREFIX: &str = "analyses/";

const USERS_SEGMENT: &str = "users/";

/// Path segment for an owner.
///
/// Subjects are encoded into the `users/` namespace, so distinct subjects
/// always map to distinct segments and none of them reaches `anonymous`.
pub fn owner_segment(owner_id: Option<&str>) -> String {
    match owner_id {
        Some(owner) if !owner.is_empty() => {
            format!("{USERS_SEGMENT}{}", URL_SAFE_NO_PAD.encode(owner))
        }
        _ => ANONYMOUS_OWNER.to_string(),
    }
}

pub fn history_prefix(kind: AnalysisKind, owner_id: Option<&str>) -> String {
    format!("{ANALYSES_PREFIX}{kind}/{}/", owner_segment(owner_id))
}

pub fn analysis(kind: AnalysisKind, owner_id: Option<&str>, id: Uuid) -> String {
    format!("{}{id}.json", history_prefix(kind, owner_id))
}
