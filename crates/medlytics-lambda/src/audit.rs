use medlytics_core::models::analysis::AnalysisKind;
use medlytics_core::models::risk::RiskLevel;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Create,
    Read,
    List,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::Create => "analysis.create",
            AuditAction::Read => "analysis.read",
            AuditAction::List => "analysis.list",
        }
    }
}

/// One access to stored analyses, logged as a single `audit` line.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEvent<'a> {
    pub action: AuditAction,
    pub kind: AnalysisKind,
    pub subject: &'a str,
    pub analysis_id: Option<Uuid>,
    pub risk_level: Option<RiskLevel>,
    pub count: Option<usize>,
}

impl<'a> AuditEvent<'a> {
    pub fn new(action: AuditAction, kind: AnalysisKind, subject: &'a str) -> Self {
        Self {
            action,
            kind,
            subject,
            analysis_id: None,
            risk_level: None,
            count: None,
        }
    }

    pub fn analysis(mut self, id: Uuid) -> Self {
        self.analysis_id = Some(id);
        self
    }

    pub fn risk_level(mut self, level: Option<RiskLevel>) -> Self {
        self.risk_level = level;
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn emit(&self) {
        info!(
            audit.action = self.action.as_str(),
            audit.kind = %self.kind,
            audit.subject = self.subject,
            audit.analysis_id = self.analysis_id.map(tracing::field::display),
            audit.risk_level = self.risk_level.map(tracing::field::display),
            audit.count = self.count,
            "audit event"
        );
    }
}
