// Copyright 2026 Hypermesh Foundation. All rights reserved.
// PARGIRH Water Governance Suite ("The Basin") - Audit Log

//! Session-scoped decision register.
//!
//! No in-place mutation APIs are exposed: every committed decision becomes
//! one more record, which preserves full accountability for the lifetime
//! of the session. Entries live in memory only and are discarded when the
//! session ends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

// ─── AuditEntry ──────────────────────────────────────────────────────────────

/// One committed decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditEntry {
    /// Arrival rank, strictly increasing across the session. Serializes
    /// appends even if several logical actors share one session.
    pub seq: u64,
    pub timestamp: DateTime<Utc>,
    /// Responsible party, as entered by the operator.
    pub authority: String,
    /// The administrative action taken.
    pub action: String,
    /// Technical justification recorded alongside the action.
    pub justification: String,
}

// ─── AuditLog ────────────────────────────────────────────────────────────────

/// Append-only, most-recent-first decision log.
#[derive(Debug, Default, Clone)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
    next_seq: u64,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a decision. The entry is stamped with the wall clock and the
    /// next arrival rank, then inserted at the head of the sequence.
    pub fn append(
        &mut self,
        authority: impl Into<String>,
        action: impl Into<String>,
        justification: impl Into<String>,
    ) -> &AuditEntry {
        let entry = AuditEntry {
            seq: self.next_seq,
            timestamp: Utc::now(),
            authority: authority.into(),
            action: action.into(),
            justification: justification.into(),
        };
        self.next_seq += 1;
        info!(seq = entry.seq, authority = %entry.authority, "decision recorded");
        self.entries.insert(0, entry);
        &self.entries[0]
    }

    /// Full ordered sequence, most recent first.
    pub fn list_all(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
