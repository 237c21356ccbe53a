//! # Voting Fund View

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vela_core::effects::FundInfo;

/// Governance voting fund state for the active wallet
///
/// Best-effort: `current` is `None` whenever the fetch failed, parsed to
/// nothing, or no fund is active. All three suppress the voting banner the
/// same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundInfoState {
    /// The active fund, if one was reported
    pub current: Option<FundInfo>,
}

impl FundInfoState {
    /// Whether the voting banner should show at the given instant
    pub fn is_registration_open(&self, now: DateTime<Utc>) -> bool {
        self.current
            .as_ref()
            .is_some_and(|fund| fund.is_registration_open(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn absent_fund_suppresses_banner() {
        let state = FundInfoState::default();
        assert!(!state.is_registration_open(Utc::now()));
    }

    #[test]
    fn open_window_shows_banner() {
        let state = FundInfoState {
            current: Some(FundInfo {
                registration_start: Utc.with_ymd_and_hms(2021, 10, 1, 0, 0, 0).unwrap(),
                registration_end: Utc.with_ymd_and_hms(2021, 10, 15, 0, 0, 0).unwrap(),
            }),
        };
        let inside = Utc.with_ymd_and_hms(2021, 10, 7, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2021, 11, 1, 0, 0, 0).unwrap();
        assert!(state.is_registration_open(inside));
        assert!(!state.is_registration_open(after));
    }
}
