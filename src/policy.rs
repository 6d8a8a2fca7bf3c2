//! Backup selection policy
//!
//! Decides which profiles may leave the device. Exclusion is silent: an
//! excluded profile is simply not part of the backup, and is dropped again
//! if it ever shows up in a blob being restored.

use std::fmt;

use crate::models::NetworkProfile;

/// Why a profile was kept out of a backup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// Enterprise credentials live in external keystores
    Enterprise,
    /// Passpoint credentials are provisioned by the operator
    Passpoint,
    /// Temporary network, never persisted
    Ephemeral,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enterprise => write!(f, "enterprise"),
            Self::Passpoint => write!(f, "passpoint"),
            Self::Ephemeral => write!(f, "ephemeral"),
        }
    }
}

/// The rule excluding this profile from backup, if any
pub fn exclusion_reason(profile: &NetworkProfile) -> Option<ExclusionReason> {
    if profile.security_type.is_enterprise() {
        Some(ExclusionReason::Enterprise)
    } else if profile.is_passpoint() {
        Some(ExclusionReason::Passpoint)
    } else if profile.ephemeral {
        Some(ExclusionReason::Ephemeral)
    } else {
        None
    }
}

/// Returns true if the profile may be backed up
pub fn is_backup_eligible(profile: &NetworkProfile) -> bool {
    exclusion_reason(profile).is_none()
}

/// The eligible profiles, in their original order
pub fn select_for_backup(profiles: &[NetworkProfile]) -> Vec<&NetworkProfile> {
    profiles
        .iter()
        .filter(|profile| match exclusion_reason(profile) {
            Some(reason) => {
                tracing::debug!(ssid = %profile.ssid, %reason, "excluding network from backup");
                false
            }
            None => true,
        })
        .collect()
}
