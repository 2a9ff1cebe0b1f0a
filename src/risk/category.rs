use serde::{Deserialize, Serialize};

/// Risk tier for end-user display. Totally ordered, contiguous over the
/// score range: every score in 0–100 maps to exactly one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskCategory {
    Safe,
    LimitedAccess,
    BroadAccess,
    HighAccess,
    CriticalAccess,
}

impl RiskCategory {
    /// Map a clamped score to its tier. Thresholds are inclusive upper
    /// bounds.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=15 => Self::Safe,
            16..=39 => Self::LimitedAccess,
            40..=69 => Self::BroadAccess,
            70..=84 => Self::HighAccess,
            _ => Self::CriticalAccess,
        }
    }

    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "safe" => Some(Self::Safe),
            "limited" | "limited-access" => Some(Self::LimitedAccess),
            "broad" | "broad-access" => Some(Self::BroadAccess),
            "high" | "high-access" => Some(Self::HighAccess),
            "critical" | "critical-access" => Some(Self::CriticalAccess),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::LimitedAccess => "Limited Access",
            Self::BroadAccess => "Broad Access",
            Self::HighAccess => "High Access",
            Self::CriticalAccess => "Critical Access",
        }
    }

    /// Severity color token for badge rendering.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::LimitedAccess => "low-risk",
            Self::BroadAccess => "medium-risk",
            Self::HighAccess => "high-risk",
            Self::CriticalAccess => "very-high",
        }
    }

    /// Generic tooltip text for the tier.
    pub fn tooltip(&self) -> &'static str {
        match self {
            Self::Safe => "No permissions or only safe, user-invoked permissions.",
            Self::LimitedAccess => {
                "Requests limited browser features (e.g., storage, alarms). \
                 Cannot access web content."
            }
            Self::BroadAccess => {
                "Can access some browsing data (e.g., tabs, bookmarks) or modify \
                 specific site settings. Review permissions."
            }
            Self::HighAccess => {
                "Can read/change data on some or all websites, or access sensitive \
                 info (e.g., history, cookies, clipboard)."
            }
            Self::CriticalAccess => {
                "Has system-level access (e.g., proxy, native messaging) or can \
                 read/change data on all sites. Trust is essential."
            }
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
