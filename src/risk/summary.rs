//! Natural-language rendering of an assessment: a short capability
//! headline plus a line-item breakdown explanation. Plain text only;
//! embedding in markup is the caller's concern.

use serde::{Deserialize, Serialize};

use super::{has_full_host_access, has_injection, has_network_observation, RiskBreakdown};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSummary {
    pub headline: String,
    pub explanation: String,
}

/// Summarize an assessment for display. Only ever invoked with the score
/// and breakdown produced by [`assess`](super::assess).
pub fn summarize(permissions: &[String], score: u32, breakdown: &RiskBreakdown) -> RiskSummary {
    RiskSummary {
        headline: headline(permissions, score),
        explanation: explanation(score, breakdown),
    }
}

fn headline(permissions: &[String], score: u32) -> String {
    if permissions.is_empty() {
        return "No permissions requested.".to_string();
    }

    let has = |id: &str| permissions.iter().any(|p| p == id);

    if score <= 15 && has("activeTab") {
        return "Accesses active tab when clicked. Low risk.".to_string();
    }

    // Capability indicators in fixed priority order. The full-host checks
    // are an else-if chain: injection outranks observation outranks read.
    let mut capabilities: Vec<&str> = Vec::new();
    if has("nativeMessaging") {
        capabilities.push("run software on your computer");
    }
    if has("proxy") || has("vpnProvider") {
        capabilities.push("intercept all network traffic");
    }
    if has("debugger") {
        capabilities.push("take full control of pages");
    }
    if has_full_host_access(permissions) {
        if has_injection(permissions) {
            capabilities.push("read and change all websites");
        } else if has_network_observation(permissions) {
            capabilities.push("inspect traffic on all websites");
        } else {
            capabilities.push("read data on all websites");
        }
    }
    if has("clipboardRead") {
        capabilities.push("read your clipboard");
    }
    if has("history") {
        capabilities.push("read your browsing history");
    }
    if has("cookies") {
        capabilities.push("access your website cookies");
    }

    match capabilities.as_slice() {
        [] => {
            if score <= 39 {
                "Accesses limited browser features.".to_string()
            } else if score <= 69 {
                "Can access some browsing data.".to_string()
            } else {
                "Accesses sensitive data. Review permissions.".to_string()
            }
        }
        [only] => format!("Can {}.", only),
        [first, second, ..] => format!("Can {} and {}.", first, second),
    }
}

fn explanation(score: u32, breakdown: &RiskBreakdown) -> String {
    if score == 0 {
        return "No scorable permissions found.".to_string();
    }

    let mut lines = vec![format!("Score breakdown (score {}/100)", score)];
    if breakdown.base > 0 {
        if let Some(hr) = &breakdown.highest_risk {
            lines.push(format!("Base Risk: +{} (from '{}')", breakdown.base, hr.permission));
        }
    }
    if breakdown.synergy_bonus > 0 {
        lines.push(format!("Permission Synergy: +{}", breakdown.synergy_bonus));
    }
    if breakdown.host_bonus > 0 {
        lines.push(format!("Wide Host Access: +{}", breakdown.host_bonus));
    }
    if breakdown.trust_adjustment < 0 {
        lines.push(format!("Verified Publisher: {}", breakdown.trust_adjustment));
    }
    lines.join("\n")
}
