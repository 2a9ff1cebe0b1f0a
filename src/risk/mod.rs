//! Permission risk scoring.
//!
//! The engine is pure and synchronous: it reads a permission list and a
//! trust flag, resolves weights through the catalog, and produces a
//! composite score with a per-component breakdown. Nothing here holds
//! state, so assessments can run concurrently across a batch of
//! extensions with no coordination.
//!
//! Score composition: a weighted base (the single most dangerous
//! permission dominates), synergy bonuses for dangerous permission
//! *combinations*, a breadth bonus for wide host-pattern grabs, and a
//! discount for verified publishers.

pub mod category;
pub mod summary;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, PermissionCatalog};

pub use category::RiskCategory;
pub use summary::{summarize, RiskSummary};

/// The permission that set the base score, kept for attribution in the
/// breakdown text. Ties keep the first-encountered permission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighestRisk {
    pub permission: String,
    pub weight: u32,
}

/// Per-component score contributions. Immutable once produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub base: u32,
    pub synergy_bonus: u32,
    pub host_bonus: u32,
    pub trust_adjustment: i32,
    pub highest_risk: Option<HighestRisk>,
}

/// A complete assessment: clamped score, breakdown, and display tier.
/// A pure computed value — recomputed on demand, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub breakdown: RiskBreakdown,
    pub category: RiskCategory,
}

impl RiskAssessment {
    /// The degenerate zero assessment: empty permission sets and any
    /// internal numeric anomaly both resolve here rather than erroring.
    fn zero() -> Self {
        Self {
            score: 0,
            breakdown: RiskBreakdown::default(),
            category: RiskCategory::Safe,
        }
    }
}

/// Assess a permission set. Never fails: unrecognized permissions are a
/// normal fallback case, and a non-finite intermediate resolves to the
/// zero assessment.
pub fn assess(
    catalog: &PermissionCatalog,
    permissions: &[String],
    verified_publisher: bool,
) -> RiskAssessment {
    if permissions.is_empty() {
        return RiskAssessment::zero();
    }

    let mut highest: Option<HighestRisk> = None;
    let mut max: u32 = 0;
    let mut sum: u64 = 0;

    for p in permissions {
        let weight = catalog.weight_of(p);
        sum += u64::from(weight);
        // strictly greater: ties keep the first permission at that weight
        if weight > max {
            max = weight;
            highest = Some(HighestRisk {
                permission: p.clone(),
                weight,
            });
        }
    }

    let avg = sum as f64 / permissions.len() as f64;
    // The single most dangerous permission dominates; the average gives
    // breadth of moderate permissions a secondary say. Round half away
    // from zero.
    let base = (0.7 * f64::from(max) + 0.3 * avg).round();

    let synergy_bonus = synergy_bonus(permissions);

    // Many discrete site patterns approach full-host risk without ever
    // triggering the full-host weight.
    let host_count = permissions
        .iter()
        .filter(|p| catalog::is_host_pattern(p) && !catalog::is_all_urls(p))
        .count();
    let host_bonus: u32 = if host_count > 15 {
        20
    } else if host_count > 5 {
        10
    } else {
        0
    };

    let trust_adjustment: i32 = if verified_publisher { -10 } else { 0 };

    let total =
        base + f64::from(synergy_bonus) + f64::from(host_bonus) + f64::from(trust_adjustment);
    if !total.is_finite() {
        return RiskAssessment::zero();
    }
    let score = total.round().clamp(0.0, 100.0) as u32;

    RiskAssessment {
        score,
        breakdown: RiskBreakdown {
            base: base as u32,
            synergy_bonus,
            host_bonus,
            trust_adjustment,
            highest_risk: highest,
        },
        category: RiskCategory::from_score(score),
    }
}

fn has(permissions: &[String], id: &str) -> bool {
    permissions.iter().any(|p| p == id)
}

pub(crate) fn has_full_host_access(permissions: &[String]) -> bool {
    permissions.iter().any(|p| catalog::is_all_urls(p))
}

pub(crate) fn has_injection(permissions: &[String]) -> bool {
    has(permissions, "scripting") || has(permissions, "userScripts")
}

pub(crate) fn has_network_observation(permissions: &[String]) -> bool {
    has(permissions, "webRequest") || has(permissions, "webRequestBlocking")
}

/// Bonuses for permission pairs that enable an attack class neither
/// permission enables alone. Each check is independent; all accumulate.
fn synergy_bonus(permissions: &[String]) -> u32 {
    let full_host = has_full_host_access(permissions);
    let injection = has_injection(permissions);
    let net_observe = has_network_observation(permissions);

    let mut bonus = 0;
    if injection && full_host {
        bonus += 15; // code injection on every site
    }
    if net_observe && full_host {
        bonus += 10; // traffic inspection on every site
    }
    if has(permissions, "cookies") && full_host {
        bonus += 10; // session hijacking on every site
    }
    if has(permissions, "clipboardRead") && injection {
        bonus += 10; // paste-jacking / keylogging
    }
    if has(permissions, "nativeMessaging") && (injection || net_observe) {
        bonus += 20; // exfiltration to a local process
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn perms(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn builtin() -> &'static PermissionCatalog {
        PermissionCatalog::builtin()
    }

    #[test]
    fn empty_set_scores_zero() {
        let a = assess(builtin(), &[], false);
        assert_eq!(a.score, 0);
        assert_eq!(a.category, RiskCategory::Safe);
        assert_eq!(a.breakdown.base, 0);
        assert!(a.breakdown.highest_risk.is_none());
    }

    #[test]
    fn active_tab_alone_is_safe() {
        let a = assess(builtin(), &perms(&["activeTab"]), false);
        assert!(a.score <= 15);
        assert_eq!(a.category, RiskCategory::Safe);
    }

    #[test]
    fn storage_and_alarms_stay_safe() {
        // max 15, avg 10 -> base round(10.5 + 3.0) = 14
        let a = assess(builtin(), &perms(&["storage", "alarms"]), false);
        assert_eq!(a.breakdown.base, 14);
        assert_eq!(a.breakdown.synergy_bonus, 0);
        assert_eq!(a.breakdown.host_bonus, 0);
        assert!(a.score <= 15);
        assert_eq!(a.category, RiskCategory::Safe);
    }

    #[test]
    fn scripting_on_all_urls_is_critical() {
        // max 85, avg 77.5 -> base round(59.5 + 23.25) = 83, +15 synergy
        let a = assess(builtin(), &perms(&["scripting", "<all_urls>"]), false);
        assert_eq!(a.breakdown.base, 83);
        assert_eq!(a.breakdown.synergy_bonus, 15);
        assert_eq!(a.score, 98);
        assert_eq!(a.category, RiskCategory::CriticalAccess);
        assert_eq!(
            a.breakdown.highest_risk.as_ref().unwrap().permission,
            "scripting"
        );
    }

    #[test]
    fn native_messaging_with_web_request_clamps_to_100() {
        // max 100, avg 90 -> base round(70 + 27) = 97, +20 synergy -> 117
        let a = assess(builtin(), &perms(&["nativeMessaging", "webRequest"]), false);
        assert_eq!(a.breakdown.base, 97);
        assert_eq!(a.breakdown.synergy_bonus, 20);
        assert_eq!(a.score, 100);
        assert_eq!(a.category, RiskCategory::CriticalAccess);
    }

    #[test]
    fn all_synergies_accumulate() {
        let a = assess(
            builtin(),
            &perms(&[
                "scripting",
                "webRequest",
                "cookies",
                "clipboardRead",
                "nativeMessaging",
                "<all_urls>",
            ]),
            false,
        );
        assert_eq!(a.breakdown.synergy_bonus, 15 + 10 + 10 + 10 + 20);
        assert_eq!(a.score, 100);
    }

    #[test]
    fn unknown_permission_uses_fallback_weight() {
        let a = assess(builtin(), &perms(&["fooBarBaz"]), false);
        assert_eq!(a.breakdown.base, 50);
        let hr = a.breakdown.highest_risk.unwrap();
        assert_eq!(hr.permission, "fooBarBaz");
        assert_eq!(hr.weight, 50);
    }

    #[test]
    fn tie_keeps_first_encountered_permission() {
        let a = assess(builtin(), &perms(&["scripting", "userScripts"]), false);
        assert_eq!(
            a.breakdown.highest_risk.unwrap().permission,
            "scripting"
        );
        let b = assess(builtin(), &perms(&["userScripts", "scripting"]), false);
        assert_eq!(
            b.breakdown.highest_risk.unwrap().permission,
            "userScripts"
        );
    }

    #[test]
    fn host_breadth_bonus_thresholds() {
        let hosts = |n: usize| -> Vec<String> {
            (0..n)
                .map(|i| format!("*://site{}.example.com/*", i))
                .collect()
        };

        assert_eq!(assess(builtin(), &hosts(5), false).breakdown.host_bonus, 0);
        assert_eq!(assess(builtin(), &hosts(6), false).breakdown.host_bonus, 10);
        assert_eq!(assess(builtin(), &hosts(15), false).breakdown.host_bonus, 10);
        assert_eq!(assess(builtin(), &hosts(16), false).breakdown.host_bonus, 20);
    }

    #[test]
    fn full_host_markers_do_not_count_toward_breadth() {
        let mut p = vec!["*://*/*".to_string(), "<all_urls>".to_string()];
        p.extend((0..6).map(|i| format!("*://site{}.example.com/*", i)));
        let a = assess(builtin(), &p, false);
        // six discrete patterns trip the >5 tier; the markers themselves don't count
        assert_eq!(a.breakdown.host_bonus, 10);
    }

    #[test]
    fn verified_publisher_discounts_exactly_ten() {
        let p = perms(&["cookies", "history"]);
        let unverified = assess(builtin(), &p, false);
        let verified = assess(builtin(), &p, true);
        assert_eq!(verified.breakdown.trust_adjustment, -10);
        assert_eq!(unverified.score - verified.score, 10);
    }

    #[test]
    fn verified_discount_clamps_at_floor() {
        let a = assess(builtin(), &perms(&["activeTab"]), true);
        assert_eq!(a.score, 0);
    }

    #[test]
    fn base_monotone_in_max_weight() {
        let low = assess(builtin(), &perms(&["tabs", "storage"]), false);
        let high = assess(builtin(), &perms(&["cookies", "storage"]), false);
        assert!(high.breakdown.base >= low.breakdown.base);
    }

    const SAMPLE: &[&str] = &[
        "scripting",
        "userScripts",
        "webRequest",
        "webRequestBlocking",
        "cookies",
        "clipboardRead",
        "nativeMessaging",
        "debugger",
        "proxy",
        "<all_urls>",
        "*://*/*",
        "storage",
        "alarms",
        "activeTab",
        "tabs",
        "history",
    ];

    fn any_permission() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(SAMPLE).prop_map(str::to_string),
            "[a-zA-Z]{1,12}",
            r"\*://[a-z]{1,8}\.example\.com/\*",
        ]
    }

    fn permission_lists() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(any_permission(), 0..24)
    }

    proptest! {
        #[test]
        fn score_always_within_range(p in permission_lists(), verified in any::<bool>()) {
            let a = assess(builtin(), &p, verified);
            prop_assert!(a.score <= 100);
        }

        #[test]
        fn score_is_order_independent(p in permission_lists(), verified in any::<bool>()) {
            let mut reversed = p.clone();
            reversed.reverse();
            prop_assert_eq!(
                assess(builtin(), &p, verified).score,
                assess(builtin(), &reversed, verified).score
            );
        }

        #[test]
        fn verification_never_raises_score(p in permission_lists()) {
            prop_assert!(
                assess(builtin(), &p, true).score <= assess(builtin(), &p, false).score
            );
        }
    }
}
