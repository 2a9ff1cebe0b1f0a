use crate::AuditReport;

/// Render audit reports as human-readable console output.
pub fn render(reports: &[AuditReport]) -> String {
    let mut output = String::new();

    for report in reports {
        let version = report
            .version
            .as_deref()
            .map(|v| format!(" v{}", v))
            .unwrap_or_default();
        output.push_str(&format!("\n  {}{}\n", report.extension_name, version));

        let verified = if report.verified_publisher {
            " [verified publisher]"
        } else {
            ""
        };
        output.push_str(&format!(
            "  Risk: {}/100 ({}){}\n",
            report.assessment.score,
            report.assessment.category.label(),
            verified
        ));
        output.push_str(&format!("  {}\n\n", report.summary.headline));

        for line in report.summary.explanation.lines() {
            output.push_str(&format!("    {}\n", line));
        }
        output.push('\n');

        if report.permissions.is_empty() {
            output.push_str("  No permissions requested.\n");
        } else {
            output.push_str(&format!("  Permissions ({}):\n", report.permissions.len()));
            for perm in &report.permissions {
                output.push_str(&format!("    [{:>3}] {}\n", perm.weight, perm.id));
            }
        }

        if !report.pass {
            output.push_str("\n  Result: FAIL (risk tier at or above threshold)\n");
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::{RiskAssessment, RiskBreakdown, RiskCategory, RiskSummary};
    use crate::{AuditReport, AuditedPermission};

    fn sample_report() -> AuditReport {
        AuditReport {
            extension_name: "Sample".into(),
            version: Some("1.2.3".into()),
            verified_publisher: true,
            assessment: RiskAssessment {
                score: 64,
                breakdown: RiskBreakdown {
                    base: 74,
                    trust_adjustment: -10,
                    highest_risk: None,
                    ..Default::default()
                },
                category: RiskCategory::BroadAccess,
            },
            summary: RiskSummary {
                headline: "Can access some browsing data.".into(),
                explanation: "Score breakdown (score 64/100)".into(),
            },
            permissions: vec![AuditedPermission {
                id: "tabs".into(),
                weight: 40,
                description: "tabs".into(),
            }],
            pass: true,
        }
    }

    #[test]
    fn renders_name_score_and_permissions() {
        let out = render(&[sample_report()]);
        assert!(out.contains("Sample v1.2.3"));
        assert!(out.contains("Risk: 64/100 (Broad Access) [verified publisher]"));
        assert!(out.contains("[ 40] tabs"));
        assert!(!out.contains("FAIL"));
    }

    #[test]
    fn failing_report_shows_verdict() {
        let mut report = sample_report();
        report.pass = false;
        let out = render(&[report]);
        assert!(out.contains("Result: FAIL"));
    }
}
