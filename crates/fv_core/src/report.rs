//! Presentation helpers shared by the front ends.
//!
//! The batch script, dashboard, and chat assistant all render the same
//! summary fields; the text building lives here so each front end stays
//! a thin adapter.

use std::fmt::Write;

use crate::analysis::summary::AnalysisSummary;

/// Render the summary as a plain-text report.
pub fn render_summary(summary: &AnalysisSummary) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "Processed {} frames.", summary.total_frames);
    let _ = writeln!(out, "Total passes detected: {}", summary.total_passes);

    if summary.pass_faults.is_empty() {
        let _ = writeln!(out, "No risky passes detected.");
    } else {
        let _ = writeln!(out, "Detected risky passes:");
        for fault in &summary.pass_faults {
            let _ = writeln!(
                out,
                "At frame {}: {} ({} pixels). Suggestion: {}",
                fault.frame, fault.kind, fault.distance_px as i64, fault.suggestion
            );
        }
    }

    if summary.shots.is_empty() {
        let _ = writeln!(out, "No shots detected.");
    } else {
        let _ = writeln!(out, "Detected shots:");
        for shot in &summary.shots {
            let area = if shot.in_penalty_area {
                "inside penalty area"
            } else {
                "outside penalty area"
            };
            let _ = writeln!(
                out,
                "At frame {}: X: {}, Y: {} ({}). Suggestion: {}",
                shot.frame,
                shot.position.0 as i64,
                shot.position.1 as i64,
                area,
                shot.suggestion()
            );
        }
    }

    out
}

/// Answer a free-text keyword query against a finished summary.
/// Keywords are matched case-insensitively in the order players, pass,
/// shot; anything else gets the usage hint.
pub fn answer_query(summary: &AnalysisSummary, query: &str) -> String {
    let q = query.to_lowercase();
    if q.contains("players") {
        "The model detects players in each frame and tracks the ball.".to_string()
    } else if q.contains("pass") {
        format!(
            "Total passes detected: {} with {} risky passes flagged.",
            summary.total_passes,
            summary.pass_faults.len()
        )
    } else if q.contains("shot") {
        format!(
            "Shots detected: {}. Suggestions based on shot positions are provided.",
            summary.shots.len()
        )
    } else {
        "You can ask about 'players', 'passes', or 'shots'.".to_string()
    }
}
