//! Span resolution: filter, order, and de-overlap scanner output.
//!
//! The ordering is contractual: earlier start first, then longer span,
//! then higher score. The greedy sweep therefore resolves nested
//! detections to the outermost, highest-information match.

use std::cmp::Ordering;
use std::collections::HashSet;

use cloak_core::entity::{EntityMatch, EntityType};
use cloak_core::errors::{CloakError, CloakResult};

/// Produce the non-overlapping, left-to-right emission list.
pub fn resolve_spans(
    mut matches: Vec<EntityMatch>,
    skip_types: &HashSet<EntityType>,
    allow_list: &HashSet<String>,
) -> CloakResult<Vec<EntityMatch>> {
    matches.retain(|m| !skip_types.contains(&m.entity_type));
    matches.retain(|m| !allow_list.contains(&m.text));
    matches.retain(|m| !m.is_empty());

    matches.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.len().cmp(&a.len()))
            .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
    });

    let mut resolved: Vec<EntityMatch> = Vec::with_capacity(matches.len());
    for m in matches {
        match resolved.last() {
            Some(last) if m.start < last.end => {}
            _ => resolved.push(m),
        }
    }

    verify_no_overlap(&resolved)?;
    Ok(resolved)
}

/// Post-resolution invariant check. A violation here is a protocol error:
/// the request aborts and the full span dump goes to the log.
fn verify_no_overlap(spans: &[EntityMatch]) -> CloakResult<()> {
    for pair in spans.windows(2) {
        if pair[1].start < pair[0].end {
            tracing::error!(spans = ?spans, "overlap survived span resolution");
            return Err(CloakError::protocol(format!(
                "overlap after resolution: [{}..{}) then [{}..{})",
                pair[0].start, pair[0].end, pair[1].start, pair[1].end
            )));
        }
    }
    Ok(())
}
