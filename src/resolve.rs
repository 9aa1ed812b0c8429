//! Word resolver: maps scanned color clusters back to catalog words.

use crate::catalog::WordCatalog;
use crate::scan::ClusterMap;
use crate::types::WordPosition;

/// Resolve each cluster to the first catalog word whose color is within
/// `tolerance` on every channel.
///
/// Output follows cluster discovery order. Candidate words are tried in load
/// order, so with repeated palette colors the earliest word wins. Clusters
/// matching nothing are dropped; several clusters may resolve to one word.
#[must_use]
pub fn resolve(clusters: &ClusterMap, catalog: &WordCatalog, tolerance: u8) -> Vec<WordPosition> {
    let mut positions = Vec::new();
    let mut dropped = 0usize;

    for cluster in clusters {
        let rendered = cluster.color_key.rgb();
        let matched = catalog
            .colored_entries()
            .find(|(_, assigned)| assigned.matches_within(rendered, tolerance));

        match matched {
            Some((entry, _)) => positions.push(WordPosition::new(entry, cluster.bounds)),
            None => dropped += 1,
        }
    }

    log::debug!(
        "resolved {} of {} clusters ({} unmatched)",
        positions.len(),
        clusters.len(),
        dropped
    );
    positions
}
