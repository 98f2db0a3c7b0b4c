use std::collections::HashSet;

use crate::core::naming::segment::{component_segment, handler_segment, label_segment, route_segments};
use crate::model::{NamedElement, RawElement};

/// Compose the candidate agent id for one element, per the composition
/// rules: route segments, then a deduped component segment, then a purpose
/// segment (handler, else label, else `"el"`), then the element type.
fn compose_candidate(element: &RawElement) -> String {
    let mut segments: Vec<String> = Vec::new();

    let route_segs = element
        .route
        .as_deref()
        .map(route_segments)
        .unwrap_or_default();
    segments.extend(route_segs.iter().cloned());

    if let Some(component) = &element.component_name {
        let component_seg = component_segment(component);
        let last_route_matches_component = route_segs
            .last()
            .map(|last| last == &component_seg)
            .unwrap_or(false);
        if !component_seg.is_empty() && !last_route_matches_component {
            segments.push(component_seg);
        }
    }

    let purpose = element
        .handler
        .as_deref()
        .map(handler_segment)
        .filter(|s| !s.is_empty())
        .or_else(|| element.label.as_deref().map(label_segment).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "el".to_string());
    segments.push(purpose);

    segments.push(element.element_type.as_str().to_string());

    if segments.len() < 2 {
        segments.insert(0, "el".to_string());
    }

    segments.join(".")
}

/// Suffix the last dot-separated segment of an id with `-n`.
fn suffix_last_segment(id: &str, n: usize) -> String {
    match id.rsplit_once('.') {
        Some((prefix, last)) => format!("{prefix}.{last}-{n}"),
        None => format!("{id}-{n}"),
    }
}

fn dedupe(candidate: &str, used: &HashSet<String>) -> String {
    if !used.contains(candidate) {
        return candidate.to_string();
    }
    let mut n = 2;
    loop {
        let attempt = suffix_last_segment(candidate, n);
        if !used.contains(&attempt) {
            return attempt;
        }
        n += 1;
    }
}

/// Assign agent ids to a set of raw elements.
///
/// Elements are sorted by `(filePath, line, column)` first, fixing a
/// deterministic iteration order; naming is then a pure function of that
/// order, which is what makes identical scans produce identical manifests.
pub fn assign_agent_ids(mut elements: Vec<RawElement>) -> Vec<NamedElement> {
    elements.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let mut used: HashSet<String> = HashSet::new();
    let mut named = Vec::with_capacity(elements.len());

    for element in elements {
        let candidate = compose_candidate(&element);
        let id = dedupe(&candidate, &used);
        used.insert(id.clone());
        named.push(NamedElement::from_raw(element, id));
    }

    named
}
