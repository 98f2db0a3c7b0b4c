//! Manifest diff: semantic comparison of two manifests, classifying each
//! change as breaking, additive, or neutral.

use std::collections::HashMap;

use crate::model::{ChangeCategory, ChangeEntry, ChangeKind, Manifest, NamedElement};

pub struct DiffSummary {
    pub breaking: usize,
    pub additive: usize,
    pub neutral: usize,
}

pub struct DiffResult {
    pub changes: Vec<ChangeEntry>,
    pub summary: DiffSummary,
    pub breaking: bool,
}

/// The rename-detection secondary key: everything but `agentId`/exact line.
fn rename_key(element: &NamedElement) -> (&str, &crate::model::ElementType, Option<&str>, Option<&str>) {
    (
        element.file_path.as_str(),
        &element.element_type,
        element.handler.as_deref(),
        element.label.as_deref(),
    )
}

fn lines_within_five(a: usize, b: usize) -> bool {
    a.abs_diff(b) <= 5
}

fn categorize_modified(before: &NamedElement, after: &NamedElement) -> ChangeCategory {
    if before.element_type != after.element_type {
        return ChangeCategory::Breaking;
    }
    ChangeCategory::Neutral
}

/// Compare two manifests, matching primarily by `agentId` and falling back
/// to a tuple match (`filePath`, `line±5`, `type`, `handler`, `label`) to
/// detect renames — an id change with everything else stable is reported as
/// a breaking `modified` entry rather than a `removed`+`added` pair.
pub fn diff_manifests(a: &Manifest, b: &Manifest) -> DiffResult {
    let by_id_a: HashMap<&str, &NamedElement> = a.elements.iter().map(|e| (e.agent_id.as_str(), e)).collect();
    let by_id_b: HashMap<&str, &NamedElement> = b.elements.iter().map(|e| (e.agent_id.as_str(), e)).collect();

    let mut matched_b_ids: std::collections::HashSet<&str> = std::collections::HashSet::new();
    let mut changes = Vec::new();

    for before in &a.elements {
        if let Some(after) = by_id_b.get(before.agent_id.as_str()) {
            matched_b_ids.insert(after.agent_id.as_str());
            if before == *after {
                continue;
            }
            let category = categorize_modified(before, after);
            changes.push(ChangeEntry {
                kind: ChangeKind::Modified,
                agent_id: before.agent_id.clone(),
                before: Some(before.clone()),
                after: Some((*after).clone()),
                category,
            });
            continue;
        }

        let candidates: Vec<&NamedElement> = b
            .elements
            .iter()
            .filter(|candidate| {
                !matched_b_ids.contains(candidate.agent_id.as_str())
                    && !by_id_a.contains_key(candidate.agent_id.as_str())
                    && rename_key(candidate) == rename_key(before)
                    && lines_within_five(candidate.line, before.line)
            })
            .collect();

        if candidates.len() == 1 {
            let after = candidates[0];
            matched_b_ids.insert(after.agent_id.as_str());
            changes.push(ChangeEntry {
                kind: ChangeKind::Modified,
                agent_id: after.agent_id.clone(),
                before: Some(before.clone()),
                after: Some(after.clone()),
                category: ChangeCategory::Breaking,
            });
        } else {
            changes.push(ChangeEntry {
                kind: ChangeKind::Removed,
                agent_id: before.agent_id.clone(),
                before: Some(before.clone()),
                after: None,
                category: ChangeCategory::Breaking,
            });
        }
    }

    for after in &b.elements {
        if matched_b_ids.contains(after.agent_id.as_str()) {
            continue;
        }
        changes.push(ChangeEntry {
            kind: ChangeKind::Added,
            agent_id: after.agent_id.clone(),
            before: None,
            after: Some(after.clone()),
            category: ChangeCategory::Additive,
        });
    }

    changes.sort_by(|x, y| x.category.cmp(&y.category).then_with(|| x.agent_id.cmp(&y.agent_id)));

    let mut summary = DiffSummary { breaking: 0, additive: 0, neutral: 0 };
    for change in &changes {
        match change.category {
            ChangeCategory::Breaking => summary.breaking += 1,
            ChangeCategory::Additive => summary.additive += 1,
            ChangeCategory::Neutral => summary.neutral += 1,
        }
    }

    let breaking = summary.breaking > 0;
    DiffResult { changes, summary, breaking }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementType, GeneratorInfo, ManifestMetadata};
    use std::collections::BTreeMap;

    fn named(agent_id: &str, line: usize, element_type: ElementType) -> NamedElement {
        NamedElement {
            agent_id: agent_id.to_string(),
            element_type,
            file_path: "src/app/page.tsx".to_string(),
            line,
            column: 1,
            component_name: None,
            route: None,
            label: Some("Click".to_string()),
            handler: None,
            attributes: BTreeMap::new(),
            conditional: false,
            dynamic: false,
        }
    }

    fn manifest(elements: Vec<NamedElement>) -> Manifest {
        Manifest {
            schema_version: "1.0".to_string(),
            generated_at: "2026-01-01T00:00:00Z".to_string(),
            generator: GeneratorInfo::default(),
            metadata: ManifestMetadata {
                framework: "app-router".to_string(),
                project_root: ".".to_string(),
                files_scanned: 1,
                elements_discovered: elements.len(),
                warnings: Vec::new(),
            },
            elements,
        }
    }

    #[test]
    fn identical_manifests_have_no_changes() {
        let m = manifest(vec![named("click.button", 1, ElementType::Button)]);
        let result = diff_manifests(&m, &m);
        assert!(result.changes.is_empty());
        assert!(!result.breaking);
    }

    #[test]
    fn removal_is_breaking() {
        let a = manifest(vec![
            named("click.button", 1, ElementType::Button),
            named("save.button", 5, ElementType::Button),
        ]);
        let b = manifest(vec![named("save.button", 5, ElementType::Button)]);

        let result = diff_manifests(&a, &b);
        assert!(result.breaking);
        assert_eq!(result.summary.breaking, 1);
        assert_eq!(result.changes[0].kind, ChangeKind::Removed);
        assert_eq!(result.changes[0].agent_id, "click.button");
    }

    #[test]
    fn addition_is_additive_and_not_breaking() {
        let a = manifest(vec![named("click.button", 1, ElementType::Button)]);
        let b = manifest(vec![
            named("click.button", 1, ElementType::Button),
            named("save.button", 5, ElementType::Button),
        ]);

        let result = diff_manifests(&a, &b);
        assert!(!result.breaking);
        assert_eq!(result.summary.additive, 1);
        assert_eq!(result.changes[0].kind, ChangeKind::Added);
    }

    #[test]
    fn type_change_on_stable_id_is_breaking() {
        let a = manifest(vec![named("click.button", 1, ElementType::Button)]);
        let b = manifest(vec![named("click.button", 1, ElementType::Div)]);

        let result = diff_manifests(&a, &b);
        assert!(result.breaking);
        assert_eq!(result.changes[0].category, ChangeCategory::Breaking);
    }

    #[test]
    fn line_only_change_on_stable_id_is_neutral() {
        let a = manifest(vec![named("click.button", 1, ElementType::Button)]);
        let b = manifest(vec![named("click.button", 8, ElementType::Button)]);

        let result = diff_manifests(&a, &b);
        assert!(!result.breaking);
        assert_eq!(result.changes[0].category, ChangeCategory::Neutral);
    }

    #[test]
    fn rename_detected_via_tuple_match_is_reported_as_breaking_modified() {
        let mut before = named("old.button", 1, ElementType::Button);
        before.label = Some("Click".to_string());
        let mut after = named("click.button", 2, ElementType::Button);
        after.label = Some("Click".to_string());

        let a = manifest(vec![before]);
        let b = manifest(vec![after]);

        let result = diff_manifests(&a, &b);
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].kind, ChangeKind::Modified);
        assert_eq!(result.changes[0].category, ChangeCategory::Breaking);
        assert_eq!(result.changes[0].agent_id, "click.button");
    }

    #[test]
    fn diffing_a_manifest_against_itself_is_the_empty_change_set() {
        // Full structural comparison (field-by-field diff on mismatch via
        // pretty_assertions), not just a length/emptiness check.
        use pretty_assertions::assert_eq;
        let m = manifest(vec![
            named("click.button", 1, ElementType::Button),
            named("save.button", 5, ElementType::Button),
        ]);
        assert_eq!(diff_manifests(&m, &m).changes, Vec::new());
    }

    #[test]
    fn changes_are_ordered_breaking_then_additive_then_neutral_by_agent_id() {
        let a = manifest(vec![
            named("a.button", 1, ElementType::Button),
            named("z.button", 2, ElementType::Button),
        ]);
        let b = manifest(vec![
            named("z.button", 9, ElementType::Button),
            named("new.button", 3, ElementType::Button),
        ]);

        let result = diff_manifests(&a, &b);
        let kinds: Vec<ChangeKind> = result.changes.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ChangeKind::Removed, ChangeKind::Added, ChangeKind::Modified]);
    }
}
