//! `uic find <query>`: a small scored subsequence matcher over agent ids,
//! labels, and handlers.
//!
//! Per spec §6 this command's existence is in the core CLI surface even
//! though the fuzzy-matching algorithm itself is named as an external,
//! out-of-scope collaborator. This is a deliberately simple, self-contained
//! scorer rather than a reimplementation of any particular external matcher.

use anyhow::Result;
use serde_json::json;

use crate::cli::args::FindArgs;
use crate::cli::commands::manifest_io::read_manifest;
use crate::cli::exit_status::ExitStatus;
use crate::model::NamedElement;
use crate::utils::pad_to;

/// Subsequence match score against `haystack`: `None` if `needle` is not a
/// subsequence, else matched-char count minus a gap penalty (so tighter
/// matches outrank loose ones).
fn subsequence_score(needle: &str, haystack: &str) -> Option<i64> {
    if needle.is_empty() {
        return Some(0);
    }
    let haystack_lower = haystack.to_lowercase();
    let needle_lower = needle.to_lowercase();

    let mut score: i64 = 0;
    let mut gap = 0i64;
    let mut chars = haystack_lower.chars();
    let mut matched = 0usize;

    for needle_char in needle_lower.chars() {
        let mut found = false;
        for c in chars.by_ref() {
            if c == needle_char {
                found = true;
                score += 2 - gap.min(2);
                gap = 0;
                matched += 1;
                break;
            }
            gap += 1;
        }
        if !found {
            return None;
        }
    }

    Some(score + matched as i64)
}

fn best_score(query: &str, element: &NamedElement) -> Option<i64> {
    let mut best: Option<i64> = subsequence_score(query, &element.agent_id);
    if let Some(label) = &element.label {
        if let Some(score) = subsequence_score(query, label) {
            best = Some(best.map_or(score, |b| b.max(score)));
        }
    }
    if let Some(handler) = &element.handler {
        if let Some(score) = subsequence_score(query, handler) {
            best = Some(best.map_or(score, |b| b.max(score)));
        }
    }
    best
}

pub fn run(args: FindArgs) -> Result<ExitStatus> {
    let manifest = read_manifest(&args.manifest)?;

    let mut scored: Vec<(i64, &NamedElement)> = manifest
        .elements
        .iter()
        .filter_map(|e| best_score(&args.query, e).map(|score| (score, e)))
        .collect();

    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b.cmp(score_a).then_with(|| a.agent_id.len().cmp(&b.agent_id.len()))
    });
    scored.truncate(args.top);

    if args.json {
        let payload: Vec<_> = scored
            .iter()
            .map(|(score, e)| json!({ "score": score, "element": e }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if scored.is_empty() {
        println!("no matches");
    } else {
        for (score, element) in &scored {
            println!("{} {} {}", pad_to(&score.to_string(), 6), pad_to(&element.agent_id, 40), element.file_path);
        }
    }

    Ok(ExitStatus::from(true))
}
