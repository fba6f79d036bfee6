//! Pure partition of candidates into per-stage buckets.

use std::collections::HashMap;

use crate::models::Candidate;

/// Group candidates by their current interview step name.
///
/// Bucket contents keep the input order. A candidate whose step name
/// matches no known step still lands in a bucket under that name; the
/// renderers only draw buckets for known steps, so such a candidate
/// never appears on the board.
pub fn group_by_step(candidates: &[Candidate]) -> HashMap<String, Vec<Candidate>> {
    let mut grouped: HashMap<String, Vec<Candidate>> = HashMap::new();
    for candidate in candidates {
        grouped
            .entry(candidate.current_interview_step.clone())
            .or_default()
            .push(candidate.clone());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: i64, name: &str, step: &str) -> Candidate {
        Candidate {
            id,
            full_name: name.to_string(),
            current_interview_step: step.to_string(),
            average_score: 3.0,
            application_id: id + 100,
        }
    }

    #[test]
    fn test_group_by_step_empty() {
        let grouped = group_by_step(&[]);
        assert!(grouped.is_empty());
    }

    #[test]
    fn test_group_by_step_partitions_every_candidate_once() {
        let candidates = vec![
            candidate(1, "Ada", "Phone Screen"),
            candidate(2, "Grace", "Technical Interview"),
            candidate(3, "Alan", "Phone Screen"),
        ];

        let grouped = group_by_step(&candidates);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["Phone Screen"].len(), 2);
        assert_eq!(grouped["Technical Interview"].len(), 1);

        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, candidates.len());
    }

    #[test]
    fn test_group_by_step_preserves_input_order_within_bucket() {
        let candidates = vec![
            candidate(1, "Ada", "Phone Screen"),
            candidate(2, "Grace", "Phone Screen"),
            candidate(3, "Alan", "Phone Screen"),
        ];

        let grouped = group_by_step(&candidates);
        let ids: Vec<i64> = grouped["Phone Screen"].iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_group_by_step_unknown_step_forms_own_bucket() {
        let candidates = vec![
            candidate(1, "Ada", "Phone Screen"),
            candidate(2, "Grace", "Renamed Step"),
        ];

        let grouped = group_by_step(&candidates);
        assert_eq!(grouped["Renamed Step"].len(), 1);
        assert_eq!(grouped["Renamed Step"][0].id, 2);
    }
}
