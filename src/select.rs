//! Best-candidate selection.

use crate::search::scan::MatchCandidate;

/// Returns the candidate with the greatest fitness.
///
/// Only a strictly greater fitness displaces the current leader, so ties keep
/// the earliest candidate in iteration order. An empty sequence yields
/// `None`. The whole sequence is consumed; with a lazy candidate source this
/// bounds memory, not latency.
pub fn select_best<I>(candidates: I) -> Option<MatchCandidate>
where
    I: IntoIterator<Item = MatchCandidate>,
{
    let mut best: Option<MatchCandidate> = None;
    for candidate in candidates {
        let leads = match &best {
            Some(leader) => candidate.fitness > leader.fitness,
            None => true,
        };
        if leads {
            best = Some(candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::select_best;
    use crate::search::scan::MatchCandidate;

    fn candidate(x: usize, y: usize, fitness: f32) -> MatchCandidate {
        MatchCandidate { x, y, fitness }
    }

    #[test]
    fn empty_sequence_has_no_best() {
        assert_eq!(select_best(Vec::new()), None);
    }

    #[test]
    fn picks_strict_maximum() {
        let best = select_best(vec![
            candidate(0, 0, 0.4),
            candidate(3, 1, 0.9),
            candidate(1, 2, 0.7),
        ])
        .unwrap();
        assert_eq!((best.x, best.y), (3, 1));
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        let best = select_best(vec![
            candidate(2, 5, 0.8),
            candidate(4, 0, 0.8),
            candidate(0, 1, 0.8),
        ])
        .unwrap();
        assert_eq!((best.x, best.y), (2, 5));
    }
}
