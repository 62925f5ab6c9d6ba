use super::tiebreak::TieBreak;
use super::{narrow, ObservedStat, SolverContext, SpreadHypothesis};
use crate::error::SolveError;
use crate::stats::GeneticParameters;

/// Running inference for one opposing creature.
///
/// Evidence is append-only. A conflicting observation is reported and
/// neither recorded nor allowed to touch the live set.
#[derive(Clone, Debug)]
pub struct SpreadTracker {
    creature_id: String,
    context: SolverContext,
    evidence: Vec<ObservedStat>,
    hypotheses: Vec<SpreadHypothesis>,
}

impl SpreadTracker {
    pub fn new(creature_id: &str, context: SolverContext) -> Self {
        Self {
            creature_id: creature_id.to_string(),
            hypotheses: context.prior(),
            context,
            evidence: Vec::new(),
        }
    }

    pub fn creature_id(&self) -> &str {
        &self.creature_id
    }

    pub fn context(&self) -> &SolverContext {
        &self.context
    }

    pub fn evidence(&self) -> &[ObservedStat] {
        &self.evidence
    }

    pub fn hypotheses(&self) -> &[SpreadHypothesis] {
        &self.hypotheses
    }

    pub fn observe(&mut self, observation: ObservedStat) -> Result<&[SpreadHypothesis], SolveError> {
        observation.validate()?;
        let next = narrow(&self.context, &self.creature_id, &self.hypotheses, &observation)?;
        self.evidence.push(observation);
        self.hypotheses = next;
        Ok(&self.hypotheses)
    }

    /// Back to the unconstrained prior, forgetting all evidence.
    pub fn reset(&mut self) {
        log::debug!("{}: reset after {} observations", self.creature_id, self.evidence.len());
        self.evidence.clear();
        self.hypotheses = self.context.prior();
    }

    /// The one spread left, if the evidence pins it down completely.
    pub fn unique(&self) -> Option<GeneticParameters> {
        match self.hypotheses.as_slice() {
            [only] => {
                let found = only.spreads(&self.context.constants, 1);
                if found.truncated {
                    None
                } else {
                    found.spreads.into_iter().next()
                }
            }
            _ => None,
        }
    }

    pub fn estimate(&self, strategy: &dyn TieBreak) -> Option<GeneticParameters> {
        strategy.pick(&self.context, &self.hypotheses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_data::{Stat, StatTable};
    use crate::error::ValidationError;
    use crate::generations::Generation;
    use crate::natures::NatureId;
    use crate::solver::{MaxOffense, ObservationSource};
    use crate::stats::project;

    fn tracker() -> SpreadTracker {
        let ctx = SolverContext::new(StatTable([108, 130, 95, 80, 85, 102]), 100, Generation::Gen9.constants()).unwrap();
        SpreadTracker::new("p2a: Garchomp", ctx)
    }

    fn seen(stat: Stat, value: u16) -> ObservedStat {
        ObservedStat::new(stat, value, ObservationSource::Turn(3))
    }

    #[test]
    fn test_observe_records_evidence() {
        let mut t = tracker();
        assert_eq!(t.hypotheses().len(), 25);
        let live = t.observe(seen(Stat::Atk, 394)).unwrap().len();
        assert!(live < 25);
        assert_eq!(t.evidence(), &[seen(Stat::Atk, 394)]);
        assert!(t.hypotheses().iter().all(|h| h.nature().is_some_and(|n| n.plus() == Some(Stat::Atk))));
    }

    #[test]
    fn test_conflict_leaves_state() {
        let mut t = tracker();
        t.observe(seen(Stat::Atk, 394)).unwrap();
        let before = t.hypotheses().to_vec();

        let err = t.observe(seen(Stat::Atk, 296)).unwrap_err();
        match err {
            SolveError::Conflict(conflict) => {
                assert_eq!(conflict.creature_id, "p2a: Garchomp");
                assert_eq!(conflict.prior, before);
            }
            other => panic!("expected conflict, got {other:?}"),
        }
        assert_eq!(t.hypotheses(), before.as_slice());
        assert_eq!(t.evidence().len(), 1);
    }

    #[test]
    fn test_invalid_observation() {
        let mut t = tracker();
        assert_eq!(
            t.observe(seen(Stat::Spe, 0)),
            Err(SolveError::Invalid(ValidationError::Observation { stat: Stat::Spe }))
        );
        assert!(t.evidence().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut t = tracker();
        t.observe(seen(Stat::Atk, 394)).unwrap();
        t.reset();
        assert!(t.evidence().is_empty());
        assert_eq!(t.hypotheses().len(), 25);
    }

    #[test]
    fn test_full_reveal_keeps_truth() {
        let mut t = tracker();
        assert_eq!(t.unique(), None);
        let g = GeneticParameters::modern(NatureId::Jolly, [31; 6], [0, 252, 4, 0, 0, 252]);
        let stats = project(&t.context().base_stats, 100, &g, false);
        for stat in Stat::ALL {
            t.observe(seen(stat, stats[stat])).unwrap();
        }
        assert!(t.hypotheses().iter().any(|h| h.contains(&g)));
        // IV/EV trade-offs leave several spreads per stat
        assert!(t.estimate(&MaxOffense).is_some());
    }
}
