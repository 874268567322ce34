//! Buff module - timed modifiers granted by clearing golden cubes
//!
//! The active set is keyed by kind: re-activating a buff refreshes its
//! remaining time, it never stacks. Instant effects (fall-interval changes,
//! hold reset) are applied by the controller at activation; this module only
//! tracks presence and remaining time, and answers the continuous scoring
//! queries.

use arrayvec::ArrayVec;

use goldfall_types::BuffKind;

/// One active buff with its remaining lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveBuff {
    pub kind: BuffKind,
    pub remaining_ms: u32,
}

/// The set of currently active buffs (at most one instance per kind)
#[derive(Debug, Clone, Default)]
pub struct BuffSet {
    active: ArrayVec<ActiveBuff, { BuffKind::ALL.len() }>,
}

impl BuffSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `kind`, refreshing its remaining time to the full duration
    /// if it is already present.
    pub fn activate(&mut self, kind: BuffKind) {
        let duration = kind.duration_ms();
        if let Some(buff) = self.active.iter_mut().find(|b| b.kind == kind) {
            buff.remaining_ms = duration;
        } else {
            self.active.push(ActiveBuff {
                kind,
                remaining_ms: duration,
            });
        }
    }

    pub fn is_active(&self, kind: BuffKind) -> bool {
        self.active.iter().any(|b| b.kind == kind)
    }

    /// Remaining time for `kind`, or None if inactive
    pub fn remaining_ms(&self, kind: BuffKind) -> Option<u32> {
        self.active
            .iter()
            .find(|b| b.kind == kind)
            .map(|b| b.remaining_ms)
    }

    /// Advance all buff timers by `elapsed_ms` and drop the exhausted ones.
    /// Returns the kinds that expired on this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> ArrayVec<BuffKind, { BuffKind::ALL.len() }> {
        let mut expired = ArrayVec::new();
        for buff in self.active.iter_mut() {
            buff.remaining_ms = buff.remaining_ms.saturating_sub(elapsed_ms);
            if buff.remaining_ms == 0 {
                expired.push(buff.kind);
            }
        }
        self.active.retain(|b| b.remaining_ms > 0);
        expired
    }

    /// Score multiplier for row clears: 2 while `double_score` is active
    pub fn score_multiplier(&self) -> u32 {
        if self.is_active(BuffKind::DoubleScore) {
            2
        } else {
            1
        }
    }

    /// Whether the 1.5x `line_bonus` applies to row clears
    pub fn line_bonus_active(&self) -> bool {
        self.is_active(BuffKind::LineBonus)
    }

    /// Whether any fall-interval-altering buff is active
    pub fn speed_altered(&self) -> bool {
        self.is_active(BuffKind::SpeedBoost) || self.is_active(BuffKind::SlowFall)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveBuff> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_and_expiry() {
        let mut buffs = BuffSet::new();
        buffs.activate(BuffKind::DoubleScore);
        assert!(buffs.is_active(BuffKind::DoubleScore));
        assert_eq!(
            buffs.remaining_ms(BuffKind::DoubleScore),
            Some(BuffKind::DoubleScore.duration_ms())
        );

        let expired = buffs.tick(BuffKind::DoubleScore.duration_ms());
        assert_eq!(expired.as_slice(), &[BuffKind::DoubleScore]);
        assert!(!buffs.is_active(BuffKind::DoubleScore));
        assert!(buffs.is_empty());
    }

    #[test]
    fn reactivation_refreshes_instead_of_stacking() {
        let mut buffs = BuffSet::new();
        buffs.activate(BuffKind::SpeedBoost);
        buffs.tick(3_000);
        assert_eq!(
            buffs.remaining_ms(BuffKind::SpeedBoost),
            Some(BuffKind::SpeedBoost.duration_ms() - 3_000)
        );

        buffs.activate(BuffKind::SpeedBoost);
        assert_eq!(buffs.len(), 1);
        assert_eq!(
            buffs.remaining_ms(BuffKind::SpeedBoost),
            Some(BuffKind::SpeedBoost.duration_ms())
        );

        // One full duration from the refresh, not from the first activation.
        buffs.tick(BuffKind::SpeedBoost.duration_ms() - 1);
        assert!(buffs.is_active(BuffKind::SpeedBoost));
        buffs.tick(1);
        assert!(!buffs.is_active(BuffKind::SpeedBoost));
    }

    #[test]
    fn partial_ticks_accumulate() {
        let mut buffs = BuffSet::new();
        buffs.activate(BuffKind::HoldReset);
        let duration = BuffKind::HoldReset.duration_ms();

        buffs.tick(duration / 2);
        assert!(buffs.is_active(BuffKind::HoldReset));
        buffs.tick(duration / 2);
        assert!(!buffs.is_active(BuffKind::HoldReset));
    }

    #[test]
    fn scoring_queries() {
        let mut buffs = BuffSet::new();
        assert_eq!(buffs.score_multiplier(), 1);
        assert!(!buffs.line_bonus_active());

        buffs.activate(BuffKind::DoubleScore);
        buffs.activate(BuffKind::LineBonus);
        assert_eq!(buffs.score_multiplier(), 2);
        assert!(buffs.line_bonus_active());
        assert!(!buffs.speed_altered());

        buffs.activate(BuffKind::SlowFall);
        assert!(buffs.speed_altered());
    }

    #[test]
    fn expiry_reports_only_exhausted_kinds() {
        let mut buffs = BuffSet::new();
        buffs.activate(BuffKind::HoldReset); // 3s
        buffs.activate(BuffKind::DoubleScore); // 10s

        let expired = buffs.tick(5_000);
        assert_eq!(expired.as_slice(), &[BuffKind::HoldReset]);
        assert!(buffs.is_active(BuffKind::DoubleScore));
    }
}
