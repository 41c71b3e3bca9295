//! Damage mitigation math.

/// Applies defense to a raw hit:
///
/// ```text
/// mitigated = max(0, raw - defense)
/// ```
///
/// Both inputs are signed: debuffs can push an attacker's raw output below
/// zero, and negative defense amplifies the hit. The further clamp to the
/// target's remaining health happens at the resource pool, not here.
pub fn mitigate(raw: i64, defense: i64) -> u32 {
    (raw - defense).clamp(0, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defense_reduces_the_hit() {
        assert_eq!(mitigate(15, 2), 13);
        assert_eq!(mitigate(10, 0), 10);
    }

    #[test]
    fn overmitigated_hits_floor_at_zero() {
        assert_eq!(mitigate(3, 9), 0);
        assert_eq!(mitigate(-4, 2), 0);
    }

    #[test]
    fn negative_defense_amplifies() {
        assert_eq!(mitigate(5, -3), 8);
    }
}
