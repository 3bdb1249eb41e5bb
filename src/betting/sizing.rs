use crate::Chips;
use crate::Probability;

/// Bet a multiple of the big blind, never below the minimum raise.
pub fn bet_for_multiple(bb: Chips, multiple: f64, minimum_raise: Chips, stack: Chips) -> Chips {
    let target = (multiple * bb as f64).round() as Chips;
    target.max(minimum_raise).clamp(0, stack.max(0))
}

/// Raise so that our total contribution this street reaches `desired_total`.
pub fn raise_to_total(
    current_buy_in: Chips,
    to_call: Chips,
    minimum_raise: Chips,
    desired_total: Chips,
    stack: Chips,
) -> Chips {
    let extra = minimum_raise.max(desired_total.saturating_sub(current_buy_in));
    to_call.saturating_add(extra).clamp(0, stack.max(0))
}

/// The single legality gate every decision passes through last.
///
/// Zero is fold or check. Anything below the call folds. An exact call
/// stands. A raise smaller than `to_call + minimum_raise` shrinks to a
/// call; a raise of exactly that size is legal.
pub fn finalize(desired: Chips, to_call: Chips, minimum_raise: Chips, stack: Chips) -> Chips {
    let desired = desired.clamp(0, stack.max(0));
    if desired == 0 {
        return 0;
    }
    if desired < to_call {
        return 0;
    }
    if desired == to_call {
        return desired;
    }
    if minimum_raise <= 0 {
        return to_call.min(stack);
    }
    if desired < to_call.saturating_add(minimum_raise) {
        return to_call.min(stack);
    }
    desired
}

/// A fraction of the pot, at least one chip, capped at a share of the stack.
pub fn size_from_pot(pot: Chips, fraction: Probability, stack: Chips, cap: Probability) -> Chips {
    let amount = ((pot as f64 * fraction) as Chips).max(1);
    let ceiling = (stack as f64 * cap) as Chips;
    amount.min(ceiling).max(1)
}

/// Smallest legal raise, optionally bumped or lifted to an absolute size.
/// Degrades to a call when the stack or the minimum raise forbid raising.
pub fn legal_raise(
    to_call: Chips,
    minimum_raise: Chips,
    stack: Chips,
    bump: Chips,
    absolute: Option<Chips>,
) -> Chips {
    if stack <= to_call || minimum_raise <= 0 {
        return to_call.min(stack);
    }
    let floor = to_call.saturating_add(minimum_raise);
    let target = match absolute {
        Some(amount) => floor.max(amount),
        None => floor.saturating_add(bump),
    };
    target.max(floor).min(stack)
}

/// Lift `target` to at least the minimum legal raise, or call if we cannot.
pub fn promote_raise(to_call: Chips, minimum_raise: Chips, stack: Chips, target: Chips) -> Chips {
    let floor = to_call.saturating_add(minimum_raise);
    if minimum_raise <= 0 || stack < floor {
        return to_call.min(stack);
    }
    target.max(floor).min(stack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn multiple_of_big_blind() {
        assert!(bet_for_multiple(20, 2.5, 20, 1000) == 50);
        assert!(bet_for_multiple(20, 0.4, 20, 1000) == 20);
        assert!(bet_for_multiple(20, 100.0, 20, 300) == 300);
    }

    #[test]
    fn raise_to() {
        assert!(raise_to_total(20, 0, 20, 60, 1000) == 40);
        assert!(raise_to_total(20, 20, 20, 30, 1000) == 40);
        assert!(raise_to_total(100, 80, 100, 400, 250) == 250);
    }

    #[test]
    fn finalize_rules() {
        assert!(finalize(0, 50, 20, 1000) == 0);
        assert!(finalize(30, 50, 20, 1000) == 0);
        assert!(finalize(50, 50, 20, 1000) == 50);
        assert!(finalize(60, 50, 20, 1000) == 50);
        assert!(finalize(70, 50, 20, 1000) == 70);
        assert!(finalize(90, 50, 0, 1000) == 50);
        assert!(finalize(5000, 50, 20, 1000) == 1000);
        assert!(finalize(-7, 0, 20, 1000) == 0);
        assert!(finalize(40, 0, 20, 0) == 0);
    }

    #[test]
    fn finalize_idempotent() {
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let stack = rng.random_range(0..2_000);
            let to_call = rng.random_range(0..600);
            let minr = rng.random_range(-5..200);
            let desired = rng.random_range(-100..2_500);
            let once = finalize(desired, to_call, minr, stack);
            let twice = finalize(once, to_call, minr, stack);
            assert!(once == twice);
            assert!((0..=stack).contains(&once));
            assert!(once == 0 || once == to_call || once >= to_call + minr);
        }
    }

    #[test]
    fn pot_fractions() {
        assert!(size_from_pot(300, 0.5, 1000, 1.0) == 150);
        assert!(size_from_pot(0, 0.5, 1000, 1.0) == 1);
        assert!(size_from_pot(1000, 1.25, 600, 1.0) == 600);
        assert!(size_from_pot(1000, 1.25, 600, 0.5) == 300);
    }

    #[test]
    fn legal_raise_shapes() {
        assert!(legal_raise(0, 20, 1000, 0, None) == 20);
        assert!(legal_raise(40, 20, 1000, 20, None) == 80);
        assert!(legal_raise(40, 20, 1000, 0, Some(10)) == 60);
        assert!(legal_raise(40, 20, 1000, 0, Some(300)) == 300);
        assert!(legal_raise(40, 20, 30, 0, None) == 30);
        assert!(legal_raise(40, 0, 1000, 0, None) == 40);
    }

    #[test]
    fn promote() {
        assert!(promote_raise(40, 20, 1000, 10) == 60);
        assert!(promote_raise(40, 20, 1000, 200) == 200);
        assert!(promote_raise(40, 20, 50, 200) == 40);
        assert!(promote_raise(40, 0, 1000, 200) == 40);
    }
}
