use crate::models::TimeStep;
use gcd::Gcd;

fn lcm(a: TimeStep, b: TimeStep) -> TimeStep {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / a.gcd(b)).saturating_mul(b)
}

pub fn multiple_lcm(numbers: &[TimeStep]) -> TimeStep {
    numbers.iter().fold(1, |acc, &x| lcm(acc, x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_lcm() {
        assert_eq!(multiple_lcm(&[4, 6, 10]), 60);
        assert_eq!(multiple_lcm(&[7]), 7);
        assert_eq!(multiple_lcm(&[]), 1);
    }

    #[test]
    fn test_lcm_with_zero() {
        assert_eq!(multiple_lcm(&[3, 0]), 0);
    }
}
