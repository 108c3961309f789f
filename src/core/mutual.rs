use crate::core::criteria::{evaluate_dealbreakers, Pairing};
use crate::models::Profile;

/// Check if the candidate satisfies every one of the seeker's deal-breakers
///
/// One-directional: the candidate's own deal-breakers are not consulted.
#[inline]
pub fn matches_seeker_preferences(seeker: &Profile, candidate: &Profile) -> bool {
    passes_dealbreakers(&Pairing::new(seeker, candidate))
}

/// True when the judged party passes all of the owner's deal-breakers
pub fn passes_dealbreakers(pairing: &Pairing) -> bool {
    match evaluate_dealbreakers(pairing).find(|c| !c.matched) {
        Some(failed) => {
            tracing::trace!(
                "{} fails {}'s deal-breaker on {}",
                pairing.judged.user_id,
                pairing.owner.user_id,
                failed.name
            );
            false
        }
        None => true,
    }
}

/// Check whether two profiles are a mutual match
///
/// Same-gender pairs never match. Otherwise both sides' deal-breakers must pass in
/// both directions; non-deal-breaker preferences are ignored here.
pub fn is_mutual_match(a: &Profile, b: &Profile) -> bool {
    is_mutual_pairing(&Pairing::new(a, b))
}

/// Mutual match over an explicit pairing
pub fn is_mutual_pairing(pairing: &Pairing) -> bool {
    if pairing.owner.gender == pairing.judged.gender {
        return false;
    }

    passes_dealbreakers(pairing) && passes_dealbreakers(&pairing.reversed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn bride() -> Profile {
        let mut p = Profile::new("bride", Gender::Female);
        p.age = Some(26);
        p.religion = Some("Hindu".to_string());
        p
    }

    fn groom() -> Profile {
        let mut p = Profile::new("groom", Gender::Male);
        p.age = Some(29);
        p.religion = Some("Hindu".to_string());
        p
    }

    #[test]
    fn test_same_gender_never_matches() {
        let a = bride();
        let mut b = bride();
        b.user_id = "other".to_string();

        assert!(!is_mutual_match(&a, &b));
    }

    #[test]
    fn test_no_dealbreakers_is_mutual() {
        assert!(is_mutual_match(&bride(), &groom()));
    }

    #[test]
    fn test_non_dealbreaker_failure_is_ignored() {
        let mut a = bride();
        a.preferences.religion.values = vec!["Jain".to_string()];
        a.preferences.religion.is_dealbreaker = false;

        assert!(is_mutual_match(&a, &groom()));
    }

    #[test]
    fn test_reverse_direction_dealbreaker() {
        let a = bride();
        let mut b = groom();
        b.preferences.age.max = Some(25);
        b.preferences.age.is_dealbreaker = true;

        // a has no deal-breakers, so one-directional check passes
        assert!(matches_seeker_preferences(&a, &b));
        assert!(!matches_seeker_preferences(&b, &a));
        assert!(!is_mutual_match(&a, &b));
        assert!(!is_mutual_match(&b, &a));
    }

    #[test]
    fn test_both_directions_pass() {
        let mut a = bride();
        a.preferences.age.min = Some(27);
        a.preferences.age.max = Some(32);
        a.preferences.age.is_dealbreaker = true;

        let mut b = groom();
        b.preferences.religion.values = vec!["hindu".to_string()];
        b.preferences.religion.is_dealbreaker = true;

        assert!(is_mutual_match(&a, &b));
    }
}
