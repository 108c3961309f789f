//! Per-dimension criterion evaluation.
//!
//! Each dimension is a row in [`RULES`]: how to evaluate the preference owner's
//! preference against the judged party, and (for ordinal dimensions) how far outside
//! the preferred range the judged party falls. The bidirectional algorithms only ever
//! walk this table, so adding a dimension means adding a row.

use chrono::{NaiveDate, Utc};

use crate::core::ordinal::{height_position, EducationRequirement};
use crate::core::relocation::{can_excuse_location_mismatch, Party};
use crate::models::{Criterion, Dimension, ListPreference, Profile, ValuePreference};

/// One direction of evaluation: `owner`'s preferences judged against `judged`'s attributes
#[derive(Debug, Clone, Copy)]
pub struct Pairing<'a> {
    pub owner: &'a Profile,
    pub judged: &'a Profile,
    /// Reference date for deriving age from date of birth
    pub today: NaiveDate,
}

impl<'a> Pairing<'a> {
    pub fn new(owner: &'a Profile, judged: &'a Profile) -> Self {
        Self::on(owner, judged, Utc::now().date_naive())
    }

    pub fn on(owner: &'a Profile, judged: &'a Profile, today: NaiveDate) -> Self {
        Self { owner, judged, today }
    }

    /// The same pair seen from the other side
    pub fn reversed(&self) -> Pairing<'a> {
        Pairing {
            owner: self.judged,
            judged: self.owner,
            today: self.today,
        }
    }
}

/// Result of a single check before it is labelled with its dimension
#[derive(Debug, Clone, Copy)]
struct Outcome {
    matched: bool,
    is_dealbreaker: bool,
}

/// Strategy record for a single dimension
pub struct DimensionRule {
    pub dimension: Dimension,
    check: fn(&Pairing) -> Option<Outcome>,
    /// Distance outside the owner's preferred range, for tolerance-eligible dimensions.
    /// `None` from the inner function means the distance is not measurable.
    deviation: Option<fn(&Pairing) -> Option<u16>>,
}

impl DimensionRule {
    /// Evaluate this dimension; `None` when the owner expressed no preference
    pub fn evaluate(&self, pairing: &Pairing) -> Option<Criterion> {
        (self.check)(pairing).map(|outcome| Criterion {
            name: self.dimension,
            matched: outcome.matched,
            is_dealbreaker: outcome.is_dealbreaker,
        })
    }

    pub fn is_tolerance_eligible(&self) -> bool {
        self.deviation.is_some()
    }

    /// How far outside the owner's preferred range the judged party falls
    pub fn deviation(&self, pairing: &Pairing) -> Option<u16> {
        self.deviation.and_then(|f| f(pairing))
    }
}

pub static RULES: [DimensionRule; 14] = [
    DimensionRule { dimension: Dimension::Age, check: check_age, deviation: Some(age_deviation) },
    DimensionRule { dimension: Dimension::Height, check: check_height, deviation: Some(height_deviation) },
    DimensionRule { dimension: Dimension::Religion, check: check_religion, deviation: None },
    DimensionRule { dimension: Dimension::MaritalStatus, check: check_marital_status, deviation: None },
    DimensionRule { dimension: Dimension::Diet, check: check_diet, deviation: None },
    DimensionRule { dimension: Dimension::Community, check: check_community, deviation: None },
    DimensionRule { dimension: Dimension::Gotra, check: check_gotra, deviation: None },
    DimensionRule { dimension: Dimension::Education, check: check_education, deviation: None },
    DimensionRule { dimension: Dimension::Income, check: check_income, deviation: None },
    DimensionRule { dimension: Dimension::Smoking, check: check_smoking, deviation: None },
    DimensionRule { dimension: Dimension::Drinking, check: check_drinking, deviation: None },
    DimensionRule { dimension: Dimension::Location, check: check_location, deviation: None },
    DimensionRule { dimension: Dimension::HasChildren, check: check_has_children, deviation: None },
    DimensionRule { dimension: Dimension::MotherTongue, check: check_mother_tongue, deviation: None },
];

/// Look up the rule for a dimension. Rows are laid out in `Dimension` declaration order.
#[inline]
pub fn rule(dimension: Dimension) -> &'static DimensionRule {
    &RULES[dimension as usize]
}

/// Evaluate a single dimension in one direction
#[inline]
pub fn evaluate(dimension: Dimension, pairing: &Pairing) -> Option<Criterion> {
    rule(dimension).evaluate(pairing)
}

/// Evaluate every dimension the owner holds a preference on
pub fn evaluate_all(pairing: &Pairing) -> Vec<Criterion> {
    RULES.iter().filter_map(|r| r.evaluate(pairing)).collect()
}

/// Evaluate only the owner's deal-breaker dimensions
pub fn evaluate_dealbreakers<'p>(pairing: &'p Pairing<'p>) -> impl Iterator<Item = Criterion> + 'p {
    RULES
        .iter()
        .filter_map(move |r| r.evaluate(pairing))
        .filter(|c| c.is_dealbreaker)
}

fn check_age(p: &Pairing) -> Option<Outcome> {
    let pref = &p.owner.preferences.age;
    if !pref.is_set() {
        return None;
    }

    let matched = match p.judged.age_on(p.today) {
        Some(age) => pref.min.map_or(true, |min| age >= min) && pref.max.map_or(true, |max| age <= max),
        None => true,
    };

    Some(Outcome { matched, is_dealbreaker: pref.is_dealbreaker })
}

fn age_deviation(p: &Pairing) -> Option<u16> {
    let pref = &p.owner.preferences.age;
    let age = p.judged.age_on(p.today)?;

    let below = pref.min.map_or(0, |min| min.saturating_sub(age));
    let above = pref.max.map_or(0, |max| age.saturating_sub(max));
    Some(u16::from(below.max(above)))
}

/// Preferred height bounds as ladder positions; unparseable bounds are dropped
fn height_bounds(p: &Pairing) -> (Option<u16>, Option<u16>) {
    let pref = &p.owner.preferences.height;
    let min = pref.min.as_deref().and_then(height_position);
    let max = pref.max.as_deref().and_then(height_position);
    (min, max)
}

fn judged_height<'a>(p: &Pairing<'a>) -> Option<&'a str> {
    p.judged.height.as_deref().filter(|h| !h.trim().is_empty())
}

fn check_height(p: &Pairing) -> Option<Outcome> {
    let (min, max) = height_bounds(p);
    if min.is_none() && max.is_none() {
        return None;
    }

    let matched = match judged_height(p) {
        Some(height) => match height_position(height) {
            Some(pos) => min.map_or(true, |m| pos >= m) && max.map_or(true, |m| pos <= m),
            None => {
                tracing::debug!("Unparseable height {:?} for {}", height, p.judged.user_id);
                false
            }
        },
        None => true,
    };

    Some(Outcome {
        matched,
        is_dealbreaker: p.owner.preferences.height.is_dealbreaker,
    })
}

fn height_deviation(p: &Pairing) -> Option<u16> {
    let (min, max) = height_bounds(p);
    let pos = height_position(judged_height(p)?)?;

    let below = min.map_or(0, |m| m.saturating_sub(pos));
    let above = max.map_or(0, |m| pos.saturating_sub(m));
    Some(below.max(above))
}

/// Case-insensitive equality against a single-value preference
fn value_outcome(pref: &ValuePreference, attribute: Option<&str>) -> Option<Outcome> {
    let target = pref.target()?;
    let matched = attribute
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map_or(true, |a| a.eq_ignore_ascii_case(target.trim()));

    Some(Outcome { matched, is_dealbreaker: pref.is_dealbreaker })
}

/// Case-insensitive membership against a list preference
fn list_outcome(pref: &ListPreference, attribute: Option<&str>) -> Option<Outcome> {
    if !pref.is_set() {
        return None;
    }
    let matched = attribute
        .filter(|a| !a.trim().is_empty())
        .map_or(true, |a| pref.contains(a));

    Some(Outcome { matched, is_dealbreaker: pref.is_dealbreaker })
}

fn check_religion(p: &Pairing) -> Option<Outcome> {
    list_outcome(&p.owner.preferences.religion, p.judged.religion.as_deref())
}

fn check_marital_status(p: &Pairing) -> Option<Outcome> {
    value_outcome(&p.owner.preferences.marital_status, p.judged.marital_status.as_deref())
}

fn check_diet(p: &Pairing) -> Option<Outcome> {
    value_outcome(&p.owner.preferences.diet, p.judged.dietary_preference.as_deref())
}

fn check_community(p: &Pairing) -> Option<Outcome> {
    value_outcome(&p.owner.preferences.community, p.judged.community.as_deref())
}

fn check_gotra(p: &Pairing) -> Option<Outcome> {
    value_outcome(&p.owner.preferences.gotra, p.judged.gotra.as_deref())
}

fn check_mother_tongue(p: &Pairing) -> Option<Outcome> {
    value_outcome(&p.owner.preferences.mother_tongue, p.judged.mother_tongue.as_deref())
}

fn check_smoking(p: &Pairing) -> Option<Outcome> {
    value_outcome(&p.owner.preferences.smoking, p.judged.smoking.as_deref())
}

fn check_drinking(p: &Pairing) -> Option<Outcome> {
    value_outcome(&p.owner.preferences.drinking, p.judged.drinking.as_deref())
}

fn check_has_children(p: &Pairing) -> Option<Outcome> {
    value_outcome(&p.owner.preferences.has_children, p.judged.has_children.as_deref())
}

fn check_income(p: &Pairing) -> Option<Outcome> {
    list_outcome(&p.owner.preferences.income, p.judged.annual_income.as_deref())
}

fn check_education(p: &Pairing) -> Option<Outcome> {
    let pref = &p.owner.preferences.education;
    let level = pref.level_target();
    let field = pref.field_target();
    if level.is_none() && field.is_none() {
        return None;
    }

    let level_ok = match (level, p.judged.qualification.as_deref()) {
        (Some(target), Some(qualification)) if !qualification.trim().is_empty() => {
            EducationRequirement::parse(target).is_satisfied_by(qualification)
        }
        _ => true,
    };

    // Unknown field of study might match; don't penalize missing data
    let field_ok = match (field, p.judged.field_of_study.as_deref()) {
        (Some(target), Some(studied)) if !studied.trim().is_empty() => studied == target,
        _ => true,
    };

    Some(Outcome {
        matched: level_ok && field_ok,
        is_dealbreaker: pref.is_dealbreaker,
    })
}

fn check_location(p: &Pairing) -> Option<Outcome> {
    let mut outcome = list_outcome(&p.owner.preferences.location, p.judged.current_location.as_deref())?;

    // Owner plays the seeker role here; the judged party's flag is the one that counts
    if !outcome.matched && can_excuse_location_mismatch(p.owner, p.judged, Party::Candidate) {
        tracing::trace!("Location mismatch excused: {} is open to relocation", p.judged.user_id);
        outcome.matched = true;
    }

    Some(outcome)
}
