use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Wildcard preference values that never constrain a match
const WILDCARDS: &[&str] = &["doesnt_matter", "any"];

/// Returns true if a preference string carries no real constraint
#[inline]
pub fn is_unset(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || WILDCARDS.iter().any(|w| trimmed.eq_ignore_ascii_case(w))
}

/// The platform pairs across exactly two declared genders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Matrimony profile as supplied by the persistence layer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[validate(length(min = 1))]
    pub user_id: String,
    pub gender: Gender,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Foot-inch ladder string, e.g. `5'7"`
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub current_location: Option<String>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub has_children: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub community: Option<String>,
    #[serde(default)]
    pub sub_community: Option<String>,
    #[serde(default)]
    pub caste: Option<String>,
    #[serde(default)]
    pub gotra: Option<String>,
    #[serde(default)]
    pub mother_tongue: Option<String>,
    #[serde(default)]
    pub dietary_preference: Option<String>,
    #[serde(default)]
    pub smoking: Option<String>,
    #[serde(default)]
    pub drinking: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub annual_income: Option<String>,
    #[serde(default)]
    pub citizenship: Option<String>,
    #[serde(default)]
    pub grew_up_in: Option<String>,
    #[serde(default)]
    pub open_to_relocation: Option<String>,
    #[serde(default)]
    pub preferences: Preferences,
}

impl Profile {
    /// Create a profile with only identity and gender set
    pub fn new(user_id: impl Into<String>, gender: Gender) -> Self {
        Self {
            user_id: user_id.into(),
            gender,
            age: None,
            date_of_birth: None,
            height: None,
            current_location: None,
            marital_status: None,
            has_children: None,
            religion: None,
            community: None,
            sub_community: None,
            caste: None,
            gotra: None,
            mother_tongue: None,
            dietary_preference: None,
            smoking: None,
            drinking: None,
            qualification: None,
            field_of_study: None,
            annual_income: None,
            citizenship: None,
            grew_up_in: None,
            open_to_relocation: None,
            preferences: Preferences::default(),
        }
    }

    /// Age in whole years as of `today`. An explicit age wins over date of birth.
    pub fn age_on(&self, today: NaiveDate) -> Option<u8> {
        if let Some(age) = self.age {
            return Some(age);
        }

        let dob = self.date_of_birth?;
        let mut years = today.year() - dob.year();
        if (today.month(), today.day()) < (dob.month(), dob.day()) {
            years -= 1;
        }
        u8::try_from(years).ok()
    }

    /// Helper to get open_to_relocation as a bool, defaulting to false
    pub fn relocatable(&self) -> bool {
        self.open_to_relocation
            .as_deref()
            .map(|v| v.trim().eq_ignore_ascii_case("yes"))
            .unwrap_or(false)
    }
}

/// Inclusive numeric range preference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangePreference<T> {
    #[serde(default)]
    pub min: Option<T>,
    #[serde(default)]
    pub max: Option<T>,
    #[serde(default)]
    pub is_dealbreaker: bool,
}

impl<T> RangePreference<T> {
    pub fn is_set(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Single target value, compared case-insensitively
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuePreference {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub is_dealbreaker: bool,
}

impl ValuePreference {
    /// The active target, if any
    pub fn target(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !is_unset(v))
    }
}

/// Set of acceptable values, compared case-insensitively
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPreference {
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub is_dealbreaker: bool,
}

impl ListPreference {
    /// A list containing a wildcard accepts everything
    pub fn is_set(&self) -> bool {
        !self.values.is_empty() && !self.values.iter().any(|v| is_unset(v))
    }

    pub fn contains(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        self.values.iter().any(|v| v.trim().eq_ignore_ascii_case(candidate))
    }
}

/// Education level plus optional field of study
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPreference {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub is_dealbreaker: bool,
}

impl EducationPreference {
    pub fn level_target(&self) -> Option<&str> {
        self.level.as_deref().filter(|v| !is_unset(v))
    }

    pub fn field_target(&self) -> Option<&str> {
        self.field_of_study.as_deref().filter(|v| !v.trim().is_empty())
    }
}

/// Partner preferences, one entry per matchable dimension
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub age: RangePreference<u8>,
    #[serde(default)]
    pub height: RangePreference<String>,
    #[serde(default)]
    pub religion: ListPreference,
    #[serde(default)]
    pub marital_status: ValuePreference,
    #[serde(default)]
    pub diet: ValuePreference,
    #[serde(default)]
    pub community: ValuePreference,
    #[serde(default)]
    pub gotra: ValuePreference,
    #[serde(default)]
    pub education: EducationPreference,
    #[serde(default)]
    pub income: ListPreference,
    #[serde(default)]
    pub smoking: ValuePreference,
    #[serde(default)]
    pub drinking: ValuePreference,
    #[serde(default)]
    pub location: ListPreference,
    #[serde(default)]
    pub has_children: ValuePreference,
    #[serde(default)]
    pub mother_tongue: ValuePreference,
}

/// A named compatibility dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Age,
    Height,
    Religion,
    #[serde(rename = "Marital Status")]
    MaritalStatus,
    Diet,
    Community,
    Gotra,
    Education,
    Income,
    Smoking,
    Drinking,
    Location,
    #[serde(rename = "Has Children")]
    HasChildren,
    #[serde(rename = "Mother Tongue")]
    MotherTongue,
}

impl Dimension {
    pub const ALL: [Dimension; 14] = [
        Dimension::Age,
        Dimension::Height,
        Dimension::Religion,
        Dimension::MaritalStatus,
        Dimension::Diet,
        Dimension::Community,
        Dimension::Gotra,
        Dimension::Education,
        Dimension::Income,
        Dimension::Smoking,
        Dimension::Drinking,
        Dimension::Location,
        Dimension::HasChildren,
        Dimension::MotherTongue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Age => "Age",
            Dimension::Height => "Height",
            Dimension::Religion => "Religion",
            Dimension::MaritalStatus => "Marital Status",
            Dimension::Diet => "Diet",
            Dimension::Community => "Community",
            Dimension::Gotra => "Gotra",
            Dimension::Education => "Education",
            Dimension::Income => "Income",
            Dimension::Smoking => "Smoking",
            Dimension::Drinking => "Drinking",
            Dimension::Location => "Location",
            Dimension::HasChildren => "Has Children",
            Dimension::MotherTongue => "Mother Tongue",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one dimension in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    pub name: Dimension,
    pub matched: bool,
    pub is_dealbreaker: bool,
}

/// Which direction(s) a near-match failure was observed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureSide {
    /// The seeker's preference is unmet by the candidate
    Seeker,
    /// The candidate's preference is unmet by the seeker
    Candidate,
    Both,
}

impl FailureSide {
    pub fn merge(self, other: FailureSide) -> FailureSide {
        if self == other {
            self
        } else {
            FailureSide::Both
        }
    }
}

/// A failing dimension, deduplicated across both evaluation directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedCriterion {
    pub name: Dimension,
    pub is_dealbreaker: bool,
    pub side: FailureSide,
    pub relaxable: bool,
}

/// One-directional compatibility score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub percentage: u8,
    pub criteria: Vec<Criterion>,
}

/// Candidate that could become a match if the seeker loosened their preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearMatchResult {
    pub profile: Profile,
    pub failed_criteria: Vec<FailedCriterion>,
}

/// Tolerance bands for ordinal dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerances {
    pub age_years: u8,
    pub height_steps: u8,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            age_years: 1,
            height_steps: 2,
        }
    }
}
