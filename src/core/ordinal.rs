//! Ordinal scales used by the age, height and education dimensions.

/// Shortest height on the ladder, in inches (4'6")
const LADDER_MIN_INCHES: u16 = 54;

/// Tallest height on the ladder, in inches (6'6")
const LADDER_MAX_INCHES: u16 = 78;

/// Look up a height string's position on the `4'6"` .. `6'6"` ladder
///
/// Accepts `5'7"`, `5'7`, `5' 7"` and `5ft 7in`. Returns `None` for anything
/// that does not parse or falls off the ladder.
pub fn height_position(height: &str) -> Option<u16> {
    let inches = parse_height_inches(height)?;
    if !(LADDER_MIN_INCHES..=LADDER_MAX_INCHES).contains(&inches) {
        return None;
    }
    Some(inches - LADDER_MIN_INCHES)
}

fn parse_height_inches(height: &str) -> Option<u16> {
    let normalized = height.trim().to_ascii_lowercase();
    let (feet, rest) = normalized
        .split_once('\'')
        .or_else(|| normalized.split_once("ft"))?;
    let feet: u8 = feet.trim().parse().ok()?;

    let rest = rest.trim();
    let rest = rest
        .strip_suffix('"')
        .or_else(|| rest.strip_suffix("in"))
        .unwrap_or(rest)
        .trim();
    let inches: u8 = if rest.is_empty() { 0 } else { rest.parse().ok()? };
    if inches >= 12 {
        return None;
    }

    Some(u16::from(feet) * 12 + u16::from(inches))
}

/// Four-level education hierarchy; 0 means unrecognized
pub fn education_level(qualification: &str) -> u8 {
    match normalize(qualification).as_str() {
        "high_school" | "associates" => 1,
        "bachelors" => 2,
        "masters" | "mba" => 3,
        "medical" | "law" | "doctorate" => 4,
        _ => 0,
    }
}

/// Parsed education level preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EducationRequirement {
    /// Candidate level must be at or above this level
    AtLeast(u8),
    /// Only `medical` or `law`; a doctorate does not count
    DoctorOrLawyer,
    /// Exact category match (`medical`, `law`, `mba`, `doctorate`, or unknown labels)
    Exactly(String),
}

impl EducationRequirement {
    pub fn parse(preference: &str) -> Self {
        let pref = normalize(preference);

        if pref == "doctor_or_lawyer" {
            return Self::DoctorOrLawyer;
        }

        if let Some(base) = pref.strip_suffix("_or_higher") {
            let level = education_level(base);
            if level > 0 {
                return Self::AtLeast(level);
            }
        }

        match pref.as_str() {
            "high_school" | "associates" | "bachelors" | "masters" => {
                Self::AtLeast(education_level(&pref))
            }
            _ => Self::Exactly(pref),
        }
    }

    pub fn is_satisfied_by(&self, qualification: &str) -> bool {
        let candidate = normalize(qualification);
        match self {
            Self::AtLeast(level) => {
                let candidate_level = education_level(&candidate);
                candidate_level > 0 && candidate_level >= *level
            }
            Self::DoctorOrLawyer => matches!(candidate.as_str(), "medical" | "law"),
            Self::Exactly(category) => candidate == *category,
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace([' ', '-'], "_")
}
