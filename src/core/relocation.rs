use crate::models::Profile;

/// Identifies which of the two parties' relocation flag is consulted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Seeker,
    Candidate,
}

/// Decide whether a location mismatch is excused by a willingness to relocate
///
/// `whose_flag_matters` names the party whose `openToRelocation` is read. When a
/// preference owner's location preference is judged against the other party's
/// location, the flag that matters is the judged party's: the seeker's flag for the
/// candidate's preference, the candidate's flag for the seeker's preference.
pub fn can_excuse_location_mismatch(
    seeker: &Profile,
    candidate: &Profile,
    whose_flag_matters: Party,
) -> bool {
    match whose_flag_matters {
        Party::Seeker => seeker.relocatable(),
        Party::Candidate => candidate.relocatable(),
    }
}
