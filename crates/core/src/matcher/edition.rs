//! Special edition bonus.
//!
//! An extended cut runs longer than the theatrical release, so subtitles
//! made for the same edition are strongly preferred.

use crate::signature::vocab::EDITION_KEYWORDS;
use crate::signature::SpecialEdition;

const EXACT_MATCH_BONUS: f64 = 20.0;
const EXTENDED_MATCH_BONUS: f64 = 15.0;
const DIRECTORS_MATCH_BONUS: f64 = 15.0;
const SPECIAL_MATCH_BONUS: f64 = 10.0;
const ANY_EDITION_BONUS: f64 = 5.0;
const UNWANTED_EDITION_PENALTY: f64 = -5.0;

fn mentions_any_edition(text: &str) -> bool {
    EDITION_KEYWORDS.iter().any(|kw| text.contains(kw))
}

/// Bonus (or penalty) for how well a candidate's release text matches the
/// target's special edition.
pub fn edition_bonus(target_edition: Option<&SpecialEdition>, candidate_text: &str) -> f64 {
    let text = candidate_text.to_lowercase();

    let Some(edition) = target_edition else {
        return if mentions_any_edition(&text) {
            UNWANTED_EDITION_PENALTY
        } else {
            0.0
        };
    };

    if text.contains(edition.tag()) {
        return EXACT_MATCH_BONUS;
    }

    match edition {
        SpecialEdition::ExtendedCut if text.contains("extended") => EXTENDED_MATCH_BONUS,
        SpecialEdition::DirectorsCut if text.contains("director") => DIRECTORS_MATCH_BONUS,
        SpecialEdition::SpecialEdition if text.contains("special") => SPECIAL_MATCH_BONUS,
        _ if mentions_any_edition(&text) => ANY_EDITION_BONUS,
        _ => 0.0,
    }
}
