//! Declarative layout of the raw sign-up form export.
//!
//! The export is not self-describing: every field lives at a fixed column
//! position, so the layout is captured here as one table of named indexes
//! instead of magic numbers scattered through the transformation code.

use std::ops::Range;

/// Household contact email near the start of the form.
pub const CONTACT_EMAIL: usize = 1;

/// Free-text "anything else" answer, one per household.
pub const ANYTHING_ELSE: usize = 89;

/// First adult's name.
pub const ADULT1_NAME: usize = 53;

/// First adult's survey answers (participation level first, then the
/// remaining survey fields).
pub const ADULT1_SURVEY: Range<usize> = 54..70;

/// "Yes"/"No" column marking the presence of a second adult.
pub const ADULT2_FLAG: usize = 70;

/// Second adult's fields: name, email, survey answers, closing comment.
pub const ADULT2_FIELDS: Range<usize> = 71..90;

/// Participation answer inside an assembled adult output row.
pub const PARTICIPATION_COLUMN: usize = 4;

/// The three availability columns inside an assembled adult output row.
pub const AVAILABILITY_BLOCK: Range<usize> = 16..19;

/// Where the availability block lands: immediately after the participation
/// column.
pub const AVAILABILITY_INSERT_AT: usize = 5;

/// Column prefixes tagging first-adult and first-child fields in the
/// exported header row.
pub const SLOT_PREFIXES: [&str; 2] = ["adult1_", "child1_"];

/// One student slot: the name column followed by eleven interest columns.
#[derive(Debug, Clone)]
pub struct StudentSlot {
    pub fields: Range<usize>,
    /// "Yes"/"No" column marking the slot as filled; `None` for the first
    /// slot, which is always present.
    pub flag: Option<usize>,
}

/// The four student slots of the form, in column order.
pub fn student_slots() -> [StudentSlot; 4] {
    [
        StudentSlot {
            fields: 2..14,
            flag: None,
        },
        StudentSlot {
            fields: 15..27,
            flag: Some(14),
        },
        StudentSlot {
            fields: 28..40,
            flag: Some(27),
        },
        StudentSlot {
            fields: 41..53,
            flag: Some(40),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_slots_cover_the_columns_before_the_adult_block() {
        let slots = student_slots();
        assert_eq!(slots[0].fields.start, CONTACT_EMAIL + 1);
        for window in slots.windows(2) {
            let flag = window[1].flag.expect("later slots have flags");
            assert_eq!(flag, window[0].fields.end);
            assert_eq!(window[1].fields.start, flag + 1);
        }
        assert_eq!(slots[3].fields.end, ADULT1_NAME);
    }

    #[test]
    fn every_slot_is_a_name_plus_eleven_interests() {
        for slot in student_slots() {
            assert_eq!(slot.fields.len(), 12);
        }
    }
}
