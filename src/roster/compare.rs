use std::cmp::Ordering;

use super::student::{Category, Student};

/// Ranking comparator for the roster ordering.
///
/// `Greater` means `a` is emitted ahead of `b` by the sort engine. Each key is
/// consulted only when every earlier key ties:
///
/// 1. birth year, larger first
/// 2. birth month code, lexicographically larger first
/// 3. birth day, larger first
/// 4. last name, ascending
/// 5. first name, ascending
/// 6. TOEFL, higher first; a missing score ranks below any present score
/// 7. category, International ahead of Domestic
pub fn rank(a: &Student, b: &Student) -> Ordering {
    let by_year = a.birth_year.cmp(&b.birth_year);
    if by_year != Ordering::Equal {
        return by_year;
    }

    let by_month = a.birth_month.cmp(&b.birth_month);
    if by_month != Ordering::Equal {
        return by_month;
    }

    let by_day = a.birth_day.cmp(&b.birth_day);
    if by_day != Ordering::Equal {
        return by_day;
    }

    // name keys are ascending, so the smaller name ranks higher
    let by_last = b.last_name.cmp(&a.last_name);
    if by_last != Ordering::Equal {
        return by_last;
    }

    let by_first = b.first_name.cmp(&a.first_name);
    if by_first != Ordering::Equal {
        return by_first;
    }

    // Option ordering puts None below every Some, which is exactly the
    // "no score ranks last" rule
    let by_toefl = a.toefl.cmp(&b.toefl);
    if by_toefl != Ordering::Equal {
        return by_toefl;
    }

    match (a.category, b.category) {
        (Category::International, Category::Domestic) => Ordering::Greater,
        (Category::Domestic, Category::International) => Ordering::Less,
        _ => Ordering::Equal,
    }
}
