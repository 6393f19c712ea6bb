//! Entry ordering.

use std::cmp::Ordering;
use std::time::SystemTime;

use minsh_types::DirEntry;

use super::options::SortMode;

/// Order entries by one criterion, then optionally reverse the whole run.
///
/// The sort is stable, so ties keep their enumeration order. Reversal is a
/// separate end-to-end pass rather than an inverted comparator. Unsorted
/// listings keep enumeration order and ignore `reverse`.
pub fn sort_entries(entries: &mut [DirEntry], mode: SortMode, reverse: bool) {
    match mode {
        SortMode::None => return,
        SortMode::Time => entries.sort_by(compare_by_time),
        SortMode::Size => entries.sort_by(compare_by_size),
        SortMode::Extension => entries.sort_by(compare_by_extension),
        SortMode::Name => entries.sort_by(compare_by_name),
    }

    if reverse {
        entries.reverse();
    }
}

/// Newest first. Entries without a timestamp count as the oldest.
fn compare_by_time(a: &DirEntry, b: &DirEntry) -> Ordering {
    let ta = a.modified.unwrap_or(SystemTime::UNIX_EPOCH);
    let tb = b.modified.unwrap_or(SystemTime::UNIX_EPOCH);
    tb.cmp(&ta)
}

/// Largest first.
fn compare_by_size(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.size.cmp(&a.size)
}

fn compare_by_extension(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.extension().cmp(b.extension())
}

fn compare_by_name(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    fn sample() -> Vec<DirEntry> {
        vec![
            DirEntry::file("b.txt", 100).with_modified(at(100)),
            DirEntry::file("a.txt", 50).with_modified(at(200)),
            DirEntry::file("Notes.md", 50).with_modified(at(150)),
            DirEntry::directory("src").with_modified(at(200)),
            DirEntry::file("Makefile", 7),
        ]
    }

    fn names(entries: &[DirEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn by_name_is_case_insensitive() {
        let mut entries = sample();
        sort_entries(&mut entries, SortMode::Name, false);
        assert_eq!(names(&entries), vec!["a.txt", "b.txt", "Makefile", "Notes.md", "src"]);
    }

    #[test]
    fn by_time_newest_first_and_stable() {
        let mut entries = sample();
        sort_entries(&mut entries, SortMode::Time, false);
        // a.txt and src tie at 200 and keep their input order; Makefile has no time
        assert_eq!(names(&entries), vec!["a.txt", "src", "Notes.md", "b.txt", "Makefile"]);
    }

    #[test]
    fn by_size_largest_first_and_stable() {
        let mut entries = sample();
        sort_entries(&mut entries, SortMode::Size, false);
        assert_eq!(names(&entries), vec!["b.txt", "a.txt", "Notes.md", "Makefile", "src"]);
    }

    #[test]
    fn by_extension_ascending_and_stable() {
        let mut entries = sample();
        sort_entries(&mut entries, SortMode::Extension, false);
        assert_eq!(names(&entries), vec!["src", "Makefile", "Notes.md", "b.txt", "a.txt"]);
    }

    #[test]
    fn unsorted_keeps_enumeration_order() {
        let mut entries = sample();
        sort_entries(&mut entries, SortMode::None, false);
        assert_eq!(names(&entries), names(&sample()));
    }

    #[test]
    fn reverse_is_a_block_reversal() {
        let mut entries = sample();
        sort_entries(&mut entries, SortMode::Size, true);
        // Ties stay in reversed stable order rather than being re-sorted
        assert_eq!(names(&entries), vec!["src", "Makefile", "Notes.md", "a.txt", "b.txt"]);
    }

    #[test]
    fn reverse_has_no_effect_when_unsorted() {
        let mut entries = sample();
        sort_entries(&mut entries, SortMode::None, true);
        assert_eq!(names(&entries), names(&sample()));
    }

    #[rstest]
    #[case(SortMode::Name)]
    #[case(SortMode::Time)]
    #[case(SortMode::Size)]
    #[case(SortMode::Extension)]
    #[case(SortMode::None)]
    fn sorting_is_idempotent(#[case] mode: SortMode) {
        let mut once = sample();
        sort_entries(&mut once, mode, false);
        let mut twice = once.clone();
        sort_entries(&mut twice, mode, false);
        assert_eq!(once, twice);
    }

    #[rstest]
    #[case(SortMode::Name)]
    #[case(SortMode::Time)]
    #[case(SortMode::Size)]
    #[case(SortMode::Extension)]
    fn reversal_is_an_involution(#[case] mode: SortMode) {
        let mut sorted = sample();
        sort_entries(&mut sorted, mode, false);
        let mut reversed = sorted.clone();
        sort_entries(&mut reversed, mode, true);
        reversed.reverse();
        assert_eq!(reversed, sorted);
    }
}
