use proptest::prelude::*;

use scancomb::{Cursor, ScanError};

proptest! {
    #[test]
    fn load_then_full_input_round_trips(source in "\\PC*") {
        let cursor = Cursor::new(&source);
        prop_assert_eq!(cursor.full_input(), source);
    }

    #[test]
    fn advance_within_bounds_returns_symbols_in_order(
        source in "\\PC{1,40}",
        steps in 0usize..40,
    ) {
        let symbols: Vec<char> = source.chars().collect();
        let steps = steps.min(symbols.len());

        let mut cursor = Cursor::new(&source);
        let consumed = cursor.advance(steps).unwrap();

        prop_assert_eq!(consumed, symbols[..steps].to_vec());
        prop_assert_eq!(cursor.position(), steps);
        prop_assert_eq!(cursor.consumed(), &symbols[..steps]);
    }

    #[test]
    fn advance_past_the_end_stops_at_exhaustion(source in "\\PC{0,20}", extra in 1usize..10) {
        let length = source.chars().count();

        let mut cursor = Cursor::new(&source);
        let outcome = cursor.advance(length + extra);

        prop_assert_eq!(outcome, Err(ScanError::EndOfInput { position: length }));
        prop_assert!(cursor.end_of_input());
    }

    #[test]
    fn retreat_mirrors_advance(source in "\\PC{1,40}", steps in 1usize..40) {
        let symbols: Vec<char> = source.chars().collect();
        let steps = steps.min(symbols.len());

        let mut cursor = Cursor::new(&source);
        let forward = cursor.advance(steps).unwrap();
        let backward = cursor.retreat(steps).unwrap();

        prop_assert!(cursor.beginning_of_input());
        let mut replay = backward;
        replay.reverse();
        prop_assert_eq!(replay, forward);
    }

    #[test]
    fn empty_string_matches_anywhere(source in "\\PC{0,20}") {
        let length = source.chars().count();

        let mut cursor = Cursor::new(&source);
        cursor.advance(length).unwrap();
        prop_assert!(cursor.match_string("").is_ok());
        prop_assert_eq!(cursor.position(), length);
    }

    #[test]
    fn match_string_is_all_or_nothing(source in "[a-c]{0,10}", probe in "[a-c]{1,10}") {
        let mut cursor = Cursor::new(&source);

        match cursor.match_string(&probe).map(|_| ()) {
            Ok(()) => {
                prop_assert_eq!(cursor.position(), probe.chars().count());
                prop_assert!(source.starts_with(&probe));
            }
            Err(_) => {
                prop_assert_eq!(cursor.position(), 0);
                prop_assert!(!source.starts_with(&probe));
            }
        }
    }

    #[test]
    fn maybe_forms_agree_with_strict_forms(source in "[ab]{0,6}", probe in "[ab]{1,3}") {
        let mut strict = Cursor::new(&source);
        let mut safe = Cursor::new(&source);

        let strict_matched = strict.match_string(&probe).map(|_| ()).is_ok();
        let safe_outcome = safe.maybe_match_string(&probe);

        prop_assert_eq!(strict_matched, safe_outcome.is_some());
        if strict_matched {
            prop_assert_eq!(strict.position(), safe.position());
        } else {
            prop_assert_eq!(safe.position(), 0);
            prop_assert_eq!(safe.last_result(), None);
        }
    }

    #[test]
    fn clamped_forward_scan_collects_to_the_end(source in "\\PC{0,20}") {
        let symbols: Vec<char> = source.chars().collect();

        let mut cursor = Cursor::new(&source);
        let consumed = cursor.scan_forward_while_clamped(|_| true);

        prop_assert_eq!(consumed, symbols);
        prop_assert!(cursor.end_of_input());
    }

    #[test]
    fn clamped_backward_scan_reverses_the_prefix(source in "\\PC{1,20}", start in 0usize..20) {
        let symbols: Vec<char> = source.chars().collect();
        let start = start.min(symbols.len());

        let mut cursor = Cursor::new(&source);
        cursor.advance(start).unwrap();
        let consumed = cursor.scan_backward_while_clamped(|_| true);

        let mut prefix = symbols[..start].to_vec();
        prefix.reverse();
        prop_assert_eq!(consumed, prefix);
        prop_assert!(cursor.beginning_of_input());
    }

    #[test]
    fn choice_of_two_literals_behaves_like_ordered_fallback(
        source in "[ab]{1,6}",
        first in "[ab]{1,3}",
        second in "[ab]{1,3}",
    ) {
        let mut cursor = Cursor::new(&source);
        let outcome = cursor.choice(&mut [
            &mut |c: &mut Cursor| c.match_string(&first).map(|_| 1),
            &mut |c: &mut Cursor| c.match_string(&second).map(|_| 2),
        ]);

        if source.starts_with(&first) {
            prop_assert_eq!(outcome, Ok(1));
            prop_assert_eq!(cursor.position(), first.chars().count());
        } else if source.starts_with(&second) {
            prop_assert_eq!(outcome, Ok(2));
            prop_assert_eq!(cursor.position(), second.chars().count());
        } else {
            prop_assert_eq!(outcome, Err(ScanError::NoAlternative { position: 0 }));
            prop_assert_eq!(cursor.position(), 0);
        }
    }
}
