use crate::error::gesture::GestureError;
use std::collections::VecDeque;

/// Detects a fixed sequence of symbols at the tail of an input stream.
///
/// The window keeps at most `target.len()` most recent symbols. A match
/// clears it, so matches never overlap.
#[derive(Debug, Clone)]
pub struct GestureMatcher<S> {
    target: Vec<S>,
    window: VecDeque<S>,
}

impl<S: PartialEq> GestureMatcher<S> {
    pub fn new(target: Vec<S>) -> Result<Self, GestureError> {
        if target.is_empty() {
            return Err(GestureError::EmptyTarget);
        }
        let window = VecDeque::with_capacity(target.len());
        Ok(Self { target, window })
    }

    /// Pushes `symbol` and returns `true` if the window now equals the target.
    pub fn observe(&mut self, symbol: S) -> bool {
        self.window.push_back(symbol);
        if self.window.len() > self.target.len() {
            self.window.pop_front();
        }

        if self.window.len() != self.target.len() {
            return false;
        }

        let matched = self
            .window
            .iter()
            .zip(self.target.iter())
            .all(|(seen, expected)| seen == expected);
        if matched {
            self.window.clear();
        }
        matched
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }

    pub fn target(&self) -> &[S] {
        &self.target
    }

    /// Number of symbols currently held in the window.
    pub fn progress(&self) -> usize {
        self.window.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Key {
        Up,
        Down,
        Left,
        Right,
        B,
        A,
    }

    use Key::*;

    const KONAMI: [Key; 10] = [Up, Up, Down, Down, Left, Right, Left, Right, B, A];

    fn konami() -> GestureMatcher<Key> {
        GestureMatcher::new(KONAMI.to_vec()).unwrap()
    }

    fn feed(matcher: &mut GestureMatcher<Key>, keys: &[Key]) -> Vec<bool> {
        keys.iter().map(|k| matcher.observe(*k)).collect()
    }

    #[test]
    fn empty_target_is_rejected() {
        let result = GestureMatcher::<Key>::new(Vec::new());
        assert_eq!(result.unwrap_err(), GestureError::EmptyTarget);
    }

    #[test]
    fn konami_matches_on_tenth_key() {
        let mut matcher = konami();
        let results = feed(&mut matcher, &KONAMI);
        assert!(results[..9].iter().all(|r| !r));
        assert!(results[9]);
        assert_eq!(matcher.progress(), 0);
    }

    #[test]
    fn konami_twice_matches_twice() {
        let mut matcher = konami();
        let mut keys = KONAMI.to_vec();
        keys.extend_from_slice(&KONAMI);
        let hits: Vec<usize> = feed(&mut matcher, &keys)
            .into_iter()
            .enumerate()
            .filter(|(_, hit)| *hit)
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(hits, vec![10, 20]);
    }

    #[test]
    fn wrong_second_key_spoils_the_run() {
        let mut matcher = konami();
        let mut keys = vec![Up, Down];
        keys.extend_from_slice(&KONAMI[2..]);
        assert!(feed(&mut matcher, &keys).iter().all(|r| !r));
    }

    #[test]
    fn one_short_never_matches() {
        let mut matcher = konami();
        assert!(feed(&mut matcher, &KONAMI[..9]).iter().all(|r| !r));
        assert_eq!(matcher.progress(), 9);
    }

    #[test]
    fn leading_noise_is_truncated() {
        let mut matcher = konami();
        let mut keys = vec![A, B, Left];
        keys.extend_from_slice(&KONAMI);
        let results = feed(&mut matcher, &keys);
        assert_eq!(results.iter().filter(|r| **r).count(), 1);
        assert!(results[results.len() - 1]);
    }

    #[test]
    fn reset_discards_progress() {
        let mut matcher = konami();
        feed(&mut matcher, &KONAMI[..5]);
        matcher.reset();
        assert_eq!(matcher.progress(), 0);
        assert!(feed(&mut matcher, &KONAMI[5..]).iter().all(|r| !r));
        assert!(feed(&mut matcher, &KONAMI).last().copied().unwrap());
    }

    #[test]
    fn single_symbol_target() {
        let mut matcher = GestureMatcher::new(vec![B]).unwrap();
        assert!(!matcher.observe(A));
        assert!(matcher.observe(B));
        assert!(matcher.observe(B));
    }

    #[test]
    fn overlapping_match_is_not_reported() {
        // "AAA" in a stream of four A's matches only once.
        let mut matcher = GestureMatcher::new(vec![A, A, A]).unwrap();
        assert_eq!(feed(&mut matcher, &[A, A, A, A]), vec![false, false, true, false]);
    }

    fn key() -> impl Strategy<Value = Key> {
        prop_oneof![
            Just(Up),
            Just(Down),
            Just(Left),
            Just(Right),
            Just(B),
            Just(A)
        ]
    }

    proptest! {
        #[test]
        fn window_never_exceeds_target(
            target in prop::collection::vec(key(), 1..6),
            stream in prop::collection::vec(key(), 0..64),
        ) {
            let mut matcher = GestureMatcher::new(target.clone()).unwrap();
            for k in stream {
                matcher.observe(k);
                prop_assert!(matcher.progress() <= target.len());
            }
        }

        #[test]
        fn agrees_with_reference_scan(
            target in prop::collection::vec(key(), 1..5),
            stream in prop::collection::vec(key(), 0..64),
        ) {
            let mut matcher = GestureMatcher::new(target.clone()).unwrap();
            let mut since_reset = 0usize;
            for (i, k) in stream.iter().enumerate() {
                since_reset += 1;
                let expected = since_reset >= target.len()
                    && stream[i + 1 - target.len()..=i] == target[..];
                prop_assert_eq!(matcher.observe(*k), expected);
                if expected {
                    since_reset = 0;
                }
            }
        }

        #[test]
        fn match_empties_the_window(target in prop::collection::vec(key(), 1..8)) {
            let mut matcher = GestureMatcher::new(target.clone()).unwrap();
            for k in &target[..target.len() - 1] {
                prop_assert!(!matcher.observe(*k));
            }
            prop_assert!(matcher.observe(target[target.len() - 1]));
            prop_assert_eq!(matcher.progress(), 0);
        }
    }
}
