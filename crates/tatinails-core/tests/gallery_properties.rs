//! Property-based tests for the gallery viewer
//!
//! Uses proptest to check the cursor invariants over arbitrary gallery sizes
//! and navigation sequences.

use proptest::prelude::*;
use tatinails_core::{Gallery, GalleryEntry, LightboxTarget, NavKey};

// ============================================================================
// Strategy Generators
// ============================================================================

fn entries(n: usize) -> Vec<GalleryEntry> {
    (0..n)
        .map(|i| GalleryEntry::linked(format!("full-{i}.jpg"), format!("thumb-{i}.jpg"), format!("Nails {i}")))
        .collect()
}

/// Navigation input while the lightbox may or may not be open
#[derive(Debug, Clone)]
enum NavOp {
    Open(usize),
    Close,
    Next,
    Previous,
    Key(NavKey),
    Click(LightboxTarget),
}

fn nav_op_strategy() -> impl Strategy<Value = NavOp> {
    prop_oneof![
        2 => (0..20usize).prop_map(NavOp::Open),
        1 => Just(NavOp::Close),
        3 => Just(NavOp::Next),
        3 => Just(NavOp::Previous),
        1 => prop_oneof![
            Just(NavKey::Escape),
            Just(NavKey::ArrowLeft),
            Just(NavKey::ArrowRight),
            Just(NavKey::Other),
        ]
        .prop_map(NavOp::Key),
        1 => prop_oneof![
            Just(LightboxTarget::Backdrop),
            Just(LightboxTarget::Image),
            Just(LightboxTarget::Close),
            Just(LightboxTarget::Previous),
            Just(LightboxTarget::Next),
        ]
        .prop_map(NavOp::Click),
    ]
}

fn apply(gallery: &mut Gallery, op: &NavOp) {
    match op {
        NavOp::Open(i) => gallery.open(*i),
        NavOp::Close => gallery.close(),
        NavOp::Next => gallery.next(),
        NavOp::Previous => gallery.previous(),
        NavOp::Key(key) => gallery.key(*key),
        NavOp::Click(target) => gallery.click(*target),
    };
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Opening any in-range index shows exactly that item
    #[test]
    fn open_shows_requested_item(len in 1..30usize, seed in any::<usize>()) {
        let mut gallery = Gallery::new(&entries(len), "Portfolio image");
        let index = seed % len;

        gallery.open(index);

        prop_assert!(gallery.is_open());
        prop_assert_eq!(gallery.current(), Some(&gallery.items()[index]));
        prop_assert_eq!(gallery.current().unwrap().source.clone(), format!("full-{index}.jpg"));
    }

    /// next() applied len times returns to the starting index
    #[test]
    fn next_cycles_back(len in 1..30usize, seed in any::<usize>()) {
        let mut gallery = Gallery::new(&entries(len), "Portfolio image");
        let start = seed % len;
        gallery.open(start);

        for _ in 0..len {
            gallery.next();
        }

        prop_assert_eq!(gallery.current_index(), start);
        prop_assert!(gallery.is_open());
    }

    /// previous() applied len times returns to the starting index
    #[test]
    fn previous_cycles_back(len in 1..30usize, seed in any::<usize>()) {
        let mut gallery = Gallery::new(&entries(len), "Portfolio image");
        let start = seed % len;
        gallery.open(start);

        for _ in 0..len {
            gallery.previous();
        }

        prop_assert_eq!(gallery.current_index(), start);
    }

    /// next then previous is the identity
    #[test]
    fn next_previous_inverse(len in 1..30usize, seed in any::<usize>()) {
        let mut gallery = Gallery::new(&entries(len), "Portfolio image");
        let start = seed % len;
        gallery.open(start);

        gallery.next();
        gallery.previous();

        prop_assert_eq!(gallery.current_index(), start);
    }

    /// The cursor never leaves the item range, whatever the input
    #[test]
    fn cursor_stays_in_range(len in 1..10usize, ops in prop::collection::vec(nav_op_strategy(), 0..50)) {
        let mut gallery = Gallery::new(&entries(len), "Portfolio image");

        for op in &ops {
            apply(&mut gallery, op);
            prop_assert!(gallery.current_index() < len);
        }
    }

    /// An empty gallery never opens and never panics
    #[test]
    fn empty_gallery_stays_closed(ops in prop::collection::vec(nav_op_strategy(), 0..50)) {
        let mut gallery = Gallery::new(&[], "Portfolio image");

        for op in &ops {
            apply(&mut gallery, op);
            prop_assert!(!gallery.is_open());
            prop_assert!(gallery.current().is_none());
        }
    }

    /// Navigation keys are inert while closed
    #[test]
    fn keys_inert_when_closed(len in 1..10usize, keys in prop::collection::vec(
        prop_oneof![Just(NavKey::Escape), Just(NavKey::ArrowLeft), Just(NavKey::ArrowRight)],
        1..20,
    )) {
        let mut gallery = Gallery::new(&entries(len), "Portfolio image");

        for key in keys {
            prop_assert!(gallery.key(key).is_empty());
        }
        prop_assert!(!gallery.is_open());
        prop_assert_eq!(gallery.current_index(), 0);
    }
}
