use spinescan::spine::book_spine::{
    detect_book_spines, detect_book_spines_with, group_regions_into_spines_with, BookSpine,
};
use spinescan::spine::bounds::BoundingBox;
use spinescan::spine::params::GroupingParams;
use spinescan::spine::ranking::rank_spines;
use spinescan::spine::region::{group_words_into_regions, TextRegion};
use spinescan::spine::word::{determine_orientation, Orientation, Word};

fn word(text: &str, confidence: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> Word {
    Word::new(text, confidence, BoundingBox::new(x0, y0, x1, y1))
}

fn region(text: &str, confidence: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> TextRegion {
    TextRegion::from_seed(&word(text, confidence, x0, y0, x1, y1), 1.5)
}

fn spine(title: &str, confidence: f64, y0: f64) -> BookSpine {
    let bbox = BoundingBox::new(0.0, y0, 40.0, y0 + 20.0);
    BookSpine {
        title: title.to_string(),
        confidence,
        bbox,
        orientation: Orientation::Horizontal,
        text_regions: Vec::new(),
    }
}

// ============================================================================
// Orientation Tests
// ============================================================================

#[test]
fn test_orientation_empty_is_horizontal() {
    let words: Vec<Word> = Vec::new();
    assert_eq!(determine_orientation(&words), Orientation::Horizontal);
}

#[test]
fn test_orientation_wide_words_are_horizontal() {
    let words = vec![word("Dune", 90.0, 0.0, 0.0, 80.0, 20.0)];
    assert_eq!(determine_orientation(&words), Orientation::Horizontal);
}

#[test]
fn test_orientation_tall_words_are_vertical() {
    let words = vec![word("Dune", 90.0, 0.0, 0.0, 20.0, 80.0)];
    assert_eq!(determine_orientation(&words), Orientation::Vertical);
}

#[test]
fn test_orientation_square_words_tie_to_vertical() {
    let words = vec![word("ok", 90.0, 0.0, 0.0, 20.0, 20.0)];
    assert_eq!(determine_orientation(&words), Orientation::Vertical);
}

#[test]
fn test_orientation_ratio_boundary_is_exclusive() {
    // width == 1.5 * height counts for neither score
    let words = vec![word("edge", 90.0, 0.0, 0.0, 30.0, 20.0)];
    assert_eq!(determine_orientation(&words), Orientation::Vertical);
}

#[test]
fn test_orientation_zero_height_is_horizontal() {
    let words = vec![word("flat", 90.0, 0.0, 10.0, 40.0, 10.0)];
    assert_eq!(determine_orientation(&words), Orientation::Horizontal);
}

#[test]
fn test_orientation_zero_width_is_vertical() {
    let words = vec![word("thin", 90.0, 10.0, 0.0, 10.0, 40.0)];
    assert_eq!(determine_orientation(&words), Orientation::Vertical);
}

#[test]
fn test_orientation_zero_area_is_vertical() {
    // scores neither way, so the tie rule applies
    let words = vec![word("dot", 90.0, 5.0, 5.0, 5.0, 5.0)];
    assert_eq!(determine_orientation(&words), Orientation::Vertical);
}

#[test]
fn test_orientation_zero_area_does_not_outweigh() {
    let words = vec![
        word("dot", 99.0, 5.0, 5.0, 5.0, 5.0),
        word("wide", 10.0, 0.0, 20.0, 80.0, 40.0),
    ];
    assert_eq!(determine_orientation(&words), Orientation::Horizontal);
}

#[test]
fn test_orientation_is_deterministic() {
    let words = vec![
        word("wide", 60.0, 0.0, 0.0, 80.0, 20.0),
        word("tall", 60.0, 100.0, 0.0, 120.0, 80.0),
        word("flat", 30.0, 0.0, 30.0, 40.0, 30.0),
        word("dot", 90.0, 5.0, 5.0, 5.0, 5.0),
    ];

    let first = determine_orientation(&words);
    for _ in 0..10 {
        assert_eq!(determine_orientation(&words), first);
    }
    assert_eq!(first, Orientation::Horizontal);
}

#[test]
fn test_orientation_weighted_by_confidence() {
    let words = vec![
        word("wide", 40.0, 0.0, 0.0, 80.0, 20.0),
        word("wide", 40.0, 0.0, 30.0, 80.0, 50.0),
        word("tall", 95.0, 100.0, 0.0, 120.0, 80.0),
    ];
    assert_eq!(determine_orientation(&words), Orientation::Vertical);
}

#[test]
fn test_orientation_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Orientation::Vertical).unwrap(),
        "\"vertical\""
    );
}

// ============================================================================
// Region Grouping Tests
// ============================================================================

#[test]
fn test_group_empty_words() {
    assert!(group_words_into_regions(&[]).is_empty());
}

#[test]
fn test_harry_potter_too_far_apart() {
    let words = vec![
        word("Harry", 90.0, 0.0, 0.0, 50.0, 20.0),
        word("Potter", 90.0, 55.0, 0.0, 110.0, 20.0),
    ];

    let regions = group_words_into_regions(&words);

    assert_eq!(regions.len(), 2);
}

#[test]
fn test_harry_potter_merged() {
    let words = vec![
        word("Harry", 90.0, 0.0, 0.0, 30.0, 20.0),
        word("Potter", 90.0, 32.0, 0.0, 62.0, 20.0),
    ];

    let regions = group_words_into_regions(&words);

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].text, "Harry Potter");
    assert_eq!(regions[0].confidence, 90.0);
}

#[test]
fn test_close_words_merge() {
    // centers 35 apart, threshold 2 * 20 = 40
    let words = vec![
        word("Harry", 90.0, 0.0, 0.0, 30.0, 20.0),
        word("Potter", 80.0, 35.0, 0.0, 65.0, 20.0),
    ];

    let regions = group_words_into_regions(&words);

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].text, "Harry Potter");
    assert_eq!(regions[0].confidence, 85.0);
    assert_eq!(regions[0].bbox, BoundingBox::new(0.0, 0.0, 65.0, 20.0));
    assert_eq!(regions[0].words.len(), 2);
}

#[test]
fn test_distant_words_stay_apart() {
    let words = vec![
        word("Harry", 90.0, 0.0, 0.0, 30.0, 20.0),
        word("Potter", 80.0, 70.0, 0.0, 100.0, 20.0),
    ];

    let regions = group_words_into_regions(&words);

    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].text, "Harry");
    assert_eq!(regions[1].text, "Potter");
}

#[test]
fn test_distance_threshold_is_strict() {
    // centers exactly 40 apart
    let words = vec![
        word("Harry", 90.0, 0.0, 0.0, 30.0, 20.0),
        word("Potter", 80.0, 40.0, 0.0, 70.0, 20.0),
    ];

    assert_eq!(group_words_into_regions(&words).len(), 2);
}

#[test]
fn test_distances_measured_from_seed() {
    // "c" is close to "b" but not to the seed "a"
    let words = vec![
        word("a", 90.0, 0.0, 0.0, 20.0, 20.0),
        word("b", 90.0, 30.0, 0.0, 50.0, 20.0),
        word("c", 90.0, 60.0, 0.0, 80.0, 20.0),
    ];

    let regions = group_words_into_regions(&words);

    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].text, "a b");
    assert_eq!(regions[1].text, "c");
}

#[test]
fn test_region_confidence_is_pairwise_average() {
    let words = vec![
        word("one", 90.0, 0.0, 0.0, 20.0, 20.0),
        word("two", 60.0, 25.0, 0.0, 45.0, 20.0),
        word("six", 30.0, 0.0, 25.0, 20.0, 45.0),
    ];

    let regions = group_words_into_regions(&words);

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].confidence, 52.5);
}

#[test]
fn test_region_orientation_from_all_words() {
    let words = vec![
        word("A", 50.0, 0.0, 0.0, 20.0, 20.0),
        word("Tall", 90.0, 0.0, 20.0, 20.0, 80.0),
    ];

    let regions = group_words_into_regions(&words);

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].orientation, Orientation::Vertical);
}

// ============================================================================
// Spine Grouping Tests
// ============================================================================

#[test]
fn test_region_above_seed_is_prepended() {
    let regions = vec![
        region("Potter", 80.0, 0.0, 100.0, 40.0, 120.0),
        region("Harry", 90.0, 5.0, 70.0, 45.0, 90.0),
    ];

    let spines = detect_book_spines(&regions);

    assert_eq!(spines.len(), 1);
    assert_eq!(spines[0].title, "Harry Potter");
    assert_eq!(spines[0].confidence, 85.0);
    assert_eq!(spines[0].bbox, BoundingBox::new(0.0, 70.0, 45.0, 120.0));
    assert_eq!(spines[0].text_regions.len(), 2);
}

#[test]
fn test_region_below_seed_is_appended() {
    let regions = vec![
        region("Harry", 90.0, 5.0, 70.0, 45.0, 90.0),
        region("Potter", 80.0, 0.0, 100.0, 40.0, 120.0),
    ];

    let spines = detect_book_spines(&regions);

    assert_eq!(spines.len(), 1);
    assert_eq!(spines[0].title, "Harry Potter");
}

#[test]
fn test_column_tolerance_is_strict() {
    // center x differs by exactly 50
    let regions = vec![
        region("Harry", 90.0, 0.0, 0.0, 40.0, 20.0),
        region("Potter", 90.0, 50.0, 30.0, 90.0, 50.0),
    ];

    let spines = detect_book_spines(&regions);

    assert_eq!(spines.len(), 2);
}

#[test]
fn test_vertical_gap_limit() {
    // dy 60 == 3 * 20 is too far, dy 59 merges
    let far = vec![
        region("Harry", 90.0, 0.0, 0.0, 40.0, 20.0),
        region("Potter", 90.0, 0.0, 60.0, 40.0, 80.0),
    ];
    let near = vec![
        region("Harry", 90.0, 0.0, 0.0, 40.0, 20.0),
        region("Potter", 90.0, 0.0, 59.0, 40.0, 79.0),
    ];

    assert_eq!(detect_book_spines(&far).len(), 2);
    assert_eq!(detect_book_spines(&near).len(), 1);
}

#[test]
fn test_row_alignment_gate() {
    // dy 55: close enough for a spine, too far for a row
    let regions = vec![
        region("Harry", 90.0, 0.0, 0.0, 40.0, 20.0),
        region("Potter", 90.0, 0.0, 55.0, 40.0, 75.0),
    ];

    let default_params = GroupingParams::default();
    let gated = GroupingParams {
        require_row_alignment: true,
        ..GroupingParams::default()
    };

    assert_eq!(
        group_regions_into_spines_with(&regions, &default_params).len(),
        1
    );
    assert_eq!(group_regions_into_spines_with(&regions, &gated).len(), 2);
}

#[test]
fn test_spine_titles_are_cleaned() {
    let regions = vec![region("42  The Hobbit!!", 90.0, 0.0, 0.0, 100.0, 20.0)];

    let spines = detect_book_spines(&regions);

    assert_eq!(spines.len(), 1);
    assert_eq!(spines[0].title, "The Hobbit");
}

#[test]
fn test_spine_words_iterate_all_regions() {
    let regions = vec![
        region("Harry", 90.0, 5.0, 70.0, 45.0, 90.0),
        region("Potter", 80.0, 0.0, 100.0, 40.0, 120.0),
    ];

    let spines = detect_book_spines(&regions);
    let texts: Vec<&str> = spines[0].words().map(|w| w.text.as_str()).collect();

    assert_eq!(texts, vec!["Harry", "Potter"]);
}

#[test]
fn test_spine_orientation_from_all_words() {
    let regions = vec![
        region("DUNE", 90.0, 0.0, 0.0, 20.0, 80.0),
        region("HERBERT", 90.0, 0.0, 90.0, 20.0, 200.0),
    ];

    let spines = detect_book_spines(&regions);

    assert_eq!(spines.len(), 1);
    assert_eq!(spines[0].orientation, Orientation::Vertical);
}

// ============================================================================
// Ranking Tests
// ============================================================================

#[test]
fn test_short_titles_rejected() {
    let ranked = rank_spines(vec![spine("It", 95.0, 0.0), spine("Dune", 95.0, 30.0)]);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].title, "Dune");
}

#[test]
fn test_confidence_threshold_is_strict() {
    let ranked = rank_spines(vec![
        spine("Emma", 30.0, 0.0),
        spine("Ulysses", 30.5, 30.0),
    ]);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].title, "Ulysses");
}

#[test]
fn test_title_length_counts_characters() {
    let ranked = rank_spines(vec![spine("Oé", 90.0, 0.0), spine("Ève", 90.0, 30.0)]);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].title, "Ève");
}

#[test]
fn test_ranked_top_to_bottom() {
    let ranked = rank_spines(vec![
        spine("Bottom", 90.0, 200.0),
        spine("Top", 90.0, 0.0),
        spine("Middle", 90.0, 100.0),
    ]);

    let titles: Vec<&str> = ranked.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Top", "Middle", "Bottom"]);
}

#[test]
fn test_equal_centers_keep_input_order() {
    let ranked = rank_spines(vec![
        spine("First", 90.0, 10.0),
        spine("Second", 90.0, 10.0),
    ]);

    assert_eq!(ranked[0].title, "First");
    assert_eq!(ranked[1].title, "Second");
}

#[test]
fn test_custom_thresholds() {
    let params = GroupingParams {
        min_title_length: 6,
        min_spine_confidence: 80.0,
        ..GroupingParams::default()
    };
    let regions = vec![
        region("Dune", 95.0, 0.0, 0.0, 40.0, 20.0),
        region("Ulysses", 70.0, 200.0, 0.0, 260.0, 20.0),
        region("Middlemarch", 90.0, 400.0, 0.0, 500.0, 20.0),
    ];

    let spines = detect_book_spines_with(&regions, &params);

    assert_eq!(spines.len(), 1);
    assert_eq!(spines[0].title, "Middlemarch");
}

// ============================================================================
// End To End Tests
// ============================================================================

#[test]
fn test_words_to_spines() {
    // A shelf of two books: "Harry Potter" on two lines, "Dune" further right.
    let words = vec![
        word("Harry", 90.0, 0.0, 0.0, 30.0, 20.0),
        word("Dune", 85.0, 300.0, 10.0, 340.0, 30.0),
        word("Potter", 80.0, 0.0, 50.0, 36.0, 70.0),
        word("x", 10.0, 600.0, 600.0, 605.0, 605.0),
    ];

    let regions = group_words_into_regions(&words);
    assert_eq!(regions.len(), 4);

    let spines = detect_book_spines(&regions);
    let titles: Vec<&str> = spines.iter().map(|s| s.title.as_str()).collect();

    assert_eq!(titles, vec!["Dune", "Harry Potter"]);
}
