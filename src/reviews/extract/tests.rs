use super::*;

const ATTRIBUTION: &str = "https://maps.example/x";

fn block(author: &str, rating: &str, date: &str, text: &str) -> String {
    format!("START_REVIEW\nAuthor: {author}\nRating: {rating}\nDate: {date}\nText: {text}\nEND_REVIEW\n")
}

#[test]
fn extracts_all_well_formed_blocks_in_order() {
    let raw = format!(
        "{}{}{}",
        block("Jane Doe", "5", "1 week ago", "Excellent care."),
        block("John Roe", "4", "2 weeks ago", "Very helpful."),
        block("Ann Poe", "5", "1 month ago", "Changed my life."),
    );
    let reviews = extract_reviews(&raw, ATTRIBUTION);

    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0].author, "Jane Doe");
    assert_eq!(reviews[1].author, "John Roe");
    assert_eq!(reviews[2].author, "Ann Poe");
}

#[test]
fn spec_scenario_single_block() {
    let raw = "START_REVIEW\nAuthor: Jane Doe\nRating: 5\nDate: 1 week ago\nText: Excellent care.\nEND_REVIEW";
    let reviews = extract_reviews(raw, ATTRIBUTION);

    assert_eq!(reviews.len(), 1);
    let review = &reviews[0];
    assert_eq!(review.author, "Jane Doe");
    assert_eq!(review.rating, 5);
    assert_eq!(review.date, "1 week ago");
    assert_eq!(review.text, "Excellent care.");
    assert_eq!(review.source, ReviewSource::Google);
    assert_eq!(review.url.as_deref(), Some(ATTRIBUTION));
}

#[test]
fn block_missing_rating_is_dropped_others_survive() {
    let raw = format!(
        "{}START_REVIEW\nAuthor: No Stars\nDate: today\nText: Missing rating.\nEND_REVIEW\n{}",
        block("First Ok", "5", "1 week ago", "Fine."),
        block("Second Ok", "4", "2 weeks ago", "Also fine."),
    );
    let reviews = extract_reviews(&raw, ATTRIBUTION);

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].author, "First Ok");
    assert_eq!(reviews[1].author, "Second Ok");
}

#[test]
fn ids_number_accepted_records_without_gaps() {
    let raw = format!(
        "START_REVIEW\nAuthor: Broken\nText: no rating here\nEND_REVIEW\n{}",
        block("Kept", "5", "now", "Good."),
    );
    let reviews = extract_reviews(&raw, ATTRIBUTION);

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, "google-live-0");
}

#[test]
fn missing_date_defaults_to_recent() {
    let raw = "START_REVIEW\nAuthor: Jane\nRating: 5\nText: Lovely.\nEND_REVIEW";
    let reviews = extract_reviews(raw, ATTRIBUTION);

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].date, "Recent");
}

#[test]
fn emphasis_markers_around_labels_are_tolerated() {
    let raw =
        "START_REVIEW\n**Author:** Jane Doe\n**Rating:** 5\n**Date:** 1 week ago\n**Text:** Excellent care.\nEND_REVIEW";
    let reviews = extract_reviews(raw, ATTRIBUTION);

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].author, "Jane Doe");
    assert_eq!(reviews[0].rating, 5);
    assert_eq!(reviews[0].text, "Excellent care.");
}

#[test]
fn field_labels_match_case_insensitively() {
    let raw = "START_REVIEW\nAUTHOR: Jane\nrating: 3\ntext: ok\nEND_REVIEW";
    let reviews = extract_reviews(raw, ATTRIBUTION);

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].rating, 3);
}

#[test]
fn preamble_before_first_marker_is_ignored() {
    let raw = format!(
        "Sure! Here are the reviews you asked for:\n\n{}",
        block("Jane", "5", "today", "Great."),
    );
    let reviews = extract_reviews(&raw, ATTRIBUTION);
    assert_eq!(reviews.len(), 1);
}

#[test]
fn multi_line_text_is_captured_up_to_end_marker() {
    let raw = "START_REVIEW\nAuthor: Jane\nRating: 5\nText: First line.\nSecond line.\nEND_REVIEW";
    let reviews = extract_reviews(raw, ATTRIBUTION);

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].text, "First line.\nSecond line.");
}

#[test]
fn text_without_end_marker_consumes_rest_of_segment() {
    let raw = "START_REVIEW\nAuthor: Jane\nRating: 5\nText: Trails off without a closer";
    let reviews = extract_reviews(raw, ATTRIBUTION);

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].text, "Trails off without a closer");
}

#[test]
fn non_digit_rating_drops_the_block() {
    let raw = "START_REVIEW\nAuthor: Jane\nRating: five\nText: Nope.\nEND_REVIEW";
    assert!(extract_reviews(raw, ATTRIBUTION).is_empty());
}

#[test]
fn out_of_range_rating_passes_through() {
    let raw = "START_REVIEW\nAuthor: Jane\nRating: 7\nText: Enthusiastic.\nEND_REVIEW";
    let reviews = extract_reviews(raw, ATTRIBUTION);

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].rating, 7);
}

#[test]
fn empty_input_yields_nothing() {
    assert!(extract_reviews("", ATTRIBUTION).is_empty());
}

#[test]
fn marker_free_prose_yields_nothing() {
    let raw = "I could not find any reviews for that practice, sorry.";
    assert!(extract_reviews(raw, ATTRIBUTION).is_empty());
}
