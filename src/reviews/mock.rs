//! The hardcoded review catalog the site falls back to. Read-only for the
//! life of the process; live fetches replace what is *displayed*, never this.

use super::model::{Review, ReviewSource};
use std::sync::LazyLock;

const PRACTICE_MAPS_URL: &str =
    "https://www.google.com/maps/search/?api=1&query=Serenity+Space+Therapy+San+Francisco";

static MOCK_REVIEWS: LazyLock<Vec<Review>> = LazyLock::new(|| {
    vec![
        Review {
            id: "1".into(),
            author: "Sarah Jenkins".into(),
            rating: 5,
            text: "Dr. Alistair has a wonderfully calming presence. After just three sessions, \
                   I felt more equipped to handle my anxiety than I have in years. The clinic \
                   atmosphere is so soothing."
                .into(),
            date: "2 months ago".into(),
            source: ReviewSource::Google,
            url: Some(PRACTICE_MAPS_URL.into()),
        },
        Review {
            id: "2".into(),
            author: "Michael Chen".into(),
            rating: 5,
            text: "I was skeptical about therapy, but the cognitive behavioral approach used \
                   here is practical and effective. Highly recommend for anyone dealing with \
                   work stress."
                .into(),
            date: "1 month ago".into(),
            source: ReviewSource::Google,
            url: Some(PRACTICE_MAPS_URL.into()),
        },
        Review {
            id: "3".into(),
            author: "Emily R.".into(),
            rating: 4,
            text: "Great experience. The scheduling is flexible and the office is very private \
                   and comfortable. Helped me through a difficult transition period."
                .into(),
            date: "3 months ago".into(),
            source: ReviewSource::Direct,
            url: None,
        },
        Review {
            id: "4".into(),
            author: "David K.".into(),
            rating: 5,
            text: "Truly life-changing. The compassion and professional insight offered here \
                   are unmatched. I finally feel heard and understood."
                .into(),
            date: "2 weeks ago".into(),
            source: ReviewSource::Google,
            url: Some(PRACTICE_MAPS_URL.into()),
        },
        Review {
            id: "5".into(),
            author: "Anita Patel".into(),
            rating: 5,
            text: "A safe harbor in a storm. Thank you for the tools you have given me to \
                   rebuild my confidence."
                .into(),
            date: "4 months ago".into(),
            source: ReviewSource::Google,
            url: Some(PRACTICE_MAPS_URL.into()),
        },
    ]
});

pub fn mock_reviews() -> &'static [Review] {
    &MOCK_REVIEWS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_entries_with_required_fields() {
        let reviews = mock_reviews();
        assert_eq!(reviews.len(), 5);
        for review in reviews {
            assert!(!review.author.trim().is_empty());
            assert!(!review.text.trim().is_empty());
            assert!(!review.date.trim().is_empty());
        }
    }

    #[test]
    fn direct_entries_carry_no_attribution() {
        for review in mock_reviews() {
            match review.source {
                ReviewSource::Direct => assert!(review.url.is_none()),
                ReviewSource::Google => assert!(review.url.is_some()),
            }
        }
    }
}
