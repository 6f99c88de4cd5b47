use std::fmt;

use rand::Rng;

const POSITIVE_WORDS: [&str; 6] = ["good", "great", "excellent", "happy", "love", "amazing"];
const NEGATIVE_WORDS: [&str; 6] = ["bad", "sad", "awful", "terrible", "hate", "worst"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    /// Random confidence: [0.70, 0.95) for a polar label, [0.50, 0.70) for neutral.
    pub fn sample_confidence<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let (base, spread) = match self {
            Sentiment::Positive | Sentiment::Negative => (0.7, 0.25),
            Sentiment::Neutral => (0.5, 0.2),
        };
        let confidence = base + rng.gen::<f64>() * spread;
        (confidence * 10_000.0).round() / 10_000.0
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// +1 per positive keyword present, -1 per negative one. Substring match on
/// the lowercased text; repeats of one keyword count once.
pub fn keyword_score(text: &str) -> i32 {
    let text = text.to_lowercase();
    let hits = |words: &[&str]| words.iter().filter(|w| text.contains(*w)).count() as i32;
    hits(&POSITIVE_WORDS[..]) - hits(&NEGATIVE_WORDS[..])
}

pub fn classify(text: &str) -> Sentiment {
    match keyword_score(text) {
        s if s > 0 => Sentiment::Positive,
        s if s < 0 => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    #[rstest]
    #[case("This multi-cloud deployment strategy is excellent and amazing!", Sentiment::Positive)]
    #[case("Worst outage ever, awful", Sentiment::Negative)]
    #[case("good but sad", Sentiment::Neutral)]
    #[case("", Sentiment::Neutral)]
    #[case("GREAT", Sentiment::Positive)]
    fn classifies_by_keyword_balance(#[case] text: &str, #[case] expected: Sentiment) {
        assert_eq!(classify(text), expected);
    }

    #[test]
    fn repeated_keyword_counts_once() {
        assert_eq!(keyword_score("love love love"), 1);
    }

    #[test]
    fn confidence_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let polar = Sentiment::Negative.sample_confidence(&mut rng);
            assert!((0.7..=0.95).contains(&polar));
            let neutral = Sentiment::Neutral.sample_confidence(&mut rng);
            assert!((0.5..=0.7).contains(&neutral));
        }
    }
}
