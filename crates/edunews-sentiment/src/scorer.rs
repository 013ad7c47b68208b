//! General-purpose lexicon scorer for televised news snippets.

/// Word weights as `(word, polarity, subjectivity)`.
///
/// Keys are lowercase single words. Polarity is in `[-1.0, 1.0]`,
/// subjectivity in `[0.0, 1.0]`. Text scores are the mean over matched
/// words, so one strong word cannot saturate a long snippet.
pub(crate) const LEXICON: &[(&str, f32, f32)] = &[
    // Positive signals
    ("great", 0.8, 0.75),
    ("good", 0.7, 0.6),
    ("excellent", 1.0, 1.0),
    ("outstanding", 0.9, 0.9),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("improve", 0.4, 0.4),
    ("improved", 0.4, 0.4),
    ("improving", 0.4, 0.4),
    ("improvement", 0.4, 0.4),
    ("success", 0.8, 0.7),
    ("successful", 0.75, 0.75),
    ("achieve", 0.5, 0.4),
    ("achievement", 0.6, 0.5),
    ("win", 0.8, 0.6),
    ("winning", 0.8, 0.6),
    ("victory", 0.7, 0.6),
    ("award", 0.6, 0.4),
    ("awarded", 0.6, 0.4),
    ("praise", 0.7, 0.7),
    ("praised", 0.7, 0.7),
    ("celebrate", 0.7, 0.6),
    ("celebrated", 0.7, 0.6),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("proud", 0.8, 0.8),
    ("hope", 0.5, 0.6),
    ("hopeful", 0.6, 0.7),
    ("support", 0.4, 0.3),
    ("supported", 0.4, 0.3),
    ("progress", 0.5, 0.4),
    ("growth", 0.4, 0.3),
    ("growing", 0.3, 0.4),
    ("benefit", 0.5, 0.4),
    ("benefits", 0.5, 0.4),
    ("effective", 0.6, 0.6),
    ("strong", 0.6, 0.5),
    ("stronger", 0.6, 0.5),
    ("safe", 0.5, 0.5),
    ("safer", 0.5, 0.5),
    ("innovative", 0.6, 0.7),
    ("thrive", 0.7, 0.6),
    ("thriving", 0.7, 0.6),
    ("boost", 0.5, 0.4),
    ("gain", 0.4, 0.3),
    ("gains", 0.4, 0.3),
    ("opportunity", 0.4, 0.4),
    ("opportunities", 0.4, 0.4),
    ("popular", 0.4, 0.5),
    ("quality", 0.3, 0.4),
    ("welcome", 0.5, 0.5),
    ("inspire", 0.6, 0.7),
    ("inspiring", 0.7, 0.8),
    ("dedicated", 0.6, 0.6),
    ("excited", 0.7, 0.8),
    ("exciting", 0.7, 0.8),
    // Negative signals
    ("bad", -0.7, 0.65),
    ("terrible", -1.0, 1.0),
    ("worst", -1.0, 0.3),
    ("worse", -0.6, 0.5),
    ("poor", -0.6, 0.6),
    ("crisis", -0.8, 0.6),
    ("fail", -0.6, 0.5),
    ("failed", -0.6, 0.5),
    ("failing", -0.6, 0.6),
    ("failure", -0.7, 0.6),
    ("cut", -0.3, 0.2),
    ("cuts", -0.3, 0.2),
    ("shortage", -0.5, 0.3),
    ("shortages", -0.5, 0.3),
    ("strike", -0.4, 0.3),
    ("ban", -0.5, 0.4),
    ("banned", -0.5, 0.4),
    ("violence", -0.8, 0.5),
    ("violent", -0.8, 0.6),
    ("threat", -0.6, 0.5),
    ("threats", -0.6, 0.5),
    ("threatened", -0.6, 0.5),
    ("concern", -0.3, 0.4),
    ("concerns", -0.3, 0.4),
    ("concerned", -0.4, 0.5),
    ("problem", -0.4, 0.3),
    ("problems", -0.4, 0.3),
    ("trouble", -0.5, 0.4),
    ("troubled", -0.5, 0.5),
    ("decline", -0.4, 0.3),
    ("declining", -0.4, 0.4),
    ("drop", -0.3, 0.2),
    ("dropped", -0.3, 0.2),
    ("loss", -0.4, 0.3),
    ("losses", -0.4, 0.3),
    ("lost", -0.4, 0.3),
    ("lawsuit", -0.4, 0.3),
    ("scandal", -0.8, 0.7),
    ("fear", -0.6, 0.6),
    ("fears", -0.6, 0.6),
    ("angry", -0.7, 0.8),
    ("anger", -0.6, 0.6),
    ("protest", -0.3, 0.3),
    ("protests", -0.3, 0.3),
    ("unsafe", -0.6, 0.6),
    ("dangerous", -0.7, 0.7),
    ("harmful", -0.6, 0.6),
    ("overcrowded", -0.5, 0.5),
    ("underfunded", -0.6, 0.5),
    ("deficit", -0.4, 0.3),
    ("debt", -0.4, 0.3),
    ("controversy", -0.4, 0.6),
    ("controversial", -0.3, 0.7),
    ("criticized", -0.5, 0.6),
    ("criticism", -0.4, 0.5),
    ("warning", -0.4, 0.4),
    ("warn", -0.4, 0.4),
    ("warned", -0.4, 0.4),
    ("risk", -0.4, 0.4),
    ("risks", -0.4, 0.4),
    ("struggle", -0.5, 0.5),
    ("struggling", -0.5, 0.5),
    ("closure", -0.4, 0.3),
    ("closures", -0.4, 0.3),
    ("layoffs", -0.6, 0.4),
    ("dropout", -0.5, 0.4),
    ("dropouts", -0.5, 0.4),
    ("bullying", -0.7, 0.6),
    ("cheating", -0.6, 0.6),
    ("crime", -0.6, 0.4),
    ("emergency", -0.5, 0.4),
    ("outrage", -0.8, 0.8),
    ("outraged", -0.8, 0.8),
    ("blame", -0.5, 0.6),
    ("blamed", -0.5, 0.6),
    ("chaos", -0.7, 0.7),
    ("broken", -0.5, 0.5),
    ("disappointing", -0.6, 0.75),
    ("disappointed", -0.6, 0.75),
    // Hedging and attribution: little polarity, high subjectivity
    ("allegedly", 0.0, 0.8),
    ("alleged", 0.0, 0.8),
    ("reportedly", 0.0, 0.5),
    ("claims", 0.0, 0.6),
    ("claimed", 0.0, 0.6),
    ("apparently", 0.0, 0.7),
    ("surprising", 0.1, 0.9),
    ("surprisingly", 0.1, 0.9),
];

/// Words that invert the polarity of a following sentiment word.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "nothing", "cannot", "hardly", "barely", "without",
];

/// Polarity multiplier under negation. A full flip overstates reversals:
/// "not great" reads lukewarm, not awful.
const NEGATION_FACTOR: f32 = -0.5;

/// How many following tokens a negator covers before it lapses.
const NEGATION_WINDOW: u8 = 2;

/// Sentiment of one text: polarity in `[-1.0, 1.0]`, subjectivity in
/// `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub polarity: f32,
    pub subjectivity: f32,
}

impl Sentiment {
    /// The score for text with no lexicon matches, including empty text.
    pub const NEUTRAL: Self = Self {
        polarity: 0.0,
        subjectivity: 0.0,
    };
}

/// Score a text string using the lexicon.
///
/// Splits text into lowercase words, strips surrounding punctuation, and
/// averages polarity and subjectivity over matched words. A negator
/// ("not", "never", a "n't" contraction) inverts and dampens the polarity of
/// the next sentiment word within [`NEGATION_WINDOW`] tokens. Returns
/// [`Sentiment::NEUTRAL`] for empty or unmatched text.
#[must_use]
pub fn analyze(text: &str) -> Sentiment {
    let mut polarity_sum = 0.0_f32;
    let mut subjectivity_sum = 0.0_f32;
    let mut hits = 0_u32;
    let mut negation_window = 0_u8;

    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if w.is_empty() {
            continue;
        }
        if NEGATORS.contains(&w.as_str()) || w.ends_with("n't") {
            negation_window = NEGATION_WINDOW;
            continue;
        }
        if let Some(&(_, polarity, subjectivity)) =
            LEXICON.iter().find(|(lex_word, _, _)| *lex_word == w)
        {
            polarity_sum += if negation_window > 0 {
                polarity * NEGATION_FACTOR
            } else {
                polarity
            };
            subjectivity_sum += subjectivity;
            hits += 1;
            negation_window = 0;
        } else {
            negation_window = negation_window.saturating_sub(1);
        }
    }

    if hits == 0 {
        return Sentiment::NEUTRAL;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = hits as f32;
    Sentiment {
        polarity: (polarity_sum / count).clamp(-1.0, 1.0),
        subjectivity: (subjectivity_sum / count).clamp(0.0, 1.0),
    }
}
