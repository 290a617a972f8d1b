//! Configuration options and named tuning constants for content extraction.
//!
//! The thresholds below are empirically tuned values inherited from the
//! original heuristics. They are preserved as named constants rather than
//! re-derived; treat them as calibration data, not knobs with a derivation.

/// Minimum visible text length of a node before it contributes score.
pub const MIN_SCORABLE_TEXT_LEN: usize = 25;

/// How many ancestor levels receive a share of a node's content score.
pub const ANCESTOR_SCORE_LEVELS: usize = 3;

/// Length bonus cap: `min(text_len / 100, 3)`.
pub const MAX_LENGTH_BONUS: usize = 3;

/// Absolute floor for the sibling-inclusion score threshold.
pub const SIBLING_SCORE_FLOOR: f64 = 10.0;

/// Fraction of the top candidate's score a sibling candidate must reach.
pub const SIBLING_SCORE_RATIO: f64 = 0.2;

/// Paragraph siblings longer than this are included regardless of score.
pub const SIBLING_PARAGRAPH_MIN_LEN: usize = 80;

/// Paragraph siblings must stay under this link density to be included.
pub const SIBLING_MAX_LINK_DENSITY: f64 = 0.25;

/// The ancestor climb stops once a parent scores below `best / 3`.
pub const CLIMB_SCORE_DIVISOR: f64 = 3.0;

/// Description is the first this-many characters of the extracted text.
pub const DESCRIPTION_LEN: usize = 200;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readability::Options;
///
/// let options = Options {
///     clean_links: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Collapse anchor wrappers in the final content to their inner text.
    ///
    /// Default: `false`
    pub clean_links: bool,

    /// Minimum visible text length (whitespace collapsed) the strict pass
    /// must produce before the relaxed retry is skipped.
    ///
    /// Default: `500`
    pub min_retry_text_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            clean_links: false,
            min_retry_text_len: 500,
        }
    }
}
