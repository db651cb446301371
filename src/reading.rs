//! Reading aids shown around an article.

/// Average adult reading speed used for estimates.
pub const WORDS_PER_MINUTE: usize = 250;

/// Estimated minutes to read `text`. Never less than one.
pub fn reading_time_minutes(text: &str) -> usize {
    let words = text.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// How far through the article the reader is, in percent.
///
/// Progress starts when the article top is a third of the way down the
/// window and completes when its bottom reaches that line.
pub fn reading_progress(
    article_top: f32,
    article_height: f32,
    window_height: f32,
    scroll_top: f32,
) -> f32 {
    let start = article_top - window_height / 3.0;
    let end = article_top + article_height - window_height / 3.0;
    let span = end - start;
    if span <= 0.0 {
        return if scroll_top < start { 0.0 } else { 100.0 };
    }
    ((scroll_top - start) / span * 100.0).clamp(0.0, 100.0)
}

/// Session storage key for a page's scroll offset.
pub fn scroll_key(slug: &str) -> String {
    format!("scroll-{slug}")
}
