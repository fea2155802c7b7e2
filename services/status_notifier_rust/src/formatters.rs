use homework_bot_core::models::Homework;

/// Notification text for a homework whose review status changed
pub fn format_status_change(homework: &Homework) -> String {
    let mut out = format!(
        "Review status of \"{}\" changed to {}. {}",
        homework.homework_name,
        homework.status,
        homework.status.verdict()
    );

    if let Some(lesson) = homework.lesson_name.as_deref().filter(|s| !s.trim().is_empty()) {
        out.push_str(&format!("\nLesson: {lesson}"));
    }
    if let Some(comment) = homework
        .reviewer_comment
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        out.push_str(&format!("\nReviewer comment: {comment}"));
    }
    if let Some(ts) = homework.date_updated {
        out.push_str(&format!("\nUpdated: {}", ts.format("%Y-%m-%d %H:%M UTC")));
    }
    out
}

/// Text of the optional failure report.
///
/// Only the outermost context is used: it is short and stays the same while
/// the same fault repeats, which is what report deduplication keys on.
pub fn format_failure(error: &anyhow::Error) -> String {
    format!("⚠️ Bot failure: {error}")
}
