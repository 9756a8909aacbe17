use std::io::{self, BufRead, Write};

use muse::core::idea::Idea;
use muse::pagination::{self, PageMarker};
use muse::remote::FeedPage;

/// Print one feed page: a count header, the ideas newest first, and a
/// page-selector line when there is more than one page.
pub fn print_page(page: &FeedPage) {
    println!("All ideas ({})", page.total_count);

    if page.ideas.is_empty() {
        println!("\nNo ideas yet — add the first one!");
        return;
    }

    for idea in &page.ideas {
        println!();
        println!(
            "{}  {}",
            idea.created_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M"),
            idea.id
        );
        println!("{}", idea.content);
    }

    if page.total_pages > 1 {
        println!("\n{}", pager_line(page.page, page.total_pages));
    }
}

/// Render the page-selector line from page-index markers,
/// e.g. `1 … 4 [5] 6 … 10`.
pub fn pager_line(current: u64, total: u64) -> String {
    let current_signed = i64::try_from(current).unwrap_or(i64::MAX);
    pagination::page_index(current_signed, total)
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(p) if *p == current => format!("[{}]", p),
            PageMarker::Page(p) => p.to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// First line of an idea, truncated on a character boundary.
pub fn content_preview(content: &str, max_chars: usize) -> String {
    let first_line = content.lines().next().unwrap_or("");
    let mut preview: String = first_line.chars().take(max_chars).collect();
    if first_line.chars().count() > max_chars || content.lines().count() > 1 {
        preview.push('…');
    }
    preview
}

/// Ask the user to confirm a deletion, showing what is about to go.
pub fn confirm_delete(idea: &Idea) -> bool {
    println!("Delete this idea?");
    println!("  {}", content_preview(&idea.content, 80));
    print!("[y/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_line_marks_current_page() {
        assert_eq!(pager_line(5, 10), "1 … 3 4 [5] 6 7 … 10");
        assert_eq!(pager_line(1, 3), "[1] 2 3");
    }

    #[test]
    fn pager_line_single_page() {
        assert_eq!(pager_line(1, 1), "[1]");
    }

    #[test]
    fn preview_keeps_short_single_line() {
        assert_eq!(content_preview("buy oat milk", 80), "buy oat milk");
    }

    #[test]
    fn preview_truncates_and_marks_continuation() {
        assert_eq!(content_preview("abcdef", 3), "abc…");
        assert_eq!(content_preview("first line\nsecond", 80), "first line…");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        assert_eq!(content_preview("想法想法", 2), "想法…");
    }
}
