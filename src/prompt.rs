use crate::fetcher::NewsItem;

/// Render one group's items as the plain-text block fed to the model.
fn render_block(items: &[NewsItem]) -> String {
    items
        .iter()
        .map(|item| format!("Title: {}\nSummary: {}", item.title, item.summary))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the centrist-editor instruction prompt from both item lists.
/// Deterministic: identical inputs produce identical output.
pub fn build(left_items: &[NewsItem], right_items: &[NewsItem]) -> String {
    format!(
        r#"Act as a highly objective centrist news editor. Below is news data from two sources with different ideological perspectives:

LEFT-LEANING DATA:
{left}

RIGHT-LEANING DATA:
{right}

TASK:
1. Identify matching or similar stories reported across both sources.
2. For unique stories, summarize them objectively.
3. For shared stories, synthesize a "Centrist Synthesis" that:
   - Highlights agreed-upon facts.
   - Transparently points out where the narratives differ (e.g., "While Source A emphasizes X, Source B focuses on Y").
   - Avoids sensationalism and emotive language.

FORMAT:
Return the news in a structured bulleted format with:
- **[HEADLINE]**
- [CENTRIST SUMMARY: ~3-4 lines]
- [PERSPECTIVE NOTE: If significant bias difference exists]

Use professional, neutral journalism."#,
        left = render_block(left_items),
        right = render_block(right_items),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, summary: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            summary: summary.to_string(),
            link: format!("https://example.com/{}", title.to_lowercase()),
            published: None,
        }
    }

    #[test]
    fn test_render_block_format() {
        let items = vec![item("Headline", "Some detail")];
        assert_eq!(render_block(&items), "Title: Headline\nSummary: Some detail");
    }

    #[test]
    fn test_render_block_joins_with_newlines() {
        let items = vec![item("First", "a"), item("Second", "b")];
        assert_eq!(
            render_block(&items),
            "Title: First\nSummary: a\nTitle: Second\nSummary: b"
        );
    }

    #[test]
    fn test_render_block_empty_summary() {
        let items = vec![item("Only Title", "")];
        assert_eq!(render_block(&items), "Title: Only Title\nSummary: ");
    }

    #[test]
    fn test_prompt_contains_all_titles_verbatim() {
        let left = vec![item("Budget Passed", "x"), item("Strike Called Off", "y")];
        let right = vec![item("Election Results In", "z")];

        let prompt = build(&left, &right);

        assert!(prompt.contains("Budget Passed"));
        assert!(prompt.contains("Strike Called Off"));
        assert!(prompt.contains("Election Results In"));
    }

    #[test]
    fn test_prompt_places_titles_in_their_own_blocks() {
        // 3 left items and 5 right items, with one overlapping title
        let left = vec![item("A", ""), item("B", ""), item("C", "")];
        let right = vec![
            item("A", ""),
            item("D", ""),
            item("E", ""),
            item("F", ""),
            item("G", ""),
        ];

        let prompt = build(&left, &right);

        let split_at = prompt.find("RIGHT-LEANING DATA:").unwrap();
        let (left_half, right_half) = prompt.split_at(split_at);
        let task_at = right_half.find("TASK:").unwrap();
        let right_half = &right_half[..task_at];

        for title in ["A", "B", "C"] {
            let needle = format!("Title: {}\n", title);
            assert_eq!(left_half.matches(&needle).count(), 1, "left '{}'", title);
        }
        for title in ["A", "D", "E", "F", "G"] {
            let needle = format!("Title: {}\n", title);
            assert_eq!(right_half.matches(&needle).count(), 1, "right '{}'", title);
        }
    }

    #[test]
    fn test_prompt_contains_instructions_and_format() {
        let prompt = build(&[], &[]);

        assert!(prompt.contains("centrist news editor"));
        assert!(prompt.contains("Centrist Synthesis"));
        assert!(prompt.contains("**[HEADLINE]**"));
        assert!(prompt.contains("CENTRIST SUMMARY"));
        assert!(prompt.contains("PERSPECTIVE NOTE"));
    }

    #[test]
    fn test_prompt_deterministic() {
        let left = vec![item("Alpha", "one")];
        let right = vec![item("Beta", "two")];

        assert_eq!(build(&left, &right), build(&left, &right));
    }
}
