//! Console output: the generation summary and the manual runbook
//!
//! Everything here builds strings; callers decide where to print them.

use chrono::NaiveDate;
use colored::Colorize;

use uranai::PromptResult;

const RULE_WIDTH: usize = 60;
const PREVIEW_CHARS: usize = 100;
const VIDEO_SITE: &str = "https://sora.chatgpt.com";

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// "#1 LEO - comment", or just "LEO" for unranked records
fn headline(prompt: &PromptResult) -> String {
    let sign = prompt.sign.to_uppercase();
    match (prompt.rank, prompt.comment.as_deref()) {
        (Some(rank), Some(comment)) if !comment.is_empty() => {
            format!("#{} {} - {}", rank, sign, comment)
        }
        (Some(rank), _) => format!("#{} {}", rank, sign),
        (None, _) => sign,
    }
}

/// Banner printed after a generation run
pub fn format_summary(title: &str, date: NaiveDate, prompts: &[PromptResult]) -> String {
    let mut lines = vec![
        String::new(),
        heavy_rule(),
        format!("  {} ({})", title.bold(), date),
        heavy_rule(),
    ];

    for prompt in prompts {
        lines.push(String::new());
        lines.push(format!("  {}", headline(prompt).cyan().bold()));
        if let Some(item) = prompt.lucky_item.as_deref().filter(|i| !i.is_empty()) {
            lines.push(format!("  Lucky item: {}", item));
        }
        lines.push(format!(
            "  Sora Prompt ({} chars):",
            prompt.prompt.chars().count()
        ));
        lines.push(format!("  {}", preview(&prompt.prompt, PREVIEW_CHARS).dimmed()));
    }

    lines.push(String::new());
    lines.push(heavy_rule());
    lines.join("\n")
}

/// Fixed checklist for whoever drives the video site by hand
pub fn format_runbook(date: NaiveDate, prompts: &[PromptResult]) -> String {
    let total = prompts.len();
    let mut lines = vec![
        String::new(),
        heavy_rule(),
        format!("  {} ({})", "Daily Video Generation".bold(), date),
        heavy_rule(),
        String::new(),
        format!("  {} videos to generate:", total),
        String::new(),
    ];

    for prompt in prompts {
        lines.push(format!("  {}", headline(prompt)));
    }

    lines.push(String::new());
    lines.push(light_rule());
    lines.push(format!("  {}", "Instructions (copy and paste):".yellow()));
    lines.push(light_rule());
    lines.push(String::new());
    lines.push(format!(
        "  Generate the videos on {} as follows:",
        VIDEO_SITE
    ));
    lines.push(String::new());
    lines.push("  1. Open the Explore page".to_string());
    lines.push("  2. For each prompt:".to_string());
    lines.push("     a. Type the prompt into the text box".to_string());
    lines.push("     b. Click \"Create video\"".to_string());
    lines.push("     c. Move on to the next prompt".to_string());
    lines.push("  3. Wait on the Drafts page until rendering finishes (about 1-2 minutes each)".to_string());
    lines.push("  4. For each video, open \"...\" and choose \"Copy link\"".to_string());
    lines.push(format!(
        "  5. Record every link with `uranai record <sign> <url>` (saved to results/{}_videos.json)",
        date
    ));
    lines.push(String::new());
    lines.push(format!("  {}", "Prompts:".bold()));
    lines.push(light_rule());

    for (i, prompt) in prompts.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("  [{}/{}] {}", i + 1, total, headline(prompt).cyan()));
        lines.push(format!("  {}", prompt.prompt));
    }

    lines.push(String::new());
    lines.push(heavy_rule());
    lines.push(browser_steps(date, total));
    lines.join("\n")
}

/// Step list for an agent operating the site through browser tools
pub fn browser_steps(date: NaiveDate, count: usize) -> String {
    format!(
        r#"
=== Browser automation steps ===

Step 1: Open the video site
  -> browser_navigate("{site}/explore")

Step 2: Submit each prompt (repeat {count} times)
  -> browser_click(textbox "Describe your video...")
  -> browser_fill_form(textbox, prompt_text)
  -> browser_click(button "Create video")
  -> wait 5 seconds

Step 3: Confirm completion in Drafts
  -> browser_navigate("{site}/drafts")
  -> wait 60 seconds
  -> browser_take_screenshot() to check progress
  -> repeat until no loading spinner remains

Step 4: Collect each video link
  -> click the video
  -> "..." menu -> "Copy link" -> confirm "Copy link" in the dialog
  -> note the URL (/p/s_xxx form)

Step 5: Save results
  -> results/{date}_videos.json
"#,
        site = VIDEO_SITE,
        count = count,
        date = date
    )
}

/// Truncate by char count (UTF-8 safe), always marking the cut
fn preview(s: &str, max_chars: usize) -> String {
    let head: String = s.chars().take(max_chars).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uranai::RankingEntry;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn ranked() -> Vec<PromptResult> {
        vec![
            PromptResult::for_entry(
                &RankingEntry::new(1, "leo", "Shine", "gold ring"),
                "p1".to_string(),
                date(),
            ),
            PromptResult::for_entry(
                &RankingEntry::new(2, "pisces", "", ""),
                "p2".to_string(),
                date(),
            ),
        ]
    }

    #[test]
    fn test_headline_variants() {
        let prompts = ranked();
        assert_eq!(headline(&prompts[0]), "#1 LEO - Shine");
        assert_eq!(headline(&prompts[1]), "#2 PISCES");

        let unranked = PromptResult::for_sign("virgo", "p".to_string(), date());
        assert_eq!(headline(&unranked), "VIRGO");
    }

    #[test]
    fn test_preview_counts_chars() {
        assert_eq!(preview("星座占い動画", 2), "星座...");
        assert_eq!(preview("abc", 10), "abc...");
    }

    #[test]
    fn test_runbook_lists_every_prompt() {
        let runbook = format_runbook(date(), &ranked());

        assert!(runbook.contains("2 videos to generate:"));
        assert!(runbook.contains("[1/2]"));
        assert!(runbook.contains("[2/2]"));
        assert!(runbook.contains("  p1"));
        assert!(runbook.contains("  p2"));
        assert!(runbook.contains("results/2026-10-14_videos.json"));
        assert!(runbook.contains("repeat 2 times"));
    }

    #[test]
    fn test_summary_shows_lengths() {
        let summary = format_summary("Top 3 Zodiac Sora Prompts", date(), &ranked());
        assert!(summary.contains("(2026-10-14)"));
        assert!(summary.contains("Sora Prompt (2 chars):"));
        assert!(summary.contains("Lucky item: gold ring"));
    }
}
