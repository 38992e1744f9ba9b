use owo_colors::OwoColorize;

/// 一覧表示のサマリ行
pub struct ListSummary {
    pub prefix: String,
    pub message: String,
}

impl ListSummary {
    pub fn format(shown: usize, total: usize, remaining: usize) -> Self {
        match (shown, remaining) {
            (0, _) => Self {
                prefix: "•".yellow().to_string(),
                message: "No matching books found".to_string(),
            },
            (s, 0) => Self {
                prefix: "✓".green().to_string(),
                message: format!("Showing all {} book(s)", s.green()),
            },
            (s, r) => Self {
                prefix: "…".cyan().to_string(),
                message: format!(
                    "Showing {} of {} book(s), {} more with --pages",
                    s.green(),
                    total,
                    r.yellow()
                ),
            },
        }
    }
}
