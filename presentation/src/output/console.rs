//! Console output formatter for gallery listings

use crate::output::formatter::{ADOPTION_HOTLINE, OutputFormatter};
use colored::Colorize;
use petmatch_application::{CatalogView, Notice};
use petmatch_domain::core::string::{capitalize, truncate};
use petmatch_domain::{FilterQuery, Personality, PetRecord, QUIZ_CAPACITY, SelectionSet};

/// Formats gallery data as cards for console display
pub struct ConsoleFormatter {
    description_width: usize,
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(60)
    }
}

impl ConsoleFormatter {
    pub fn new(description_width: usize) -> Self {
        Self { description_width }
    }

    /// One numbered card; `marker` is shown in front of the number
    pub fn card(&self, index: usize, pet: &PetRecord, marker: &str) -> String {
        let mut output = format!(
            "{}{} {} {}",
            marker,
            format!("[{}]", index).dimmed(),
            pet.display_title().bold(),
            format!("({})", capitalize(&pet.category)).cyan()
        );

        if let Some(votes) = pet.votes {
            output.push_str(&format!("  {} {}", "votes:".dimmed(), votes));
        }
        if let Some(id) = &pet.id {
            output.push_str(&format!("  {}", format!("#{}", id).dimmed()));
        }
        output.push('\n');

        if !pet.description.is_empty() {
            output.push_str(&format!(
                "    {}\n",
                truncate(&pet.description, self.description_width)
            ));
        }
        if let Some(comment) = &pet.user_comment {
            output.push_str(&format!("    {} {}\n", "note:".dimmed(), comment));
        }
        if !pet.image_url.is_empty() {
            output.push_str(&format!("    {}\n", pet.image_url.blue().underline()));
        }
        output
    }

    /// Numbered cards for the quiz, marking current picks
    pub fn format_board(&self, pets: &[PetRecord], selection: &SelectionSet) -> String {
        let mut output = String::new();
        for (i, pet) in pets.iter().enumerate() {
            let marker = if selection.contains(&pet.key()) {
                "* ".green().bold().to_string()
            } else {
                "  ".to_string()
            };
            output.push_str(&self.card(i + 1, pet, &marker));
        }
        output.push_str(&format!(
            "\n{} {}/{}\n",
            "Picked:".cyan().bold(),
            selection.len(),
            QUIZ_CAPACITY
        ));
        output
    }

    /// Render a transient notice on one line
    pub fn format_notice(notice: &Notice) -> String {
        match notice {
            Notice::Success(m) => format!("{} {}", "v".green(), m),
            Notice::Warning(m) => format!("{} {}", "!".yellow(), m.yellow()),
            Notice::Failure(m) => format!("{} {}", "x".red(), m.red()),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    /// Indent a multi-line string
    fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_listing(&self, view: &CatalogView, query: &FilterQuery) -> String {
        let mut output = Self::header(view.view.heading());
        output.push('\n');

        if !query.is_unrestricted() {
            output.push_str(&format!(
                "{} \"{}\"  {} {}\n",
                "Search:".dimmed(),
                query.search_term,
                "Category:".dimmed(),
                query.category
            ));
        }
        output.push('\n');

        let visible = view.visible(query);
        if visible.is_empty() {
            output.push_str(&format!("{}\n", view.view.empty_message().dimmed()));
            return output;
        }

        for (i, pet) in visible.iter().enumerate() {
            output.push_str(&self.card(i + 1, pet, ""));
        }
        output.push_str(&format!(
            "\n{} of {} shown\n",
            visible.len(),
            view.records().len()
        ));
        output
    }

    fn format_categories(&self, options: &[String]) -> String {
        options
            .iter()
            .map(|c| format!("  {}", c))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_record(&self, record: &PetRecord) -> String {
        self.card(1, record, "")
    }

    fn format_personality(&self, personality: &Personality) -> String {
        let title = if personality.is_fallback {
            "Hmm...".yellow().bold()
        } else {
            "Your Pet Personality".green().bold()
        };
        format!("\n{}\n\n{}\n", title, Self::indent(&personality.label, "  "))
    }

    fn format_adoption(&self) -> String {
        format!(
            "{}\nReady to adopt? Give us a call!\n\n  {}\n",
            "Adoption Hotline".bold(),
            ADOPTION_HOTLINE.cyan().bold()
        )
    }
}
