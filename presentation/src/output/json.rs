//! JSON output formatter

use crate::output::formatter::{ADOPTION_HOTLINE, OutputFormatter};
use petmatch_application::CatalogView;
use petmatch_domain::{FilterQuery, Personality, PetRecord};
use serde_json::json;

/// Formats gallery data as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: &serde_json::Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_listing(&self, view: &CatalogView, query: &FilterQuery) -> String {
        Self::render(&json!({
            "view": view.view,
            "query": query,
            "total": view.records().len(),
            "pets": view.visible(query),
        }))
    }

    fn format_categories(&self, options: &[String]) -> String {
        Self::render(&json!(options))
    }

    fn format_record(&self, record: &PetRecord) -> String {
        Self::render(&json!(record))
    }

    fn format_personality(&self, personality: &Personality) -> String {
        Self::render(&json!(personality))
    }

    fn format_adoption(&self) -> String {
        Self::render(&json!({ "hotline": ADOPTION_HOTLINE }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petmatch_domain::{CategoryFilter, ViewMode};

    #[test]
    fn test_listing_json_holds_filtered_pets() {
        let view = CatalogView::new(
            ViewMode::Home,
            vec![PetRecord::new("Buddy", "Dog"), PetRecord::new("Milo", "Cat")],
        );
        let query = FilterQuery::new("", CategoryFilter::Only("Cat".into()));
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_listing(&view, &query)).unwrap();

        assert_eq!(value["view"], "home");
        assert_eq!(value["total"], 2);
        assert_eq!(value["pets"].as_array().unwrap().len(), 1);
        assert_eq!(value["pets"][0]["name"], "Milo");
    }

    #[test]
    fn test_categories_json_array() {
        let options = vec!["all".to_string(), "Dog".to_string()];
        assert_eq!(
            serde_json::from_str::<Vec<String>>(&JsonFormatter.format_categories(&options)).unwrap(),
            options
        );
    }
}
