//! Output formatter trait

use petmatch_application::CatalogView;
use petmatch_domain::{FilterQuery, Personality, PetRecord};

/// Trait for rendering gallery results
pub trait OutputFormatter {
    /// Render the records of `view` that pass `query`
    fn format_listing(&self, view: &CatalogView, query: &FilterQuery) -> String;

    /// Render the category options (sentinel first)
    fn format_categories(&self, options: &[String]) -> String;

    /// Render a single record returned by an action
    fn format_record(&self, record: &PetRecord) -> String;

    /// Render a quiz result
    fn format_personality(&self, personality: &Personality) -> String;

    /// Render the adoption contact
    fn format_adoption(&self) -> String;
}

/// Phone line for adoption enquiries
pub const ADOPTION_HOTLINE: &str = "+233-55-123-4567";
