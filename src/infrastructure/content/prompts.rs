use crate::domain::article::{Article, Category};
use serde_json::{Value, json};

pub(super) const LATEST_ARTICLES: &str = "\
You are the editor-in-chief of a prestigious international logistics magazine like The Loadstar or JOC.
Generate 7 diverse, high-quality article summaries about current trends in international logistics.

Topics to cover:
- Pharma & Cold Chain Logistics (Key focus: GxP compliance, Temperature Monitoring, Active/Passive Packaging)
- Air Freight rates, capacity, Airlines strategies, and Airport infrastructure
- Ocean Freight container indices (SCFI) and port congestion
- Global Supply Chain resilience
- Major Logistics Events & Conferences
- New Regulations (EU ETS, C-BAM)

Output JSON format strictly. Include a list of 3-5 relevant short tags for each article.
Ensure tags frequently include terms like 'Pharma', 'Cold Chain', 'Packaging', 'Monitoring', 'GxP', 'Events', 'Airlines', 'Airport' where applicable.";

pub(super) fn article_body(article: &Article) -> String {
    format!(
        "Write a professional, in-depth magazine article (approx 500 words) based on this headline: \"{title}\".
Category: {category}.
Summary context: {summary}.
Tags: {tags}.

Style: Analytical, data-driven, professional tone suitable for logistics managers.
If related to Pharma/Cold Chain, emphasize GxP compliance and packaging technologies.
Include subheadings.
Format: Markdown.",
        title = article.title,
        category = article.category,
        summary = article.summary,
        tags = article.tags.join(", "),
    )
}

/// Structured-output schema for the listing call; categories are limited to
/// real article categories.
pub(super) fn latest_articles_schema() -> Value {
    let categories: Vec<&str> = Category::ALL.iter().map(|category| category.label()).collect();
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "title": { "type": "STRING" },
                "summary": { "type": "STRING" },
                "category": { "type": "STRING", "enum": categories },
                "tags": { "type": "ARRAY", "items": { "type": "STRING" } },
                "author": { "type": "STRING" },
                "readTime": { "type": "STRING" },
                "date": { "type": "STRING" }
            },
            "required": ["id", "title", "summary", "category", "tags", "author", "readTime", "date"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::content::fallback_articles;

    #[test]
    fn body_prompt_mentions_article_fields() {
        let article = fallback_articles().remove(0);
        let prompt = article_body(&article);
        assert!(prompt.contains("\"New GxP Guidelines Impact Pharma Cold Chain Strategies\""));
        assert!(prompt.contains("Category: Supply Chain."));
        assert!(prompt.contains("Tags: Pharma, Cold Chain, GxP, Monitoring."));
    }

    #[test]
    fn schema_excludes_the_all_sentinel() {
        let schema = latest_articles_schema();
        let allowed = schema["items"]["properties"]["category"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(allowed.len(), 5);
        assert!(!allowed.iter().any(|value| value == "All"));
    }
}
