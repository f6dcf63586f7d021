// tests/support/builders.rs
use logiinsight::application::ports::content::ArticleDraft;
use logiinsight::domain::article::Category;

pub struct DraftBuilder {
    title: String,
    summary: String,
    category: Category,
    tags: Vec<String>,
}

impl DraftBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            summary: format!("{title} summary"),
            title,
            category: Category::SupplyChain,
            tags: Vec::new(),
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|tag| (*tag).to_string()).collect();
        self
    }

    pub fn build(self) -> ArticleDraft {
        ArticleDraft {
            title: self.title,
            summary: self.summary,
            category: self.category,
            tags: self.tags,
            author: "Desk Editor".into(),
            read_time: "5 min read".into(),
            date: "Mar 5, 2024".into(),
        }
    }
}

/// Seven drafts covering every category; ids become `art-<millis>-<index>`.
pub fn sample_drafts() -> Vec<ArticleDraft> {
    vec![
        DraftBuilder::new("Cold Chain Capacity Tightens")
            .category(Category::SupplyChain)
            .tags(&["Pharma", "Cold Chain"])
            .build(),
        DraftBuilder::new("Freighter Conversions Accelerate")
            .category(Category::AirFreight)
            .tags(&["Airlines", "Air Cargo"])
            .build(),
        DraftBuilder::new("Hub Airport Expands Cargo Terminal")
            .category(Category::AirFreight)
            .tags(&["Airport"])
            .build(),
        DraftBuilder::new("SCFI Climbs Again")
            .category(Category::OceanFreight)
            .summary("Container spot rates rise on congestion")
            .tags(&["SCFI", "Ports"])
            .build(),
        DraftBuilder::new("EU ETS Phase-In Explained")
            .category(Category::Regulations)
            .tags(&["EU ETS"])
            .build(),
        DraftBuilder::new("Packaging Trends for 2024")
            .category(Category::MarketInsight)
            .tags(&["Packaging", "Events"])
            .build(),
        DraftBuilder::new("Monitoring Pharma Shipments")
            .category(Category::SupplyChain)
            .tags(&["Pharma", "Monitoring", "GxP"])
            .build(),
    ]
}
