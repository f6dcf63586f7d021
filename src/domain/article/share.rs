use crate::domain::article::entity::Article;

const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const LINKEDIN_SHARE: &str = "https://www.linkedin.com/sharing/share-offsite/";
const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub permalink: String,
    pub twitter: String,
    pub linkedin: String,
    pub facebook: String,
}

impl ShareLinks {
    pub fn for_article(site_url: &str, article: &Article) -> Self {
        let permalink = format!(
            "{}/article/{}",
            site_url.trim_end_matches('/'),
            article.id
        );
        let text = format!("Check out this article: {}", article.title);

        Self {
            twitter: with_query(TWITTER_INTENT, &[("text", &text), ("url", &permalink)]),
            linkedin: with_query(LINKEDIN_SHARE, &[("url", &permalink)]),
            facebook: with_query(FACEBOOK_SHARER, &[("u", &permalink)]),
            permalink,
        }
    }
}

fn with_query(base: &str, pairs: &[(&str, &str)]) -> String {
    match serde_urlencoded::to_string(pairs) {
        Ok(query) => format!("{base}?{query}"),
        Err(_) => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleId, Category};

    #[test]
    fn links_embed_encoded_permalink() {
        let article = Article {
            id: ArticleId::new("fallback-2").unwrap(),
            title: "Airlines & Airports".into(),
            summary: String::new(),
            category: Category::AirFreight,
            author: String::new(),
            read_time: String::new(),
            date: String::new(),
            image_url: String::new(),
            tags: Vec::new(),
            is_featured: false,
            content: None,
        };

        let links = ShareLinks::for_article("https://news.example/", &article);
        assert_eq!(links.permalink, "https://news.example/article/fallback-2");
        assert_eq!(
            links.linkedin,
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fnews.example%2Farticle%2Ffallback-2"
        );
        assert!(links.twitter.contains("text=Check+out+this+article%3A+Airlines+%26+Airports"));
        assert!(links.facebook.starts_with("https://www.facebook.com/sharer/sharer.php?u="));
    }
}
