use std::collections::HashMap;

/// Mapping from category slug to an ordered list of feed URLs.
///
/// The production mapping is fixed: adding a category means adding an
/// entry to [`FeedRegistry::builtin`]. There is deliberately no runtime
/// mechanism for user-supplied feeds; `register` exists so tests can point
/// categories at mock servers.
#[derive(Debug, Clone, Default)]
pub struct FeedRegistry {
    categories: HashMap<String, Vec<String>>,
}

impl FeedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the feed list for a category. Order is
    /// significant: earlier feeds win dedup conflicts and fill the
    /// per-category quota first.
    pub fn register<S, I, U>(&mut self, slug: S, urls: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = U>,
        U: Into<String>,
    {
        self.categories
            .insert(slug.into(), urls.into_iter().map(Into::into).collect());
    }

    /// Feed URLs for a category, in registration order. Unknown slugs yield
    /// an empty slice.
    pub fn feeds_for(&self, slug: &str) -> &[String] {
        self.categories.get(slug).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.categories.contains_key(slug)
    }

    /// The curated production registry.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            "technology",
            [
                "https://feeds.feedburner.com/TechCrunch/",
                "https://feeds.arstechnica.com/arstechnica/index",
                "https://www.theverge.com/rss/index.xml",
                "https://www.wired.com/feed/rss",
                "https://hnrss.org/frontpage",
            ],
        );
        registry.register(
            "business",
            [
                "https://feeds.reuters.com/reuters/businessNews",
                "https://fortune.com/feed/",
                "https://feeds.feedburner.com/entrepreneur/latest",
                "https://rss.nytimes.com/services/xml/rss/nyt/Business.xml",
            ],
        );
        registry.register(
            "science",
            [
                "https://www.sciencedaily.com/rss/all.xml",
                "https://rss.nytimes.com/services/xml/rss/nyt/Science.xml",
                "https://phys.org/rss-feed/",
                "https://www.nasa.gov/rss/dyn/breaking_news.rss",
            ],
        );
        registry.register(
            "world-news",
            [
                "https://feeds.bbci.co.uk/news/world/rss.xml",
                "https://feeds.reuters.com/Reuters/worldNews",
                "https://rss.nytimes.com/services/xml/rss/nyt/World.xml",
                "https://www.aljazeera.com/xml/rss/all.xml",
            ],
        );
        registry.register(
            "ai-ml",
            [
                "https://venturebeat.com/category/ai/feed/",
                "https://www.technologyreview.com/feed/",
                "https://feeds.feedburner.com/nvidiablog",
                "https://rss.nytimes.com/services/xml/rss/nyt/Technology.xml",
            ],
        );
        registry.register(
            "health",
            [
                "https://www.medicalnewstoday.com/rss",
                "https://rss.nytimes.com/services/xml/rss/nyt/Health.xml",
                "https://www.nih.gov/rss/newsreleases/newsreleases.xml",
            ],
        );
        registry.register(
            "startups",
            [
                "https://feeds.feedburner.com/TechCrunch/startups",
                "https://venturebeat.com/feed/",
                "https://www.inc.com/rss",
            ],
        );
        registry.register(
            "environment",
            [
                "https://www.theguardian.com/environment/rss",
                "https://insideclimatenews.org/feed/",
                "https://e360.yale.edu/feed",
            ],
        );
        registry.register(
            "sports",
            [
                "https://feeds.bbci.co.uk/sport/rss.xml",
                "https://rss.nytimes.com/services/xml/rss/nyt/Sports.xml",
            ],
        );
        registry.register(
            "culture",
            [
                "https://www.theguardian.com/culture/rss",
                "https://rss.nytimes.com/services/xml/rss/nyt/Arts.xml",
                "https://www.theatlantic.com/feed/all/",
            ],
        );
        registry.register(
            "politics",
            [
                "https://feeds.reuters.com/Reuters/PoliticsNews",
                "https://rss.nytimes.com/services/xml/rss/nyt/Politics.xml",
                "https://thehill.com/rss/syndicator/19110",
            ],
        );
        registry.register(
            "space",
            [
                "https://www.nasa.gov/rss/dyn/breaking_news.rss",
                "https://spacenews.com/feed/",
                "https://www.space.com/feeds/all",
            ],
        );
        registry
    }
}
