//! The fixed set of spiders a crawl can be requested for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CrawlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Spider {
    #[default]
    Luma,
    Eventbrite,
}

impl Spider {
    pub const ALL: [Spider; 2] = [Spider::Luma, Spider::Eventbrite];

    pub fn name(&self) -> &'static str {
        match self {
            Spider::Luma => "luma",
            Spider::Eventbrite => "eventbrite",
        }
    }

    /// Names of every recognized spider, in allow-list order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Spider::name).collect()
    }

    /// Where the spider starts when a request does not supply URLs.
    pub fn default_start_urls(&self) -> &'static [&'static str] {
        match self {
            Spider::Luma => &["https://lu.ma/discover"],
            Spider::Eventbrite => &["https://www.eventbrite.com/d/online/all-events/"],
        }
    }
}

impl fmt::Display for Spider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Spider {
    type Err = CrawlError;

    /// Exact, case-sensitive match against the allow-list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|spider| spider.name() == s)
            .ok_or_else(|| CrawlError::InvalidSpider {
                requested: s.to_string(),
                available: Self::names().join(", "),
            })
    }
}
