use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceTab {
    #[default]
    Blog,
    Guides,
    CaseStudies,
}

impl ResourceTab {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceTab::Blog => "Blog",
            ResourceTab::Guides => "Guides",
            ResourceTab::CaseStudies => "Case Studies",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            ResourceTab::Blog => "blog",
            ResourceTab::Guides => "guides",
            ResourceTab::CaseStudies => "case-studies",
        }
    }

    pub fn all() -> &'static [ResourceTab] {
        &[ResourceTab::Blog, ResourceTab::Guides, ResourceTab::CaseStudies]
    }
}
