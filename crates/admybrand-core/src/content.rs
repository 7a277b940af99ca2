//! Static marketing copy rendered by the page.

use serde::Serialize;

use crate::config::DemoConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "Demo", href: "#demo" },
    NavLink { label: "Pricing", href: "#pricing" },
    NavLink { label: "Resources", href: "#resources" },
    NavLink { label: "Testimonials", href: "#testimonials" },
    NavLink { label: "FAQ", href: "#faq" },
];

pub const HERO_CHECKS: &[&str] = &["No credit card", "14-day trial", "Cancel anytime"];

pub const HERO_IMAGE_URL: &str = "https://cdn.dribbble.com/userupload/12302729/file/original-fa372845e394ee85bebe0389b9d86871.png?resize=1504x1128&vertical=center";

pub const LOGO_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    /// Icon key resolved by the renderer.
    pub icon: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "AI Content Generation",
        description: "Create compelling copy, social posts, and ad campaigns with our advanced AI writing assistant.",
        icon: "zap",
    },
    Feature {
        title: "Smart Campaign Analytics",
        description: "Get actionable insights with AI-powered performance tracking and optimization recommendations.",
        icon: "bar-chart",
    },
    Feature {
        title: "Brand Voice Training",
        description: "Train AI to match your unique brand voice and maintain consistency across all content.",
        icon: "users",
    },
    Feature {
        title: "Multi-Channel Automation",
        description: "Deploy campaigns across social media, email, and ads with intelligent scheduling and targeting.",
        icon: "shield",
    },
    Feature {
        title: "Creative Asset Library",
        description: "Generate and manage unlimited marketing assets with AI-powered design and copywriting tools.",
        icon: "layers",
    },
    Feature {
        title: "Performance Optimization",
        description: "Continuously improve campaign performance with machine learning-driven A/B testing and optimization.",
        icon: "star",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        step: "01",
        title: "Create Account",
        description: "Sign up in seconds with just your email. No credit card required to get started.",
    },
    Step {
        step: "02",
        title: "Configure Workspace",
        description: "Customize your workspace to match your team's unique workflow and requirements.",
    },
    Step {
        step: "03",
        title: "Boost Productivity",
        description: "Start using our powerful features to streamline processes and achieve your goals.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub date: &'static str,
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "10 AI Marketing Trends That Will Dominate 2025",
        excerpt: "Discover the latest AI marketing trends and how to implement them in your strategy for maximum impact.",
        category: "Trends",
        read_time: "5 min read",
        date: "Dec 15, 2024",
    },
    BlogPost {
        title: "How to Train AI for Your Brand Voice",
        excerpt: "Step-by-step guide to training AI models that perfectly capture your unique brand personality and tone.",
        category: "Tutorial",
        read_time: "8 min read",
        date: "Dec 12, 2024",
    },
    BlogPost {
        title: "ROI Metrics That Matter in AI Marketing",
        excerpt: "Learn which KPIs to track when measuring the success of your AI-powered marketing campaigns.",
        category: "Analytics",
        read_time: "6 min read",
        date: "Dec 10, 2024",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guide {
    pub title: &'static str,
    pub description: &'static str,
    pub chapters: u32,
    pub duration: &'static str,
}

pub const GUIDES: &[Guide] = &[
    Guide {
        title: "Complete Guide to AI Content Marketing",
        description: "Everything you need to know about leveraging AI for content creation, optimization, and distribution.",
        chapters: 12,
        duration: "45 min",
    },
    Guide {
        title: "Advanced Campaign Automation Strategies",
        description: "Master the art of multi-channel campaign automation with AI-powered insights and optimization.",
        chapters: 8,
        duration: "30 min",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub company: &'static str,
    pub industry: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static [&'static str],
    pub logo: &'static str,
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        company: "TechStartup Inc",
        industry: "SaaS",
        challenge: "Struggling with content creation and lead generation",
        solution: "Implemented AI content generation and automated nurture campaigns",
        results: &[
            "300% increase in content output",
            "150% boost in qualified leads",
            "60% reduction in content costs",
        ],
        logo: "T",
    },
    CaseStudy {
        company: "GrowthLabs",
        industry: "E-commerce",
        challenge: "Manual campaign management across multiple channels",
        solution: "Deployed multi-channel AI automation and performance optimization",
        results: &[
            "250% improvement in ROAS",
            "80% time savings on campaign management",
            "40% increase in customer retention",
        ],
        logo: "G",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// First letter of the author's name, used as the avatar.
    pub fn initial(&self) -> String {
        self.author.chars().next().map(String::from).unwrap_or_default()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "ADmyBRAND AI Suite has transformed our content creation process. We're producing 10x more engaging content in half the time.",
        author: "Sarah Martinez",
        role: "Marketing Director, TechStartup Inc",
        rating: 5,
    },
    Testimonial {
        quote: "The AI-powered analytics have given us insights we never had before. Our campaign ROI has increased by 300% since implementing ADmyBRAND.",
        author: "Michael Chen",
        role: "Growth Marketing Manager, ScaleUp Co",
        rating: 5,
    },
    Testimonial {
        quote: "The brand voice training feature is incredible. Our AI-generated content is indistinguishable from our human-written copy.",
        author: "Emily Rodriguez",
        role: "Content Marketing Lead, BrandCorp",
        rating: 5,
    },
    Testimonial {
        quote: "We've automated our entire social media strategy with ADmyBRAND. Engagement is up 250% and we're saving 20 hours per week.",
        author: "David Kim",
        role: "Digital Marketing Director, GrowthLabs",
        rating: 5,
    },
    Testimonial {
        quote: "The multi-channel campaign automation has streamlined our marketing operations. We can now run complex campaigns with minimal manual work.",
        author: "Lisa Patel",
        role: "Marketing Operations Manager, MarketPro",
        rating: 5,
    },
    Testimonial {
        quote: "ADmyBRAND's creative asset generation has revolutionized our design workflow. We're creating professional marketing materials in minutes, not hours.",
        author: "James Wilson",
        role: "Creative Director, DesignForward",
        rating: 5,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How does the AI content generation work?",
        answer: "Our AI uses advanced natural language processing trained on millions of high-performing marketing campaigns. Simply input your brief, select your brand voice, and our AI generates compelling copy tailored to your audience and goals.",
    },
    Faq {
        question: "Can I train the AI to match my brand voice?",
        answer: "Absolutely! Our brand voice training feature analyzes your existing content and learns your unique tone, style, and messaging preferences. The more content you provide, the better the AI becomes at matching your brand voice.",
    },
    Faq {
        question: "What marketing channels does ADmyBRAND support?",
        answer: "ADmyBRAND integrates with all major marketing platforms including Facebook Ads, Google Ads, LinkedIn, Twitter, Instagram, email marketing platforms, and more. You can create and deploy campaigns across multiple channels from one dashboard.",
    },
    Faq {
        question: "Is there a limit to how much content I can generate?",
        answer: "Content limits depend on your plan. The Starter plan includes 10,000 AI-generated words per month, Professional includes 50,000 words, and Enterprise offers unlimited content generation.",
    },
    Faq {
        question: "How accurate is the campaign performance analytics?",
        answer: "Our AI analytics engine processes data from all connected platforms in real-time, providing 99.9% accurate performance metrics. The system also uses machine learning to predict campaign performance and suggest optimizations.",
    },
    Faq {
        question: "Do you offer custom AI model training for Enterprise clients?",
        answer: "Yes! Enterprise clients can work with our team to train custom AI models on their specific industry data, competitor analysis, and historical campaign performance for even more targeted and effective marketing content.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Product",
        links: &[
            NavLink { label: "Features", href: "#features" },
            NavLink { label: "Pricing", href: "#pricing" },
            NavLink { label: "Integrations", href: "#" },
            NavLink { label: "API", href: "#" },
        ],
    },
    FooterColumn {
        heading: "Resources",
        links: &[
            NavLink { label: "Documentation", href: "#" },
            NavLink { label: "Guides", href: "#" },
            NavLink { label: "Blog", href: "#" },
            NavLink { label: "Support", href: "#" },
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            NavLink { label: "About", href: "#" },
            NavLink { label: "Careers", href: "#" },
            NavLink { label: "Privacy Policy", href: "#" },
            NavLink { label: "Terms of Service", href: "#" },
        ],
    },
];

pub const LEGAL_LINKS: &[NavLink] = &[
    NavLink { label: "Privacy Policy", href: "#" },
    NavLink { label: "Terms of Service", href: "#" },
    NavLink { label: "Cookie Policy", href: "#" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", href: "#", icon: "facebook" },
    SocialLink { label: "Twitter", href: "#", icon: "twitter" },
    SocialLink { label: "LinkedIn", href: "#", icon: "linkedin" },
];

pub const CALCULATOR_NOTES: &[&str] = &[
    "Save 20% with annual billing",
    "All plans include 14-day free trial",
];

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed";
const PLAYER_PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// A YouTube player embedded by fixed video id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEmbed {
    pub video_id: String,
}

impl VideoEmbed {
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
        }
    }

    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(config.video_id.clone())
    }

    /// Muted, looping player shown in the demo section.
    pub fn inline_url(&self) -> String {
        format!(
            "{base}/{id}?autoplay=1&mute=1&loop=1&playlist={id}&controls=1&modestbranding=1&rel=0",
            base = YOUTUBE_EMBED_BASE,
            id = self.video_id
        )
    }

    /// Player opened in the full-screen modal.
    pub fn modal_url(&self) -> String {
        format!(
            "{}/{}?autoplay=1&controls=1&modestbranding=1&rel=0&fs=1",
            YOUTUBE_EMBED_BASE, self.video_id
        )
    }

    pub fn permissions(&self) -> &'static str {
        PLAYER_PERMISSIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_urls() {
        let video = VideoEmbed::from_config(&DemoConfig::default());
        assert_eq!(
            video.inline_url(),
            "https://www.youtube.com/embed/ZK-rNEhJIDs?autoplay=1&mute=1&loop=1&playlist=ZK-rNEhJIDs&controls=1&modestbranding=1&rel=0"
        );
        assert_eq!(
            video.modal_url(),
            "https://www.youtube.com/embed/ZK-rNEhJIDs?autoplay=1&controls=1&modestbranding=1&rel=0&fs=1"
        );
        assert!(video.permissions().contains("picture-in-picture"));
    }

    #[test]
    fn test_section_sizes() {
        assert_eq!(NAV_LINKS.len(), 6);
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(STEPS.len(), 3);
        assert_eq!(BLOG_POSTS.len(), 3);
        assert_eq!(GUIDES.len(), 2);
        assert_eq!(CASE_STUDIES.len(), 2);
        assert_eq!(TESTIMONIALS.len(), 6);
        assert_eq!(FAQS.len(), 6);
        assert_eq!(FOOTER_COLUMNS.len(), 3);
    }

    #[test]
    fn test_nav_targets_are_anchors() {
        assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#') && l.href.len() > 1));
    }

    #[test]
    fn test_testimonial_initial() {
        assert_eq!(TESTIMONIALS[1].initial(), "M");
        assert!(TESTIMONIALS.iter().all(|t| t.rating == 5));
    }
}
