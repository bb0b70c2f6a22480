//! Literal page content.

pub struct ServiceCard {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub company: &'static str,
}

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        slug: "store-setup",
        title: "Store Setup",
        summary: "Launch on a new marketplace with a storefront that is compliant and ready to sell from day one.",
        highlights: &[
            "Seller account registration",
            "Catalog and category mapping",
            "Shipping and tax settings",
        ],
    },
    ServiceCard {
        slug: "ppc-management",
        title: "PPC Management",
        summary: "Sponsored product campaigns tuned every week against your margin targets, not vanity metrics.",
        highlights: &[
            "Keyword harvesting",
            "Bid and budget automation",
            "ACoS and TACoS reporting",
        ],
    },
    ServiceCard {
        slug: "listing-optimization",
        title: "Listing Optimization",
        summary: "Titles, bullets and back-end keywords written to rank and to convert.",
        highlights: &[
            "Search term research",
            "Conversion-focused copy",
            "Image and video briefs",
        ],
    },
    ServiceCard {
        slug: "account-management",
        title: "Account Management",
        summary: "A dedicated manager keeping your account healthy, your stock flowing and your cases closed.",
        highlights: &[
            "Account health monitoring",
            "Case and reimbursement handling",
            "Monthly strategy reviews",
        ],
    },
    ServiceCard {
        slug: "brand-registry",
        title: "Brand Registry",
        summary: "Protect your brand and unlock enhanced content, stores and brand analytics.",
        highlights: &[
            "Trademark coordination",
            "Hijacker removal",
            "A+ content and storefronts",
        ],
    },
    ServiceCard {
        slug: "marketplace-expansion",
        title: "Marketplace Expansion",
        summary: "Take a proven catalog to Walmart, eBay, TikTok Shop and international marketplaces.",
        highlights: &[
            "Channel feasibility review",
            "Feed and inventory sync",
            "Cross-channel pricing",
        ],
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "$120M+",
        label: "Client revenue managed",
    },
    Stat {
        value: "350+",
        label: "Brands served",
    },
    Stat {
        value: "38%",
        label: "Average ACoS reduction",
    },
    Stat {
        value: "8",
        label: "Marketplaces supported",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Which marketplaces do you work with?",
        answer: "Amazon, Walmart, eBay, Shopify, Etsy and TikTok Shop. Most clients start on one channel and expand once the first is profitable.",
    },
    Faq {
        question: "Do you require a long-term contract?",
        answer: "No. Our management plans are month-to-month after an initial 90-day onboarding period.",
    },
    Faq {
        question: "How quickly will I see results?",
        answer: "Advertising changes usually show within two to four weeks. Organic ranking improvements typically take one to three months.",
    },
    Faq {
        question: "Do I keep ownership of my accounts and data?",
        answer: "Always. We work inside your seller accounts with user permissions you control, and every report we build is yours.",
    },
    Faq {
        question: "What does onboarding look like?",
        answer: "A kickoff call, a full account audit, and a 90-day roadmap delivered within the first two weeks.",
    },
    Faq {
        question: "Can you help a brand that is not selling online yet?",
        answer: "Yes. Our Store Setup service covers account registration, catalog creation and launch campaigns.",
    },
];

pub const PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        price: "$1,500",
        period: "/month",
        description: "For brands launching their first marketplace.",
        features: &[
            "One marketplace",
            "Up to 50 SKUs",
            "PPC management",
            "Monthly performance report",
        ],
        featured: false,
    },
    PricingTier {
        name: "Growth",
        price: "$3,500",
        period: "/month",
        description: "For established sellers ready to scale.",
        features: &[
            "Up to three marketplaces",
            "Up to 250 SKUs",
            "PPC and listing optimization",
            "Dedicated account manager",
            "Bi-weekly strategy calls",
        ],
        featured: true,
    },
    PricingTier {
        name: "Enterprise",
        price: "Custom",
        period: "",
        description: "For multi-brand portfolios and aggregators.",
        features: &[
            "Unlimited marketplaces",
            "Unlimited SKUs",
            "Full-service management",
            "Custom reporting",
            "Quarterly business reviews",
        ],
        featured: false,
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Alex Rivera",
        role: "Founder & CEO",
        bio: "Built and sold two Amazon brands before starting the agency in 2016.",
    },
    TeamMember {
        name: "Priya Natarajan",
        role: "Head of Advertising",
        bio: "Has managed over $40M in marketplace ad spend across four continents.",
    },
    TeamMember {
        name: "Marcus Chen",
        role: "Director of Operations",
        bio: "Keeps inventory, compliance and account health running for every client.",
    },
    TeamMember {
        name: "Sofia Lindqvist",
        role: "Creative Lead",
        bio: "Leads the studio producing listing images, A+ content and brand stores.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Our Amazon revenue doubled in six months while ad spend stayed flat.",
        author: "Dana Whitfield",
        company: "Northwind Outdoors",
    },
    Testimonial {
        quote: "They launched us on Walmart in five weeks. We could not have done it alone.",
        author: "Luis Ortega",
        company: "Casa Verde Kitchen",
    },
    Testimonial {
        quote: "The first agency that explained our numbers instead of hiding behind them.",
        author: "Hannah Becker",
        company: "Lumen Skincare",
    },
    Testimonial {
        quote: "Hijackers gone, Brand Registry done, and our listings finally look premium.",
        author: "Kwame Mensah",
        company: "Adinkra Home",
    },
    Testimonial {
        quote: "Weekly reporting that our whole team actually reads.",
        author: "Grace Liu",
        company: "Peak Pet Supply",
    },
];
