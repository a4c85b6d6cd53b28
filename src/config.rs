use log::Level;

use crate::icons::Icon;
use crate::nav::{targets_within, NavItem};

pub const BRAND: &str = "Missiteam";

pub mod anchor {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const SERVICES: &str = "services";
    pub const PORTFOLIO: &str = "portfolio";
    pub const CONTACT: &str = "contact";
}

/// Every section id the page renders.
pub const SECTION_IDS: &[&str] = &[
    anchor::HOME,
    anchor::ABOUT,
    anchor::SERVICES,
    anchor::PORTFOLIO,
    anchor::CONTACT,
];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", target: anchor::HOME },
    NavItem { label: "About", target: anchor::ABOUT },
    NavItem { label: "Services", target: anchor::SERVICES },
    NavItem { label: "Portfolio", target: anchor::PORTFOLIO },
    NavItem { label: "Contact", target: anchor::CONTACT },
];

const _: () = assert!(
    targets_within(NAV_ITEMS, SECTION_IDS),
    "every nav item must point at a rendered section"
);

// Timing and geometry
pub const SCROLL_DURATION_MS: u32 = 500;
/// Height of the fixed header.
pub const HEADER_OFFSET_PX: f64 = 72.0;
/// Window scroll past which the header gets its heavier shadow.
pub const HEADER_SHADOW_AFTER_PX: f64 = 8.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_DURATION_MS: u32 = 500;
pub const REVEAL_OFFSET_PX: f64 = 50.0;
/// Lets the browser paint the hidden state before mount-triggered reveals start.
pub const MOUNT_REVEAL_DELAY_MS: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        name: "Company Websites",
        description: "Professional and corporate site designs tailored for businesses.",
        icon: Icon::Monitor,
    },
    ServiceEntry {
        name: "E-commerce Solutions",
        description: "Fully integrated online stores with payment gateways and user-friendly layouts.",
        icon: Icon::ShoppingCart,
    },
    ServiceEntry {
        name: "SaaS Platforms",
        description: "Custom SaaS solutions with clean and scalable UI/UX.",
        icon: Icon::Layout,
    },
    ServiceEntry {
        name: "Personal Portfolios",
        description: "Elegant, personalized portfolio websites for individuals.",
        icon: Icon::User,
    },
];

/// A "why choose us" card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Global Expertise",
        body: "With 50+ talented developers worldwide, we bring diverse perspectives to every project.",
    },
    Highlight {
        title: "AI Integration",
        body: "We leverage cutting-edge AI technology, including chatbots, to enhance user experiences.",
    },
    Highlight {
        title: "Custom Solutions",
        body: "From company websites to SaaS platforms, we create tailored solutions for your unique needs.",
    },
];

pub const PORTFOLIO_PROJECTS: u32 = 6;
pub const PORTFOLIO_IMAGE_WIDTH: u32 = 300;
pub const PORTFOLIO_IMAGE_HEIGHT: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetails {
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    address: "123 Tech Street, Silicon Valley, CA 94000",
    phone: "(123) 456-7890",
    email: "info@missiteam.dev",
};

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3168.6482351068635!2d-122.08624618469212!3d37.42199997982362!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x808fba02425dad8f%3A0x6c296c66619367e0!2sGoogleplex!5e0!3m2!1sen!2sus!4v1653308837271!5m2!1sen!2sus";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", href: "#", icon: Icon::Facebook },
    SocialLink { label: "Twitter", href: "#", icon: Icon::Twitter },
    SocialLink { label: "LinkedIn", href: "#", icon: Icon::Linkedin },
    SocialLink { label: "Instagram", href: "#", icon: Icon::Instagram },
];

/// `/placeholder.svg` URL for a `width`x`height` image captioned `label`.
pub fn placeholder_url(width: u32, height: u32, label: &str) -> String {
    format!(
        "/placeholder.svg?height={}&width={}&text={}",
        height,
        width,
        urlencoding::encode(label)
    )
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
