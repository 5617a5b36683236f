//! Static copy and media shown on the pages.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServicePackage {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub note: Option<&'static str>,
    pub highlight: bool,
}

impl ServicePackage {
    /// Zero padded number shown on the card, e.g. "01".
    pub fn label(&self) -> String {
        format!("{:02}", self.number)
    }
}

pub const COMPANY_PACKAGES: &[ServicePackage] = &[
    ServicePackage {
        number: 1,
        title: "Brand Foundations",
        description: "For startups and companies building visibility.",
        features: &[
            "Brand storytelling strategy",
            "Founder or company interview video",
            "4 short-form branded reels",
            "On-camera coaching for 1 spokesperson",
            "Content direction & messaging",
        ],
        note: None,
        highlight: false,
    },
    ServicePackage {
        number: 2,
        title: "Brand Authority",
        description: "For companies that want to lead their space.",
        features: &[
            "Founder/company story film",
            "Podcast-style interview episode",
            "6–8 premium reels",
            "Team or culture storytelling content",
            "Executive media coaching",
            "Publishing & visibility strategy",
        ],
        note: None,
        highlight: false,
    },
    ServicePackage {
        number: 3,
        title: "Thought Leadership Program",
        description: "For companies serious about long-term presence.",
        features: &[
            "Full storytelling & positioning strategy",
            "YouTube content mastery (long-form + shorts)",
            "Multiple filming days",
            "Podcast series or interview campaign",
            "Leadership media coaching",
            "Strategic visibility planning",
        ],
        note: None,
        highlight: false,
    },
];

pub const INDIVIDUAL_PACKAGES: &[ServicePackage] = &[
    ServicePackage {
        number: 1,
        title: "Starter Visibility",
        description: "Best for: Individuals starting their media presence.",
        features: &[
            "Personal storytelling development",
            "Basic on-camera coaching",
            "2 short-form reels",
            "Content direction & scripting",
            "Publishing guidance",
        ],
        note: Some("Ideal for professionals, talents, and creators."),
        highlight: false,
    },
    ServicePackage {
        number: 2,
        title: "Media-Ready",
        description: "Best for: Individuals who want to look professional and confident on camera.",
        features: &[
            "Full personal branding & storytelling (for social media platforms)",
            "On-camera mastery session",
            "4 premium reels",
            "Professional photoshoot (1 look)",
            "Visibility strategy roadmap",
        ],
        note: Some("Most popular package for serious career growth."),
        highlight: true,
    },
    ServicePackage {
        number: 3,
        title: "Signature Presence",
        description: "Best for: A full transformation into a media-ready personality.",
        features: &[
            "Full makeover (styling, grooming & image direction)",
            "Portfolio Day (professional photos + identity video)",
            "Podcast appearance or interview feature",
            "4 professionally produced reels",
            "Advanced on-camera coaching",
            "Personal visibility & positioning strategy",
        ],
        note: Some("For individuals ready to be seen seriously."),
        highlight: false,
    },
    ServicePackage {
        number: 4,
        title: "Events Edition",
        description: "Format: Event-Based Content Creation (Advanced Content Level)",
        features: &[
            "Filming 4 reels during events across the UAE",
            "Professional cameraman",
            "Full production & editing",
        ],
        note: Some("Perfect for speakers, public figures, and active professionals."),
        highlight: false,
    },
    ServicePackage {
        number: 5,
        title: "Podcast Show",
        description: "Format: Personal Podcast Series (Exclusive Program)",
        features: &[
            "An exclusive podcast program with full creative control",
            "4 fully produced and edited podcast episodes",
            "Publishing on Verin Media’s YouTube platform",
            "Key highlights converted into reels",
            "Cross-platform promotion across Verin Media channels",
        ],
        note: Some("Ideal for individuals building long-term authority and media presence."),
        highlight: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: &'static str,
    pub vimeo_id: &'static str,
    pub thumbnail: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "v1",
        vimeo_id: "1148258886",
        thumbnail: "https://i.postimg.cc/DfNTBCNq/Whats-App-Image-2025-12-20-at-1-01-36-PM.jpg",
    },
    Testimonial {
        id: "v2",
        vimeo_id: "1148261004",
        thumbnail: "https://i.postimg.cc/q7VSWSc8/video-2.jpg",
    },
    Testimonial {
        id: "v3",
        vimeo_id: "1148284280",
        thumbnail: "https://i.postimg.cc/TPMFBFjg/video-3.jpg",
    },
    Testimonial {
        id: "v4",
        vimeo_id: "1139568685",
        thumbnail: "https://i.postimg.cc/MG2NgN0Q/video-4.jpg",
    },
];

pub const HERO_PHOTO: &str = "https://i.postimg.cc/ZKk3tb13/DSC07859.jpg";
pub const COMPANIES_PHOTO: &str = "https://i.postimg.cc/8zH8hChb/DSC08063.jpg";

pub const INDIVIDUAL_PHOTOS: &[&str] = &[
    "https://i.postimg.cc/fRQYQzS1/DSC07874.jpg",
    "https://i.postimg.cc/662VGqxy/DSC07348.jpg",
    "https://i.postimg.cc/HLkXWstW/DSC08034.jpg",
    "https://i.postimg.cc/d3rTN7JN/This-week-I-gave-a-workshop-on-Digital-Storytelling-at-the-American-University-in-the-Emirates-3.jpg",
];

/// Milliseconds each carousel photo stays on screen.
pub const CAROUSEL_PERIOD_MS: u32 = 2_000;

/// (glyph, text)
pub const FEATURES: &[(&str, &str)] = &[
    ("✓", "Authentic stories, not generic content"),
    ("✦", "Premium production & artistic direction"),
    ("↗", "Exposure through media collaborations"),
    ("◎", "Global presence: Dubai + Madrid"),
];

/// (alt, logo)
pub const COLLABORATIONS: &[(&str, &str)] = &[
    ("Al Aan TV", "https://i.ibb.co/mVsM8qZC/alaan-removebg-preview.png"),
    (
        "Dubai Press Club",
        "https://i.ibb.co/fYvHySZx/Whats-App-Image-2025-11-15-at-15-12-07-c0a67b5a-removebg-preview.png",
    ),
    (
        "AUE",
        "https://i.ibb.co/k6BJtZjN/Whats-App-Image-2025-11-15-at-15-13-19-12cf9ed3-removebg-preview.png",
    ),
];

pub const COMING_SOON: &str = "Coming Soon";

/// Index of the photo after `index`, wrapping around.
pub fn next_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

/// Splits `text` into letters with their staggered animation delay in
/// seconds. Spaces become non-breaking so they keep their width.
pub fn glow_letters(text: &str) -> Vec<(char, f64)> {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let c = if c == ' ' { '\u{a0}' } else { c };
            (c, (i + 1) as f64 / 10.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_labels_are_zero_padded() {
        let labels: Vec<String> = COMPANY_PACKAGES.iter().map(ServicePackage::label).collect();
        assert_eq!(labels, ["01", "02", "03"]);
        assert_eq!(INDIVIDUAL_PACKAGES[4].label(), "05");
    }

    #[test]
    fn packages_are_numbered_in_order() {
        for packages in [COMPANY_PACKAGES, INDIVIDUAL_PACKAGES] {
            for (i, package) in packages.iter().enumerate() {
                assert_eq!(package.number as usize, i + 1);
                assert!(!package.features.is_empty());
            }
        }
    }

    #[test]
    fn one_highlighted_individual_package() {
        let highlighted: Vec<_> = INDIVIDUAL_PACKAGES.iter().filter(|p| p.highlight).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].title, "Media-Ready");
        assert!(COMPANY_PACKAGES.iter().all(|p| !p.highlight));
    }

    #[test]
    fn carousel_wraps_around() {
        let len = INDIVIDUAL_PHOTOS.len();
        assert_eq!(next_index(0, len), 1);
        assert_eq!(next_index(len - 1, len), 0);
        assert_eq!(next_index(3, 0), 0);
    }

    #[test]
    fn glow_letters_stagger_and_keep_spaces() {
        let letters = glow_letters("Go on");
        assert_eq!(letters.len(), 5);
        assert_eq!(letters[0], ('G', 0.1));
        assert_eq!(letters[2].0, '\u{a0}');
        assert!((letters[4].1 - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn testimonial_ids_are_unique() {
        let mut ids: Vec<_> = TESTIMONIALS.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TESTIMONIALS.len());
    }
}
