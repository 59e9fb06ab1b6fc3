//! Static site content. Everything here is fixed at compile time and never
//! mutated; an event's identifier is its position in [`EVENTS`].

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRecord {
    pub title: &'static str,
    /// ISO-8601 calendar date, e.g. `2024-03-15`.
    pub date: &'static str,
    pub description: &'static str,
    pub banner_url: &'static str,
}

impl EventRecord {
    pub fn starts_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// Human readable date such as "March 15, 2024". Falls back to the raw
    /// string when it is not a valid ISO date.
    pub fn display_date(&self) -> String {
        match self.starts_on() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => self.date.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactCard {
    pub heading: &'static str,
    pub lines: &'static [&'static str],
}

/// An item in the annual fest block. `event` points into [`EVENTS`] when the
/// item has its own detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FestHighlight {
    pub label: &'static str,
    pub event: Option<usize>,
}

pub const EVENTS: &[EventRecord] = &[
    EventRecord {
        title: "Ethical Hacking Workshop",
        date: "2024-03-15",
        description: "Learn the basics of ethical hacking and penetration testing.",
        banner_url: "https://example.com/ethical-hacking-banner.jpg",
    },
    EventRecord {
        title: "Cybersecurity Seminar",
        date: "2024-04-05",
        description: "Industry experts share insights on latest security trends.",
        banner_url: "https://example.com/cybersecurity-seminar-banner.jpg",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Manobhiram Reddy", role: "President", image_url: "/president.png" },
    TeamMember { name: "Gayatri K", role: "Vice President", image_url: "/vicepresident.png" },
    TeamMember { name: "Raghupathi A", role: "General Secretary", image_url: "/GS.png" },
    TeamMember { name: "Kolli Harshitha", role: "Joint Secretary", image_url: "/JS1.png" },
    TeamMember { name: "Bhawdeep", role: "Joint Secretary", image_url: "/JS2.png" },
    TeamMember { name: "Sravani", role: "Treasurer", image_url: "/Treasurer.png" },
];

pub const CONTACTS: &[ContactCard] = &[
    ContactCard {
        heading: "Club Official Email",
        lines: &["cbitcybersecurityclub@example.com"],
    },
    ContactCard {
        heading: "President",
        lines: &["Manobhiram Reddy", "Phone: +1234567890"],
    },
    ContactCard {
        heading: "Vice President",
        lines: &["Gayatri K", "Phone: +0987654321"],
    },
];

pub const FEST_NAME: &str = "Sudhee 2k25";

pub const FEST_HIGHLIGHTS: &[FestHighlight] = &[
    FestHighlight { label: "CTF Challenges", event: None },
    FestHighlight { label: "Security Workshops", event: Some(0) },
    FestHighlight { label: "Expert Talks", event: Some(1) },
];

/// Shown one at a time under the hero heading.
pub const ROTATING_LABELS: &[&str] = &[
    "Pentesting",
    "Information Security",
    "Network Security",
    "Cryptography",
    "Forensics",
];

/// Landing section ids, in page order. The nav bar scrolls to these.
pub const NAV_SECTIONS: &[&str] = &["about", "events", "team", "contact"];
