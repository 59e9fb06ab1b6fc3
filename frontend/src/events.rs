use log::debug;
use serde::Serialize;

use crate::config::{SITE_NAME, SITE_SHORT_NAME};
use crate::content::{EventRecord, EVENTS};

/// Looks up the event a `/event/:id` parameter points at.
///
/// Only plain decimal indices resolve. Anything else (empty, signed,
/// padded, non-numeric, out of range) is simply `None`.
pub fn find_event<'a>(events: &'a [EventRecord], id: &str) -> Option<&'a EventRecord> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse::<usize>().ok().and_then(|index| events.get(index))
}

pub fn resolve_event(id: &str) -> Option<&'static EventRecord> {
    let found = find_event(EVENTS, id);
    if found.is_none() {
        debug!("No event for id {:?}", id);
    }
    found
}

pub fn detail_title(event: Option<&EventRecord>) -> String {
    match event {
        Some(event) => format!("{} | {}", event.title, SITE_SHORT_NAME),
        None => format!("Event not found | {}", SITE_SHORT_NAME),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventJsonLd<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<String>,
    description: &'a str,
    image: &'a str,
    organizer: Organizer,
}

#[derive(Serialize)]
struct Organizer {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

/// schema.org `Event` markup for the detail page.
pub fn event_json_ld(event: &EventRecord) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(EventJsonLd {
        context: "https://schema.org",
        kind: "Event",
        name: event.title,
        start_date: event.starts_on().map(|date| date.format("%Y-%m-%d").to_string()),
        description: event.description,
        image: event.banner_url,
        organizer: Organizer {
            kind: "Organization",
            name: SITE_NAME,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_events() -> [EventRecord; 2] {
        [
            EventRecord {
                title: "Intro to CTFs",
                date: "2024-01-10",
                description: "Capture the flag basics.",
                banner_url: "/ctf.png",
            },
            EventRecord {
                title: "Malware Night",
                date: "2024-02-20",
                description: "Reversing a live sample.",
                banner_url: "/malware.png",
            },
        ]
    }

    #[test]
    fn every_valid_index_resolves_to_its_record() {
        for (i, event) in EVENTS.iter().enumerate() {
            let found = resolve_event(&i.to_string()).expect("index in range");
            assert_eq!(found.title, event.title);
            assert_eq!(found.date, event.date);
            assert_eq!(found.description, event.description);
        }
    }

    #[test]
    fn out_of_range_and_malformed_ids_are_not_found() {
        for id in ["-1", "999", "abc", "", " 0", "0 ", "+1", "1.0", "0x1", "18446744073709551616"] {
            assert!(resolve_event(id).is_none(), "{:?} should not resolve", id);
        }
    }

    #[test]
    fn two_event_scenario() {
        let events = two_events();
        assert_eq!(find_event(&events, "0").map(|e| e.title), Some("Intro to CTFs"));
        assert_eq!(find_event(&events, "1").map(|e| e.title), Some("Malware Night"));
        assert!(find_event(&events, "2").is_none());
        assert!(find_event(&events, "abc").is_none());
    }

    #[test]
    fn leading_zeros_still_name_the_index() {
        let events = two_events();
        assert_eq!(find_event(&events, "01").map(|e| e.title), Some("Malware Night"));
    }

    #[test]
    fn empty_list_never_resolves() {
        assert!(find_event(&[], "0").is_none());
    }

    #[test]
    fn detail_titles() {
        let events = two_events();
        assert_eq!(detail_title(events.first()), "Intro to CTFs | CCC");
        assert_eq!(detail_title(None), "Event not found | CCC");
    }

    #[test]
    fn json_ld_describes_the_event() {
        let events = two_events();
        let doc = event_json_ld(&events[1]).unwrap();
        assert_eq!(doc["@context"], "https://schema.org");
        assert_eq!(doc["@type"], "Event");
        assert_eq!(doc["name"], "Malware Night");
        assert_eq!(doc["startDate"], "2024-02-20");
        assert_eq!(doc["image"], "/malware.png");
        assert_eq!(doc["organizer"]["name"], "CBIT Cyber Security Club");
    }

    #[test]
    fn json_ld_omits_start_date_when_unknown() {
        let event = EventRecord {
            title: "TBA",
            date: "soon",
            description: "",
            banner_url: "",
        };
        let doc = event_json_ld(&event).unwrap();
        assert!(doc.get("startDate").is_none());
    }
}
