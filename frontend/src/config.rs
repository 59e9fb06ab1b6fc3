use log::Level;

pub const SITE_NAME: &str = "CBIT Cyber Security Club";
pub const SITE_SHORT_NAME: &str = "CCC";

/// Class carried by every landing section that fades in on scroll.
pub const REVEAL_CLASS: &str = "fade-in";
pub const REVEAL_SELECTOR: &str = ".fade-in";
/// Class added once a `REVEAL_CLASS` element has been seen.
pub const REVEALED_CLASS: &str = "show";
/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// How long each hero label stays on screen.
pub const LABEL_ROTATION_MS: u32 = 3000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn landing_title() -> String {
    format!("{} | {}", SITE_SHORT_NAME, SITE_NAME)
}

/// Best effort; a missing document only means the tab keeps its old title.
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    } else {
        log::warn!("No document available to set title {:?}", title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_threshold_is_ten_percent() {
        assert_eq!(REVEAL_THRESHOLD, 0.1);
        assert_eq!(REVEAL_SELECTOR, format!(".{}", REVEAL_CLASS));
        assert_eq!(REVEALED_CLASS, "show");
    }

    #[test]
    fn labels_rotate_every_three_seconds() {
        assert_eq!(LABEL_ROTATION_MS, 3000);
    }

    #[test]
    fn landing_title_names_the_club() {
        assert_eq!(landing_title(), "CCC | CBIT Cyber Security Club");
    }
}
