use std::time::Duration;

/// Delays between steps of the hero typing animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    pub type_char: Duration,
    pub delete_char: Duration,
    /// Pause once a phrase is fully typed, before deleting starts.
    pub hold_typed: Duration,
    /// Pause once deletion reaches the prefix, before the next phrase.
    pub hold_deleted: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_char: Duration::from_millis(100),
            delete_char: Duration::from_millis(50),
            hold_typed: Duration::from_millis(2000),
            hold_deleted: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub id: String,
    pub label: String,
    /// Sections that aren't built yet open the "coming soon" modal instead of scrolling.
    pub coming_soon: bool,
}

impl NavSection {
    fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            coming_soon: false,
        }
    }

    fn coming_soon(id: &str, label: &str) -> Self {
        Self {
            coming_soon: true,
            ..Self::new(id, label)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

/// Everything the page components read. `SiteConfig::default()` is what ships.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub owner: String,
    pub role: String,
    pub hero_prefix: String,
    pub hero_phrases: Vec<String>,
    pub typing: TypingTimings,
    pub cursor_blink: Duration,
    /// Viewport width above which the overlay menu is always closed.
    pub menu_breakpoint: f64,
    /// Height of the fixed header, subtracted when scrolling to a section.
    pub header_offset: f64,
    /// Vertical scroll past which the header gets its shadow.
    pub scrolled_threshold: f64,
    pub home_section: String,
    pub sections: Vec<NavSection>,
    pub email: String,
    pub links: Vec<ExternalLink>,
}

impl SiteConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn section(&self, id: &str) -> Option<&NavSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Alex Volkov".to_string(),
            role: "Frontend Developer".to_string(),
            hero_prefix: "I'm ".to_string(),
            hero_phrases: vec![
                "a frontend developer".to_string(),
                "a Rust enthusiast".to_string(),
                "building for the web".to_string(),
                "open to new projects".to_string(),
            ],
            typing: TypingTimings::default(),
            cursor_blink: Duration::from_millis(500),
            menu_breakpoint: 995.0,
            header_offset: 80.0,
            scrolled_threshold: 50.0,
            home_section: "home".to_string(),
            sections: vec![
                NavSection::new("home", "Home"),
                NavSection::new("about", "About"),
                NavSection::coming_soon("projects", "Projects"),
                NavSection::coming_soon("blog", "Blog"),
                NavSection::new("feedback", "Feedback"),
                NavSection::new("contacts", "Contacts"),
            ],
            email: "hello@alexvolkov.dev".to_string(),
            links: vec![
                ExternalLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/alexvolkov-dev".to_string(),
                    icon: "devicon-github-plain".to_string(),
                },
                ExternalLink {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/alexvolkov-dev".to_string(),
                    icon: "devicon-linkedin-plain".to_string(),
                },
                ExternalLink {
                    label: "Telegram".to_string(),
                    url: "https://t.me/alexvolkov_dev".to_string(),
                    icon: "extra-telegram".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let t = TypingTimings::default();
        assert_eq!(t.type_char, Duration::from_millis(100));
        assert_eq!(t.delete_char * 2, t.type_char);
        assert_eq!(t.hold_typed, Duration::from_millis(2000));
        assert_eq!(t.hold_deleted, Duration::from_millis(500));
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.hero_prefix, "I'm ");
        assert!(!config.hero_phrases.is_empty());
        assert_eq!(config.menu_breakpoint, 995.0);
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.scrolled_threshold, 50.0);
        assert_eq!(config.mailto(), format!("mailto:{}", config.email));

        // home section must be navigable
        let home = config
            .section(&config.home_section)
            .expect("home section should be configured");
        assert!(!home.coming_soon);
        assert!(config.section("nonexistent").is_none());
    }
}
