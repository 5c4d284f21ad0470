use serde::Deserialize;
use thiserror::Error;

const EMBEDDED: &str = include_str!("../content/privana.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site content field {section}.{field} is empty")]
    Empty {
        section: &'static str,
        field: &'static str,
    },
    #[error("team member #{index} has no name")]
    UnnamedMember { index: usize },
}

/// Glyphs shown next to headings and list points.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Shield,
    Zap,
    Users,
    ArrowRight,
    CheckCircle,
    Smartphone,
    Lock,
    Globe,
    ChevronDown,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Shield => "🛡️",
            Icon::Zap => "⚡",
            Icon::Users => "👥",
            Icon::ArrowRight => "→",
            Icon::CheckCircle => "✔",
            Icon::Smartphone => "📱",
            Icon::Lock => "🔒",
            Icon::Globe => "🌐",
            Icon::ChevronDown => "⌄",
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Cyan,
    Purple,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Cyan => "accent-cyan",
            Accent::Purple => "accent-purple",
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Brand {
    pub name: String,
    pub monogram: String,
    pub tagline: String,
    pub subtitle: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Problem {
    pub title: String,
    pub lead: String,
    pub highlights: Vec<String>,
    pub tail: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IconItem {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PainPoints {
    pub title: String,
    pub items: Vec<IconItem>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Wallet {
    pub icon: Icon,
    pub title: String,
    pub caption: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    pub title: String,
    pub summary: String,
    pub benefits: Vec<Benefit>,
    pub wallet: Wallet,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Journey {
    pub title: String,
    pub steps: Vec<IconItem>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WhyPoint {
    pub icon: Icon,
    pub text: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WhyColumn {
    pub title: String,
    pub accent: Accent,
    pub points: Vec<WhyPoint>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Why {
    pub title: String,
    pub columns: Vec<WhyColumn>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub description: String,
}

impl TeamMember {
    /// First character of the name, shown inside the avatar.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Team {
    pub title: String,
    pub members: Vec<TeamMember>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Faq {
    pub title: String,
    pub entries: Vec<FaqEntry>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
    pub button: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Footer {
    pub copyright: String,
    pub tagline: String,
}

/// All copy rendered by the page.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub problem: Problem,
    pub pain_points: PainPoints,
    pub solution: Solution,
    pub journey: Journey,
    pub why: Why,
    pub team: Team,
    pub faq: Faq,
    pub cta: CallToAction,
    pub footer: Footer,
}

impl SiteContent {
    /// Content shipped inside the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.brand.name.trim().is_empty() {
            return Err(ContentError::Empty { section: "brand", field: "name" });
        }
        if self.brand.monogram.trim().is_empty() {
            return Err(ContentError::Empty { section: "brand", field: "monogram" });
        }
        if self.journey.steps.is_empty() {
            return Err(ContentError::Empty { section: "journey", field: "steps" });
        }
        if self.faq.entries.is_empty() {
            return Err(ContentError::Empty { section: "faq", field: "entries" });
        }
        if let Some(index) = self
            .team
            .members
            .iter()
            .position(|member| member.name.trim().is_empty())
        {
            return Err(ContentError::UnnamedMember { index });
        }
        Ok(())
    }
}

/// Separator placed after highlight `index` when `count` highlights are
/// written out as an English list ("a, b, and c").
pub fn list_separator(index: usize, count: usize) -> &'static str {
    if index + 1 >= count {
        ""
    } else if count == 2 {
        " and "
    } else if index + 2 == count {
        ", and "
    } else {
        ", "
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(words: &[&str]) -> String {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| format!("{}{}", w, list_separator(i, words.len())))
            .collect()
    }

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::embedded().expect("embedded content should be valid");
        assert_eq!(content.brand.name, "Privana");
        assert_eq!(content.faq.entries.len(), 3);
        assert_eq!(content.team.members.len(), 3);
        assert_eq!(content.journey.steps.len(), 3);
        assert_eq!(content.pain_points.items.len(), 3);
        assert_eq!(content.why.columns.len(), 2);
        assert_eq!(content.why.columns[1].accent, Accent::Purple);
        assert_eq!(content.journey.steps[2].icon, Icon::Lock);
    }

    #[test]
    fn team_initials_come_from_names() {
        let content = SiteContent::embedded().unwrap();
        let initials: Vec<String> = content.team.members.iter().map(TeamMember::initial).collect();
        assert_eq!(initials, vec!["R", "H", "A"]);
    }

    #[test]
    fn problem_highlights_join_as_english_list() {
        let content = SiteContent::embedded().unwrap();
        let words: Vec<&str> = content.problem.highlights.iter().map(String::as_str).collect();
        assert_eq!(joined(&words), "slow, repetitive, and insecure");
        assert_eq!(joined(&["fast", "safe"]), "fast and safe");
        assert_eq!(joined(&["private"]), "private");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteContent::from_json("{ \"brand\": ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let raw = EMBEDDED.replacen("\"zap\"", "\"rocket\"", 1);
        assert!(matches!(SiteContent::from_json(&raw), Err(ContentError::Parse(_))));
    }

    #[test]
    fn empty_faq_is_rejected() {
        let mut content = SiteContent::embedded().unwrap();
        content.faq.entries.clear();
        match content.validate() {
            Err(ContentError::Empty { section, field }) => {
                assert_eq!((section, field), ("faq", "entries"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn unnamed_member_is_rejected() {
        let mut content = SiteContent::embedded().unwrap();
        content.team.members[1].name = "  ".to_string();
        assert!(matches!(
            content.validate(),
            Err(ContentError::UnnamedMember { index: 1 })
        ));
    }
}
