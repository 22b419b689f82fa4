//! Template registry and the per-template extractors.
//!
//! Each known template identifier maps to a [`TemplateKind`], and each kind
//! to one extraction function. Extractors are pure: they read the props,
//! lay items out with function-local cursors and return a fresh
//! [`Extraction`].

mod avatar;
mod chart;
mod columns;
mod grid;
mod sequence;
mod text;

use crate::items::ItemFactory;
use crate::layout::{CONTENT_WIDTH, MARGIN, TITLE_GAP, TITLE_HEIGHT, TOP};
use crate::props::Props;
use crate::types::{Extraction, ImageContent, PositionableItem, Rect, TextStyle};
use crate::Error;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Signature shared by every template extractor.
pub type ExtractFn = fn(&Props, &ItemFactory) -> Extraction;

/// Lookup table from identifier to kind, built on first use.
static REGISTRY: LazyLock<HashMap<&'static str, TemplateKind>> = LazyLock::new(|| {
    TemplateKind::ALL
        .iter()
        .map(|kind| (kind.as_str(), *kind))
        .collect()
});

/// Every slide template the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    TitleSlide,
    BulletPoints,
    LearningObjectives,
    AgendaSlide,
    SummarySlide,
    QuoteSlide,
    SectionDivider,
    DefinitionSlide,
    StatisticHighlight,
    ThankYouSlide,
    ClosingCta,
    FaqSlide,
    Checklist,
    TextWithImage,
    ImageFocus,
    ImageGallery,
    TwoColumn,
    ComparisonSlide,
    ChallengesSolutions,
    ContraindicationsIndications,
    ProsCons,
    ProblemSolution,
    CaseStudy,
    ProcessSteps,
    Timeline,
    Pyramid,
    CycleDiagram,
    BigNumbers,
    MetricsSlide,
    FourBoxGrid,
    SixIdeas,
    KeyTakeaways,
    TagsSlide,
    TeamMembers,
    PieChart,
    BarChart,
    AvatarIntro,
    AvatarSteps,
    AvatarChecklist,
    AvatarQuote,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 40] = [
        Self::TitleSlide,
        Self::BulletPoints,
        Self::LearningObjectives,
        Self::AgendaSlide,
        Self::SummarySlide,
        Self::QuoteSlide,
        Self::SectionDivider,
        Self::DefinitionSlide,
        Self::StatisticHighlight,
        Self::ThankYouSlide,
        Self::ClosingCta,
        Self::FaqSlide,
        Self::Checklist,
        Self::TextWithImage,
        Self::ImageFocus,
        Self::ImageGallery,
        Self::TwoColumn,
        Self::ComparisonSlide,
        Self::ChallengesSolutions,
        Self::ContraindicationsIndications,
        Self::ProsCons,
        Self::ProblemSolution,
        Self::CaseStudy,
        Self::ProcessSteps,
        Self::Timeline,
        Self::Pyramid,
        Self::CycleDiagram,
        Self::BigNumbers,
        Self::MetricsSlide,
        Self::FourBoxGrid,
        Self::SixIdeas,
        Self::KeyTakeaways,
        Self::TagsSlide,
        Self::TeamMembers,
        Self::PieChart,
        Self::BarChart,
        Self::AvatarIntro,
        Self::AvatarSteps,
        Self::AvatarChecklist,
        Self::AvatarQuote,
    ];

    /// The identifier used in slide JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TitleSlide => "title-slide",
            Self::BulletPoints => "bullet-points",
            Self::LearningObjectives => "learning-objectives",
            Self::AgendaSlide => "agenda-slide",
            Self::SummarySlide => "summary-slide",
            Self::QuoteSlide => "quote-slide",
            Self::SectionDivider => "section-divider",
            Self::DefinitionSlide => "definition-slide",
            Self::StatisticHighlight => "statistic-highlight",
            Self::ThankYouSlide => "thank-you-slide",
            Self::ClosingCta => "closing-cta",
            Self::FaqSlide => "faq-slide",
            Self::Checklist => "checklist",
            Self::TextWithImage => "text-with-image",
            Self::ImageFocus => "image-focus",
            Self::ImageGallery => "image-gallery",
            Self::TwoColumn => "two-column",
            Self::ComparisonSlide => "comparison-slide",
            Self::ChallengesSolutions => "challenges-solutions",
            Self::ContraindicationsIndications => "contraindications-indications",
            Self::ProsCons => "pros-cons",
            Self::ProblemSolution => "problem-solution",
            Self::CaseStudy => "case-study",
            Self::ProcessSteps => "process-steps",
            Self::Timeline => "timeline",
            Self::Pyramid => "pyramid",
            Self::CycleDiagram => "cycle-diagram",
            Self::BigNumbers => "big-numbers",
            Self::MetricsSlide => "metrics-slide",
            Self::FourBoxGrid => "four-box-grid",
            Self::SixIdeas => "six-ideas",
            Self::KeyTakeaways => "key-takeaways",
            Self::TagsSlide => "tags-slide",
            Self::TeamMembers => "team-members",
            Self::PieChart => "pie-chart",
            Self::BarChart => "bar-chart",
            Self::AvatarIntro => "avatar-intro",
            Self::AvatarSteps => "avatar-steps",
            Self::AvatarChecklist => "avatar-checklist",
            Self::AvatarQuote => "avatar-quote",
        }
    }

    /// Resolve an identifier. Unknown identifiers yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        REGISTRY.get(id).copied()
    }

    /// The extraction function for this template.
    pub fn extractor(self) -> ExtractFn {
        match self {
            Self::TitleSlide => text::title_slide,
            Self::BulletPoints => text::bullet_points,
            Self::LearningObjectives => text::learning_objectives,
            Self::AgendaSlide => text::agenda_slide,
            Self::SummarySlide => text::summary_slide,
            Self::QuoteSlide => text::quote_slide,
            Self::SectionDivider => text::section_divider,
            Self::DefinitionSlide => text::definition_slide,
            Self::StatisticHighlight => text::statistic_highlight,
            Self::ThankYouSlide => text::thank_you_slide,
            Self::ClosingCta => text::closing_cta,
            Self::FaqSlide => text::faq_slide,
            Self::Checklist => text::checklist,
            Self::TextWithImage => text::text_with_image,
            Self::ImageFocus => text::image_focus,
            Self::ImageGallery => text::image_gallery,
            Self::TwoColumn => columns::two_column,
            Self::ComparisonSlide => columns::comparison_slide,
            Self::ChallengesSolutions => columns::challenges_solutions,
            Self::ContraindicationsIndications => columns::contraindications_indications,
            Self::ProsCons => columns::pros_cons,
            Self::ProblemSolution => columns::problem_solution,
            Self::CaseStudy => columns::case_study,
            Self::ProcessSteps => sequence::process_steps,
            Self::Timeline => sequence::timeline,
            Self::Pyramid => sequence::pyramid,
            Self::CycleDiagram => sequence::cycle_diagram,
            Self::BigNumbers => grid::big_numbers,
            Self::MetricsSlide => grid::metrics_slide,
            Self::FourBoxGrid => grid::four_box_grid,
            Self::SixIdeas => grid::six_ideas,
            Self::KeyTakeaways => grid::key_takeaways,
            Self::TagsSlide => grid::tags_slide,
            Self::TeamMembers => grid::team_members,
            Self::PieChart => chart::pie_chart,
            Self::BarChart => chart::bar_chart,
            Self::AvatarIntro => avatar::avatar_intro,
            Self::AvatarSteps => avatar::avatar_steps,
            Self::AvatarChecklist => avatar::avatar_checklist,
            Self::AvatarQuote => avatar::avatar_quote,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| Error::UnknownTemplate(s.to_string()))
    }
}

/// Look up the extractor for a template identifier.
///
/// Returns `None` for identifiers outside the registry; callers fall back
/// to the generic extractor.
pub fn get_extractor(template_id: &str) -> Option<ExtractFn> {
    TemplateKind::from_id(template_id).map(TemplateKind::extractor)
}

/// Emit the standard title band when a title exists.
///
/// Returns the vertical cursor for the content below it.
pub(crate) fn title_band(
    props: &Props,
    factory: &ItemFactory,
    id: &str,
    items: &mut Vec<PositionableItem>,
) -> i32 {
    match props.text("title") {
        Some(title) => {
            let rect = Rect::new(MARGIN, TOP, CONTENT_WIDTH, TITLE_HEIGHT);
            items.push(factory.text_item(id, title, TextStyle::Title, rect));
            TOP + TITLE_HEIGHT + TITLE_GAP
        }
        None => TOP,
    }
}

/// The slide's primary image, from `imagePath` or `imagePrompt`.
pub(crate) fn primary_image(props: &Props) -> Option<ImageContent> {
    let alt = props.text("imageAlt").or_else(|| props.text("title"));
    props.image("imagePath", "imagePrompt", alt.as_deref().unwrap_or("Slide image"))
}

/// The presenter avatar image.
///
/// Read from the nested `avatar` record, falling back to a flat
/// `avatarImage` field.
pub(crate) fn avatar_image(props: &Props) -> Option<ImageContent> {
    let avatar = props.record("avatar").unwrap_or_default();
    let alt = avatar_name(props).unwrap_or_else(|| "Avatar".to_string());
    let path_key = if avatar.text("imagePath").is_some() {
        "imagePath"
    } else {
        "image"
    };
    avatar
        .image(path_key, "imagePrompt", &alt)
        .or_else(|| props.image("avatarImage", "avatarPrompt", &alt))
}

pub(crate) fn avatar_name(props: &Props) -> Option<String> {
    props
        .record("avatar")
        .and_then(|avatar| avatar.text("name"))
        .or_else(|| props.text("avatarName"))
}
