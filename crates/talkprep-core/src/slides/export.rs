//! Slide deck export surfaces: markdown, JSON, and standalone HTML.
//!
//! HTML output escapes all user content; the JSON interchange document
//! omits speaker notes and durations entirely when the corresponding
//! option flags are off.

use super::model::{Slide, SlideDeck, SlideLayout, SlideQuote};
use crate::template::Theme;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Output format for a deck export. Falls back to markdown by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ExportFormat {
    Markdown,
    Json,
    Html,
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat::Markdown
    }
}

impl ExportFormat {
    /// Filename suffix for this format.
    pub fn suffix(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "-slides.md",
            ExportFormat::Json => "-slides.json",
            ExportFormat::Html => "-slides.html",
        }
    }

    /// Content type of the exported document.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Json => "application/json",
            ExportFormat::Html => "text/html",
        }
    }
}

/// Options controlling what an export includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_speaker_notes: bool,
    pub include_durations: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            include_speaker_notes: true,
            include_durations: true,
        }
    }
}

impl ExportOptions {
    /// Options for a given format with notes and durations included.
    pub fn for_format(format: ExportFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}

/// A completed export: the document plus delivery metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub format: ExportFormat,
    pub content: String,
    pub filename: String,
    pub content_type: String,
}

/// Interchange view of a slide; notes/duration are absent when suppressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideExport {
    pub id: String,
    pub order: u32,
    pub layout: SlideLayout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<SlideQuote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
}

/// Interchange view of a full deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideDeckExport {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub theme: Theme,
    pub slides: Vec<SlideExport>,
    pub metadata: super::model::DeckMetadata,
}

impl SlideDeckExport {
    fn from_deck(deck: &SlideDeck, options: &ExportOptions) -> Self {
        let slides = deck
            .slides
            .iter()
            .map(|s| SlideExport {
                id: s.id.clone(),
                order: s.order,
                layout: s.layout,
                title: s.title.clone(),
                subtitle: s.subtitle.clone(),
                body: s.body.clone(),
                bullets: s.bullets.clone(),
                image_prompt: s.image_prompt.clone(),
                code_example: s.code_example.clone(),
                quote: s.quote.clone(),
                speaker_notes: options
                    .include_speaker_notes
                    .then(|| s.speaker_notes.clone()),
                duration_seconds: options.include_durations.then_some(s.duration_seconds),
            })
            .collect();
        Self {
            title: deck.title.clone(),
            author: deck.author.clone(),
            date: deck.date.clone(),
            theme: deck.theme.clone(),
            slides,
            metadata: deck.metadata.clone(),
        }
    }
}

/// Escapes text for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Derives an export filename from the deck title.
fn derive_filename(title: &str, format: ExportFormat) -> String {
    let stem = title.to_lowercase().replace(' ', "-");
    format!("{stem}{}", format.suffix())
}

fn render_markdown(deck: &SlideDeck, options: &ExportOptions) -> String {
    let mut lines = vec![format!("# {} - Slides\n", deck.title)];

    for (index, slide) in deck.slides.iter().enumerate() {
        let title = slide.title.as_deref().unwrap_or("(untitled)");
        lines.push(format!("## Slide {}: {title}", index + 1));
        lines.push(format!("*Layout: {}*\n", slide.layout));

        if let Some(subtitle) = &slide.subtitle {
            lines.push(format!("*{subtitle}*\n"));
        }
        if let Some(body) = &slide.body {
            lines.push(format!("{body}\n"));
        }
        if let Some(bullets) = &slide.bullets {
            for item in bullets {
                lines.push(format!("- {item}"));
            }
            lines.push(String::new());
        }
        if let Some(code) = &slide.code_example {
            lines.push(format!("```\n{code}\n```\n"));
        }
        if let Some(quote) = &slide.quote {
            lines.push(format!("> {}\n> — {}\n", quote.text, quote.attribution));
        }
        if let Some(image) = &slide.image_prompt {
            lines.push(format!("*Image: {image}*\n"));
        }
        if options.include_speaker_notes {
            lines.push(format!("**Speaker Notes:** {}", slide.speaker_notes));
        }
        if options.include_durations {
            lines.push(format!("**Duration:** {} seconds", slide.duration_seconds));
        }
        lines.push("\n---\n".to_string());
    }

    lines.join("\n")
}

fn render_slide_html(slide: &Slide, options: &ExportOptions) -> String {
    let layout_class = match slide.layout {
        SlideLayout::Title => " slide-title",
        SlideLayout::SectionHeader => " slide-section-header",
        _ => "",
    };
    let heading = if slide.layout == SlideLayout::Title { "h1" } else { "h2" };

    let mut html = format!("    <div class=\"slide{layout_class}\">\n");
    if let Some(title) = &slide.title {
        html.push_str(&format!(
            "        <{heading}>{}</{heading}>\n",
            escape_html(title)
        ));
    }
    if let Some(subtitle) = &slide.subtitle {
        html.push_str(&format!("        <h3>{}</h3>\n", escape_html(subtitle)));
    }
    if let Some(body) = &slide.body {
        html.push_str(&format!("        <p>{}</p>\n", escape_html(body)));
    }
    if let Some(bullets) = &slide.bullets {
        html.push_str("        <ul>\n");
        for item in bullets {
            html.push_str(&format!("            <li>{}</li>\n", escape_html(item)));
        }
        html.push_str("        </ul>\n");
    }
    if let Some(code) = &slide.code_example {
        html.push_str(&format!(
            "        <pre><code>{}</code></pre>\n",
            escape_html(code)
        ));
    }
    if let Some(quote) = &slide.quote {
        html.push_str(&format!(
            "        <blockquote>{}<footer>{}</footer></blockquote>\n",
            escape_html(&quote.text),
            escape_html(&quote.attribution)
        ));
    }
    if options.include_speaker_notes {
        html.push_str(&format!(
            "        <div class=\"notes\"><strong>Notes:</strong> {}</div>\n",
            escape_html(&slide.speaker_notes)
        ));
    }
    if options.include_durations {
        html.push_str(&format!(
            "        <div class=\"duration\">{} s</div>\n",
            slide.duration_seconds
        ));
    }
    html.push_str("    </div>\n");
    html
}

fn render_html(deck: &SlideDeck, options: &ExportOptions) -> String {
    let theme = &deck.theme;
    let mut html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n\
         <style>\n\
         * {{ box-sizing: border-box; margin: 0; padding: 0; }}\n\
         body {{ font-family: {font}, system-ui, sans-serif; line-height: 1.6; }}\n\
         .slide {{ min-height: 100vh; padding: 4rem; display: flex; flex-direction: column; justify-content: center; border-bottom: 2px solid #e5e7eb; page-break-after: always; }}\n\
         .slide-title {{ background: {primary}; color: white; text-align: center; }}\n\
         .slide-section-header {{ background: {secondary}; color: white; text-align: center; }}\n\
         h1 {{ font-size: 3rem; margin-bottom: 1rem; }}\n\
         h2 {{ font-size: 2rem; margin-bottom: 1rem; color: {primary}; }}\n\
         ul {{ list-style: none; padding-left: 0; }}\n\
         li {{ padding: 0.75rem 0; font-size: 1.25rem; }}\n\
         blockquote {{ border-left: 4px solid {secondary}; padding-left: 1rem; font-style: italic; }}\n\
         pre {{ background: #f3f4f6; padding: 1rem; border-radius: 0.5rem; overflow-x: auto; }}\n\
         .notes {{ margin-top: 2rem; padding: 1rem; background: #f3f4f6; border-radius: 0.5rem; font-size: 0.875rem; }}\n\
         .duration {{ margin-top: 0.5rem; font-size: 0.75rem; color: {secondary}; }}\n\
         @media print {{ .notes {{ display: none; }} }}\n\
         </style>\n</head>\n<body>\n",
        title = escape_html(&deck.title),
        font = theme.font,
        primary = theme.primary_color,
        secondary = theme.secondary_color,
    );

    for slide in &deck.slides {
        html.push_str(&render_slide_html(slide, options));
    }

    html.push_str("</body>\n</html>");
    html
}

fn render_json(deck: &SlideDeck, options: &ExportOptions) -> String {
    let export = SlideDeckExport::from_deck(deck, options);
    // Plain derived data over strings and numbers; serialization cannot fail.
    serde_json::to_string_pretty(&export).expect("deck serialization is infallible")
}

/// Exports a deck in the requested format.
pub fn export_slide_deck(deck: &SlideDeck, options: &ExportOptions) -> ExportResult {
    let content = match options.format {
        ExportFormat::Markdown => render_markdown(deck, options),
        ExportFormat::Json => render_json(deck, options),
        ExportFormat::Html => render_html(deck, options),
    };
    ExportResult {
        format: options.format,
        content,
        filename: derive_filename(&deck.title, options.format),
        content_type: options.format.content_type().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Audience, TalkConfigInput, TalkType};
    use crate::outline::build_outline_from_template;
    use crate::slides::builder::build_slide_deck;
    use crate::template::TalkTemplate;

    fn sample_deck(topic: &str) -> SlideDeck {
        let mut input = TalkConfigInput::new(topic);
        input.audience = Some(Audience::Technical);
        let config = input.validate().unwrap();
        let template = TalkTemplate::for_talk_type(TalkType::TechnicalDeepDive);
        let outline = build_outline_from_template(&template, topic, 30);
        build_slide_deck(&config, &outline)
    }

    #[test]
    fn markdown_export_has_heading_filename_and_content_type() {
        let deck = sample_deck("Building APIs with GraphQL");
        let result = export_slide_deck(&deck, &ExportOptions::default());
        assert_eq!(result.format, ExportFormat::Markdown);
        assert!(result.content.starts_with("# Building APIs with GraphQL - Slides"));
        assert_eq!(result.filename, "building-apis-with-graphql-slides.md");
        assert_eq!(result.content_type, "text/markdown");
    }

    #[test]
    fn markdown_flags_control_notes_and_durations() {
        let deck = sample_deck("Flags");
        let bare = export_slide_deck(
            &deck,
            &ExportOptions {
                format: ExportFormat::Markdown,
                include_speaker_notes: false,
                include_durations: false,
            },
        );
        assert!(!bare.content.contains("Speaker Notes"));
        assert!(!bare.content.contains("Duration:"));
    }

    #[test]
    fn html_export_escapes_user_content() {
        let mut deck = sample_deck("Escaping");
        deck.slides[0].title = Some("<script>alert('x')</script> & more".to_string());
        let result = export_slide_deck(&deck, &ExportOptions::for_format(ExportFormat::Html));
        assert!(!result.content.contains("<script>alert"));
        assert!(result
            .content
            .contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
        assert_eq!(result.content_type, "text/html");
        assert_eq!(result.filename, "escaping-slides.html");
    }

    #[test]
    fn html_styles_carry_theme_colors_and_font() {
        let deck = sample_deck("Theme Check");
        let result = export_slide_deck(&deck, &ExportOptions::for_format(ExportFormat::Html));
        assert!(result.content.contains(&deck.theme.primary_color));
        assert!(result.content.contains(&deck.theme.secondary_color));
        assert!(result.content.contains(&deck.theme.font));
    }

    #[test]
    fn json_round_trip_preserves_slide_count_and_order() {
        let deck = sample_deck("Round Trip");
        let result = export_slide_deck(&deck, &ExportOptions::for_format(ExportFormat::Json));
        let parsed: SlideDeckExport = serde_json::from_str(&result.content).unwrap();
        assert_eq!(parsed.slides.len(), deck.slides.len());
        for (exported, original) in parsed.slides.iter().zip(&deck.slides) {
            assert_eq!(exported.id, original.id);
            assert_eq!(exported.order, original.order);
        }
        assert_eq!(result.content_type, "application/json");
    }

    #[test]
    fn json_omits_suppressed_fields_entirely() {
        let deck = sample_deck("Suppressed");
        let result = export_slide_deck(
            &deck,
            &ExportOptions {
                format: ExportFormat::Json,
                include_speaker_notes: false,
                include_durations: false,
            },
        );
        assert!(!result.content.contains("speakerNotes"));
        assert!(!result.content.contains("durationSeconds"));
    }
}
