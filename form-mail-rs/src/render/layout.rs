//! Builds the email element tree from a configuration

use crate::render::node::Element;
use crate::render::style::{
    platform_glyph, row_padding, CONTENT_MAX_WIDTH, COPYRIGHT_COLOR, FOOTER_COLOR,
};
use crate::template::{CallToAction, Field, SocialLink, TemplateConfig};

/// What the tree is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Preview,
    Export { year: i32 },
}

pub(crate) fn build(config: &TemplateConfig, mode: Mode) -> Element {
    let mut container = Element::new("div")
        .css("max-width", CONTENT_MAX_WIDTH)
        .css("margin", "0 auto")
        .child(logo(config))
        .child(card(config));

    if let Mode::Export { year } = mode {
        container = container.child(copyright(config, year));
    }

    let root = Element::new("div")
        .css("width", "100%")
        .css("margin", "0")
        .css("padding", "40px 16px")
        .css("background-color", &config.body_bg_color)
        .css("font-family", &config.font_family)
        .child(container);

    match mode {
        Mode::Preview => root.with_navigation_disabled(),
        Mode::Export { .. } => root,
    }
}

fn logo(config: &TemplateConfig) -> Element {
    Element::new("div")
        .css("text-align", "center")
        .css("margin-bottom", "24px")
        .child(
            Element::new("img")
                .attr("src", &config.logo_url)
                .attr("alt", "Logo")
                .attr("width", &config.logo_width)
                .css("width", format!("{}px", config.logo_width))
                .css("max-width", "100%")
                .css("height", "auto")
                .css("display", "block")
                .css("margin", "0 auto")
                .css("border", "0"),
        )
}

fn card(config: &TemplateConfig) -> Element {
    let mut card = Element::new("div")
        .css("background-color", &config.card_bg_color)
        .css("border", format!("1px solid {}", config.border_color))
        .css("border-radius", "8px")
        .css("padding", "32px")
        .child(title(config));

    if !config.description.is_empty() {
        card = card.child(description(config));
    }

    card = card.child(fields_table(config));

    if config.cta.enabled {
        card = card.child(call_to_action(&config.cta));
    }

    if !config.social_links.is_empty() {
        card = card.child(social_row(config));
    }

    card.child(footer(config))
}

fn title(config: &TemplateConfig) -> Element {
    Element::new("h2")
        .css("margin", "0 0 24px 0")
        .css("font-size", "24px")
        .css("font-weight", "bold")
        .css("color", &config.header_color)
        .css("text-align", "center")
        .text(&config.title)
}

fn description(config: &TemplateConfig) -> Element {
    Element::new("p")
        .css("margin", "0 0 24px 0")
        .css("font-size", "14px")
        .css("line-height", "1.6")
        .css("color", &config.text_color)
        .css("text-align", "center")
        .css("white-space", "pre-wrap")
        .text(&config.description)
}

fn fields_table(config: &TemplateConfig) -> Element {
    let padding = row_padding(config.density);
    let rows = config
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| field_row(config, field, index, padding));

    Element::new("table")
        .attr("width", "100%")
        .attr("cellpadding", "0")
        .attr("cellspacing", "0")
        .attr("border", "0")
        .css("width", "100%")
        .css("border-collapse", "collapse")
        .css("font-size", "14px")
        .css("color", &config.text_color)
        .child(Element::new("tbody").children(rows))
}

fn field_row(config: &TemplateConfig, field: &Field, index: usize, padding: &str) -> Element {
    let mut row = Element::new("tr");
    // second, fourth, ... rows are striped
    if index % 2 == 1 {
        row = row.css("background-color", &config.accent_color);
    }

    let border = format!("1px solid {}", config.border_color);

    row.child(
        Element::new("td")
            .css("padding", padding)
            .css("font-weight", "600")
            .css("width", "40%")
            .css("color", &config.text_color)
            .css("border-bottom", border.clone())
            .css("vertical-align", "top")
            .text(&field.label),
    )
    .child(
        Element::new("td")
            .css("padding", padding)
            .css("color", &config.text_color)
            .css("border-bottom", border)
            .css("vertical-align", "top")
            .text(&field.shortcode),
    )
}

fn call_to_action(cta: &CallToAction) -> Element {
    Element::new("div")
        .css("text-align", "center")
        .css("margin-top", "32px")
        .css("margin-bottom", "24px")
        .child(
            Element::new("a")
                .attr("href", &cta.url)
                .css("display", "inline-block")
                .css("padding", "14px 32px")
                .css("border-radius", "6px")
                .css("background-color", &cta.bg_color)
                .css("color", &cta.text_color)
                .css("text-decoration", "none")
                .css("font-weight", "bold")
                .css("font-size", "16px")
                .text(&cta.text),
        )
}

fn social_row(config: &TemplateConfig) -> Element {
    Element::new("div")
        .css("text-align", "center")
        .css("margin-top", "24px")
        .css("padding-top", "16px")
        .css("border-top", format!("1px solid {}", config.border_color))
        .children(
            config
                .social_links
                .iter()
                .map(|link| social_icon(config, link)),
        )
}

fn social_icon(config: &TemplateConfig, link: &SocialLink) -> Element {
    Element::new("a")
        .attr("href", &link.url)
        .attr("title", link.platform.display_name())
        .css("display", "inline-block")
        .css("width", "32px")
        .css("height", "32px")
        .css("line-height", "32px")
        .css("margin", "0 4px")
        .css("border", format!("1px solid {}", config.border_color))
        .css("border-radius", "50%")
        .css("color", &config.header_color)
        .css("font-size", "14px")
        .css("font-weight", "bold")
        .css("text-align", "center")
        .css("text-decoration", "none")
        .text(platform_glyph(&link.platform))
}

fn footer(config: &TemplateConfig) -> Element {
    Element::new("p")
        .css("margin", "24px 0 0 0")
        .css("font-size", "12px")
        .css("color", FOOTER_COLOR)
        .css("text-align", "center")
        .css("line-height", "1.5")
        .text(&config.footer_text)
}

fn copyright(config: &TemplateConfig, year: i32) -> Element {
    Element::new("div")
        .css("text-align", "center")
        .css("margin-top", "16px")
        .css("font-size", "10px")
        .css("color", COPYRIGHT_COLOR)
        .text(format!("\u{a9} {} {}", year, config.title))
}
