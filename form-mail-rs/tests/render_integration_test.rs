//! Integration tests for the rendering engine

use form_mail_rs::render::{Element, EmailRenderer, Node};
use form_mail_rs::template::types::{
    CallToAction, Density, Field, PartialTemplateConfig, SocialLink, SocialPlatform,
};
use form_mail_rs::template::{merge, TemplateConfig};

const YEAR: i32 = 2026;

/// Helper: the example configuration with a single field
fn single_field_config() -> TemplateConfig {
    TemplateConfig {
        title: "New Service Request".to_string(),
        density: Density::Normal,
        description: String::new(),
        fields: vec![Field::new("1", "Full Name", r#"[field id="f_name"]"#)],
        cta: CallToAction {
            enabled: false,
            text: "View Request".to_string(),
            url: "https://example.com/requests".to_string(),
            bg_color: "#111827".to_string(),
            text_color: "#ffffff".to_string(),
        },
        social_links: vec![],
        ..TemplateConfig::service_request()
    }
}

fn with_fields(labels: &[&str]) -> TemplateConfig {
    let fields = labels
        .iter()
        .enumerate()
        .map(|(i, label)| Field::new(&i.to_string(), label, &format!("[{}]", label)))
        .collect();
    TemplateConfig {
        fields,
        ..TemplateConfig::service_request()
    }
}

fn rows(tree: &Element) -> Vec<&Element> {
    tree.find_all("tr")
}

/// Export tree with the copyright line (last child of the content container) removed
fn export_without_copyright(config: &TemplateConfig) -> Element {
    let mut tree = EmailRenderer::render_export_tree(config, YEAR);
    if let Some(Node::Element(container)) = tree.children.first_mut() {
        container.children.pop();
    }
    tree
}

#[test]
fn test_example_scenario() {
    let html = EmailRenderer::render_export_markup_for_year(&single_field_config(), YEAR);

    assert!(html.contains(">New Service Request</h2>"));
    assert_eq!(html.matches("<tr").count(), 1);
    assert!(html.contains(">Full Name</td>"));
    assert!(html.contains(r#">[field id="f_name"]</td>"#));
    assert!(!html.contains("View Request"));
    assert!(!html.contains("border-radius:50%"));
    assert!(!html.contains("white-space:pre-wrap"));
    assert!(html.contains("\u{a9} 2026 New Service Request"));
}

#[test]
fn test_preview_matches_export() {
    let mut config = TemplateConfig::thank_you();
    config.social_links.push(SocialLink {
        id: "x".to_string(),
        platform: SocialPlatform::Linkedin,
        url: "https://linkedin.com/company/acme".to_string(),
    });

    let preview = EmailRenderer::render_preview(&config);
    let export = export_without_copyright(&config);

    assert_eq!(preview.without_inert(), export);
    assert_eq!(preview.without_inert().to_html(), export.to_html());
    assert_eq!(preview.text_content(), export.text_content());
}

#[test]
fn test_preview_disables_navigation_only_on_links_and_images() {
    let config = TemplateConfig::thank_you();
    let preview = EmailRenderer::render_preview(&config);

    let links = preview.find_all("a");
    assert!(!links.is_empty());
    assert!(links.iter().all(|a| a.inert));
    assert!(preview.find_all("img").iter().all(|img| img.inert));
    assert!(preview.find_all("td").iter().all(|td| !td.inert));

    // href and style are kept so the layout is unchanged
    assert_eq!(links[0].attribute("href"), Some(config.cta.url.as_str()));
}

#[test]
fn test_export_is_byte_identical_across_calls() {
    let config = TemplateConfig::thank_you();
    let first = EmailRenderer::render_export_markup_for_year(&config, YEAR);
    let second = EmailRenderer::render_export_markup_for_year(&config.clone(), YEAR);
    assert_eq!(first, second);
}

#[test]
fn test_row_striping() {
    for n in 0..7 {
        let labels: Vec<String> = (0..n).map(|i| format!("Row{}", i)).collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        let mut config = with_fields(&labels);
        config.accent_color = "#abcdef".to_string();

        let tree = EmailRenderer::render_preview(&config);
        let rows = rows(&tree);
        assert_eq!(rows.len(), n);

        let striped: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, tr)| tr.style_value("background-color") == Some("#abcdef"))
            .map(|(i, _)| i)
            .collect();

        assert_eq!(striped.len(), n / 2);
        assert!(striped.iter().all(|i| i % 2 == 1));
    }
}

#[test]
fn test_density_padding() {
    let padding_for = |density_json: &str| {
        let base = TemplateConfig::service_request();
        let config = TemplateConfig::from_json(density_json, &base).unwrap();
        let tree = EmailRenderer::render_preview(&config);
        tree.find_all("td")[0].style_value("padding").unwrap().to_string()
    };

    assert_eq!(padding_for(r#"{"density":"normal"}"#), "12px 8px");
    assert_eq!(padding_for(r#"{"density":"bogus-value"}"#), "12px 8px");
    assert_eq!(padding_for(r#"{"density":null}"#), "12px 8px");
    assert_eq!(padding_for(r#"{}"#), "12px 8px");
    assert_eq!(padding_for(r#"{"density":"compact"}"#), "8px 4px");
    assert_eq!(padding_for(r#"{"density":"spacious"}"#), "20px 12px");
}

#[test]
fn test_conditional_blocks_absent() {
    let config = single_field_config();
    let tree = EmailRenderer::render_export_tree(&config, YEAR);

    // only the logo image, no links at all
    assert!(tree.find_all("a").is_empty());
    // title + footer only
    let paragraphs = tree.find_all("p");
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].text_content(), config.footer_text);
}

#[test]
fn test_conditional_blocks_present() {
    let mut config = single_field_config();
    config.description = "Line one\nLine two".to_string();
    config.cta.enabled = true;
    config.social_links = vec![SocialLink {
        id: "s".to_string(),
        platform: SocialPlatform::Other("mastodon".to_string()),
        url: "https://social.example/@acme".to_string(),
    }];

    let html = EmailRenderer::render_export_markup_for_year(&config, YEAR);

    assert!(html.contains(">Line one\nLine two</p>"));
    assert!(html.contains("white-space:pre-wrap;"));
    assert!(html.contains("href=\"https://example.com/requests\""));
    assert!(html.contains(">View Request</a>"));
    assert!(html.contains("href=\"https://social.example/@acme\""));
    assert!(html.contains("\u{1F310}</a>"));
}

#[test]
fn test_block_order() {
    let mut config = single_field_config();
    config.description = "Intro".to_string();
    config.cta.enabled = true;
    config.social_links = vec![SocialLink {
        id: "s".to_string(),
        platform: SocialPlatform::Youtube,
        url: "https://youtube.com/@acme".to_string(),
    }];

    let html = EmailRenderer::render_export_markup_for_year(&config, YEAR);
    let positions: Vec<usize> = [
        "<img",
        "<h2",
        ">Intro</p>",
        "<table",
        ">View Request</a>",
        "https://youtube.com/@acme",
        config.footer_text.as_str(),
        "\u{a9} 2026",
    ]
    .iter()
    .map(|needle| html.find(needle).unwrap())
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_field_order_preserved() {
    let abc = EmailRenderer::render_preview(&with_fields(&["A", "B", "C"]));
    let cab = EmailRenderer::render_preview(&with_fields(&["C", "A", "B"]));

    let first_cells = |tree: &Element| -> Vec<String> {
        rows(tree)
            .iter()
            .map(|tr| tr.child_elements().next().unwrap().text_content())
            .collect()
    };

    assert_eq!(first_cells(&abc), ["A", "B", "C"]);
    assert_eq!(first_cells(&cab), ["C", "A", "B"]);
}

#[test]
fn test_export_markup_contract() {
    let html = EmailRenderer::render_export_markup_for_year(&TemplateConfig::thank_you(), YEAR);

    assert!(html.starts_with("<div style=\"width:100%;margin:0;padding:40px 16px;background-color:#f0fdf4;font-family:Arial, Helvetica, sans-serif;\">"));
    assert_eq!(html.matches("font-family:").count(), 1);
    assert!(html.contains("<table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\""));
    assert!(html.contains("border-collapse:collapse;"));
    assert!(!html.contains("<style"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("class="));
}

#[test]
fn test_garbage_values_pass_through() {
    let config = TemplateConfig {
        logo_url: String::new(),
        logo_width: "wide".to_string(),
        title: String::new(),
        header_color: "not-a-color".to_string(),
        footer_text: String::new(),
        fields: vec![],
        ..TemplateConfig::service_request()
    };

    let html = EmailRenderer::render_export_markup_for_year(&config, YEAR);
    assert!(html.contains("color:not-a-color;"));
    assert!(html.contains("width:widepx;"));
    assert!(html.contains("<tbody></tbody>"));
}

#[test]
fn test_footer_uses_fixed_color() {
    let mut config = TemplateConfig::service_request();
    config.text_color = "#123456".to_string();
    let tree = EmailRenderer::render_preview(&config);
    let footer = tree.find_all("p").pop().unwrap();
    assert_eq!(footer.style_value("color"), Some("#6b7280"));
}

#[test]
fn test_merge_title_only() {
    let base = TemplateConfig::service_request();
    let merged = merge(
        &base,
        PartialTemplateConfig {
            title: Some("X".to_string()),
            ..Default::default()
        },
    );

    assert_eq!(merged.title, "X");
    assert_eq!(TemplateConfig { title: base.title.clone(), ..merged }, base);
}
