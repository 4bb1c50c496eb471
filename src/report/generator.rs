//! HTML gallery rendering

use super::template::STYLE;
use crate::config::ProjectInfo;
use crate::utils::helpers::escape_html;

/// One image card in the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub file_name: String,
    pub title: String,
    pub description: String,
}

pub fn render_html(project: &ProjectInfo, entries: &[ReportEntry]) -> String {
    let name = escape_html(&project.name);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("    <title>{name} - Generated Diagram Images</title>\n"));
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n");
    html.push_str("    <div class=\"container\">\n");
    html.push_str(&format!("        <h1>🚀 {name} - System Design Diagram Images</h1>\n"));
    if !project.tagline.is_empty() {
        html.push_str(&format!(
            "        <p class=\"tagline\">{}</p>\n",
            escape_html(&project.tagline)
        ));
    }

    html.push_str("\n        <div class=\"diagram-grid\">\n");
    for entry in entries {
        let title = escape_html(&entry.title);
        html.push_str("            <div class=\"diagram-item\">\n");
        html.push_str(&format!("                <div class=\"diagram-title\">{title}</div>\n"));
        html.push_str(&format!(
            "                <img src=\"{}\" alt=\"{title}\" class=\"diagram-image\">\n",
            escape_html(&entry.file_name)
        ));
        html.push_str(&format!(
            "                <div class=\"diagram-description\">{}</div>\n",
            escape_html(&entry.description)
        ));
        html.push_str("            </div>\n");
    }
    html.push_str("        </div>\n");

    if !project.summary.is_empty() {
        html.push_str("\n        <div class=\"summary\">\n");
        html.push_str(&format!("            <h3>📊 {name} System Design Summary</h3>\n"));
        html.push_str(&format!("            <p>{}</p>\n", escape_html(&project.summary)));
        html.push_str("        </div>\n");
    }

    html.push_str("    </div>\n</body>\n</html>\n");
    html
}
