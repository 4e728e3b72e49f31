//! Server-rendered profile page.

use crate::database::models::ProfileDetail;

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn profile_page(detail: &ProfileDetail) -> String {
    let profile = &detail.profile;
    let name = escape(&profile.name);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n</head>\n<body>\n", name));

    html.push_str(&format!("<h1>{}</h1>\n", name));
    html.push_str(&format!("<p class=\"bio\">{}</p>\n", escape(&profile.bio)));
    html.push_str(&format!(
        "<p class=\"links\"><a href=\"{}\">GitHub</a> <a href=\"{}\">LinkedIn</a></p>\n",
        escape(&profile.github),
        escape(&profile.linkedin)
    ));

    html.push_str("<section id=\"projects\">\n<h2>Projects</h2>\n");
    if detail.projects.is_empty() {
        html.push_str("<p>No projects yet.</p>\n");
    } else {
        html.push_str("<ul>\n");
        for project in &detail.projects {
            html.push_str(&format!(
                "<li><h3><a href=\"{}\">{}</a></h3><p>{}</p><p>Keyword: {} | Key skill: {}</p></li>\n",
                escape(&project.github_url),
                escape(&project.name),
                escape(&project.description),
                escape(&project.keyword),
                escape(&project.key_skill)
            ));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");

    html.push_str("<section id=\"certificates\">\n<h2>Certificates</h2>\n");
    if detail.certificates.is_empty() {
        html.push_str("<p>No certificates yet.</p>\n");
    } else {
        html.push_str("<ul>\n");
        for certificate in &detail.certificates {
            html.push_str(&format!(
                "<li>{} <span class=\"institution\">({})</span></li>\n",
                escape(&certificate.name),
                escape(&certificate.institution)
            ));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n</body>\n</html>\n");

    html
}
