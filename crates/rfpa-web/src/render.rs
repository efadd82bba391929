//! Server-side HTML rendering.

use axum::http::StatusCode;
use rfpa_core::validation::{FormData, FormErrors};
use rfpa_core::{AnalysisResult, AnalysisSummary, DocumentInsights};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f6f8; color: #1f2933; }
nav { background: #243b53; padding: 12px 24px; }
nav a { color: #f0f4f8; margin-right: 18px; text-decoration: none; font-weight: 600; }
main { max-width: 960px; margin: 24px auto; padding: 0 24px; }
.card { background: #fff; border-radius: 8px; padding: 20px; margin-bottom: 20px; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
.flash { background: #fff3c4; border-left: 4px solid #f0b429; padding: 12px; margin-bottom: 20px; }
.error { color: #ba2525; font-size: 0.9em; }
.muted { color: #7b8794; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 6px 8px; border-bottom: 1px solid #e4e7eb; }
pre { white-space: pre-wrap; background: #f0f4f8; padding: 12px; border-radius: 6px; }
label { display: block; margin-top: 12px; font-weight: 600; }
input[type=text], textarea { width: 100%; padding: 6px; box-sizing: border-box; }
"#;

/// Escape text for HTML element and attribute content.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/">RFP Document Analyzer</a><a href="/generate_prompt">Prompt Generator</a></nav>
<main>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
    )
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        return r#"<p class="muted">None found.</p>"#.to_string();
    }
    let lis: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!("<ul>{}</ul>", lis)
}

pub fn index_page(flash: Option<&str>, recent: &[AnalysisSummary], total: usize) -> String {
    let flash_html = flash
        .map(|msg| format!(r#"<div class="flash">{}</div>"#, escape(msg)))
        .unwrap_or_default();

    let rows = if recent.is_empty() {
        r#"<tr><td colspan="4">No analyses yet. Upload an RFP to get started.</td></tr>"#.to_string()
    } else {
        recent
            .iter()
            .map(|a| {
                format!(
                    r#"<tr><td><a href="/analyses/{id}">{title}</a></td><td>{org}</td><td>{file}</td><td>{at}</td></tr>"#,
                    id = a.id,
                    title = escape(&a.title),
                    org = escape(&a.organization),
                    file = escape(&a.filename),
                    at = a.created_at.format("%Y-%m-%d %H:%M"),
                )
            })
            .collect()
    };

    let body = format!(
        r#"<h1>RFP Document Analyzer</h1>
{flash_html}
<div class="card">
<h2>Upload an RFP</h2>
<form action="/upload" method="post" enctype="multipart/form-data">
<input type="file" name="file" accept=".pdf,.docx,.txt">
<button type="submit">Analyze</button>
</form>
<p>Accepted formats: PDF, DOCX, TXT (max 16 MB).</p>
</div>
<div class="card">
<h2>Recent analyses ({total} total)</h2>
<table>
<tr><th>Title</th><th>Organization</th><th>File</th><th>Created</th></tr>
{rows}
</table>
</div>"#
    );
    layout("RFP Document Analyzer", &body)
}

pub fn analysis_page(
    id: Option<i64>,
    filename: &str,
    analysis: &AnalysisResult,
    insights: Option<&DocumentInsights>,
) -> String {
    let requirements: String = analysis
        .requirements
        .categories()
        .iter()
        .map(|(category, items)| format!("<h3>{}</h3>{}", category.label(), list(items)))
        .collect();

    let sections: String = analysis
        .application_sections
        .iter()
        .map(|s| format!("<li><strong>{}</strong>: {}</li>", escape(&s.title), escape(&s.description)))
        .collect();

    let insights_html = insights
        .map(|i| {
            format!(
                r#"<div class="card">
<h2>Document insights</h2>
<p>{words} words, about {minutes} min reading time.</p>
<h3>Currency amounts</h3>{amounts}
<h3>Dates</h3>{dates}
</div>"#,
                words = i.word_count,
                minutes = i.reading_time_minutes,
                amounts = list(&i.currency_amounts),
                dates = list(&i.dates),
            )
        })
        .unwrap_or_default();

    let prompt_link = id
        .map(|id| format!(r#"<p><a href="/generate_prompt?analysisId={id}">Draft a proposal prompt</a> (analysis #{id})</p>"#))
        .unwrap_or_default();

    let body = format!(
        r#"<h1>{title}</h1>
<p><strong>Organization:</strong> {org}<br>
<strong>Funding:</strong> {funding}<br>
<strong>File:</strong> {file}</p>
{prompt_link}
<div class="card"><h2>Requirements</h2>{requirements}</div>
<div class="card"><h2>Application sections</h2><ol>{sections}</ol></div>
<div class="card"><h2>Success tips</h2>{tips}</div>
{insights_html}"#,
        title = escape(&analysis.title),
        org = escape(&analysis.organization),
        funding = escape(&analysis.funding_amount),
        file = escape(filename),
        tips = list(&analysis.success_tips),
    );
    layout(&analysis.title, &body)
}

pub fn prompt_page(form: &FormData, errors: &FormErrors, prompt: Option<&str>) -> String {
    let field_errors = |field: &str| -> String {
        errors
            .get(field)
            .map(|messages| {
                messages
                    .iter()
                    .map(|m| format!(r#"<div class="error">{}</div>"#, escape(m)))
                    .collect()
            })
            .unwrap_or_default()
    };

    let prompt_html = prompt
        .map(|p| format!(r#"<div class="card"><h2>Generated prompt</h2><pre>{}</pre></div>"#, escape(p)))
        .unwrap_or_default();

    let body = format!(
        r#"<h1>Prompt Generator</h1>
<div class="card">
<form action="/generate_prompt" method="post">
<label for="orgName">Organization name</label>
<input type="text" id="orgName" name="orgName" value="{org}">
{org_errors}
<label for="mission">Mission statement</label>
<textarea id="mission" name="mission" rows="4">{mission}</textarea>
{mission_errors}
<label for="fundingAmount">Funding amount requested</label>
<input type="text" id="fundingAmount" name="fundingAmount" value="{funding}">
{funding_errors}
<label for="analysisId">Analysis id (optional)</label>
<input type="text" id="analysisId" name="analysisId" value="{analysis_id}">
<p><button type="submit">Generate prompt</button></p>
</form>
</div>
{prompt_html}"#,
        org = escape(&form.org_name),
        org_errors = field_errors("orgName"),
        mission = escape(&form.mission),
        mission_errors = field_errors("mission"),
        funding = escape(&form.funding_amount),
        funding_errors = field_errors("fundingAmount"),
        analysis_id = escape(&form.analysis_id),
    );
    layout("Prompt Generator", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        r#"<h1>{code}</h1><div class="card"><p>{message}</p><p><a href="/">Back to the analyzer</a></p></div>"#,
        code = status,
        message = escape(message),
    );
    layout("Error", &body)
}
