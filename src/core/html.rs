use crate::core::report::{DetailExtra, ReportDocument};
use std::fmt::Write;

/// Print styling for the report page. `page-break-inside: avoid` keeps each
/// detail block on one page; `pre-wrap` on text blocks preserves embedded
/// newlines in customs details.
const STYLE: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; padding: 20px; }
.header { text-align: center; margin-bottom: 30px; padding-bottom: 20px; border-bottom: 3px solid #007bff; }
.header h1 { color: #333; font-size: 28px; margin-bottom: 5px; }
.header h2 { color: #666; font-size: 20px; margin-bottom: 10px; }
.report-info { background: #f8f9fa; padding: 15px; border-radius: 8px; margin-bottom: 20px; }
.report-info p { margin: 5px 0; color: #555; }
table { width: 100%; border-collapse: collapse; margin-bottom: 30px; }
th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
th { background-color: #007bff; color: white; font-weight: bold; }
tr:nth-child(even) { background-color: #f8f9fa; }
.shipment-details { page-break-inside: avoid; margin-bottom: 40px; border: 2px solid #007bff; border-radius: 8px; padding: 20px; }
.shipment-details h3 { color: #007bff; margin-bottom: 15px; padding-bottom: 10px; border-bottom: 2px solid #e9ecef; }
.detail-row { display: grid; grid-template-columns: 1fr 1fr; gap: 15px; margin-bottom: 10px; }
.detail-item { background: #f8f9fa; padding: 10px; border-radius: 5px; }
.detail-item strong { color: #007bff; display: block; margin-bottom: 5px; }
.text-block { grid-column: 1 / -1; margin-top: 10px; }
.text-block p { margin-top: 5px; white-space: pre-wrap; }
.stages-list { background: #e7f3ff; padding: 15px; border-radius: 5px; margin-top: 10px; }
.stages-list ol { list-style-position: inside; color: #333; }
.stages-list li { padding: 5px 0; }
.footer { text-align: center; margin-top: 30px; padding-top: 20px; border-top: 2px solid #ddd; color: #666; }
@media print { body { padding: 10px; } .shipment-details { page-break-inside: avoid; } }
";

/// Serializes a report document to a complete standalone HTML page. All text
/// drawn from record data is escaped here, so field content cannot break the
/// document structure.
pub fn render_html(doc: &ReportDocument) -> String {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(&doc.title));
    let _ = writeln!(out, "<style>\n{}</style>", STYLE);
    out.push_str("</head>\n<body>\n");

    out.push_str("<div class=\"header\">\n");
    let _ = writeln!(out, "<h1>{}</h1>", escape(super::report::COMPANY_NAME));
    let _ = writeln!(out, "<h2>{}</h2>", escape(&doc.title));
    out.push_str("</div>\n");

    out.push_str("<div class=\"report-info\">\n");
    let _ = writeln!(
        out,
        "<p><strong>Report date:</strong> {}</p>",
        doc.generated_at.format("%Y-%m-%d")
    );
    let _ = writeln!(
        out,
        "<p><strong>Shipment count:</strong> {}</p>",
        doc.record_count
    );
    out.push_str("</div>\n");

    out.push_str("<h3 class=\"section-title\">Shipment Summary</h3>\n<table>\n<thead>\n<tr>");
    for header in &doc.summary.headers {
        let _ = write!(out, "<th>{}</th>", escape(header));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in &doc.summary.rows {
        out.push_str("<tr>");
        for value in row {
            let _ = write!(out, "<td>{}</td>", escape(value));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");

    out.push_str("<h3 class=\"section-title\">Shipment Details</h3>\n");
    for detail in &doc.details {
        out.push_str("<div class=\"shipment-details\">\n");
        let _ = writeln!(out, "<h3>{}</h3>", escape(&detail.heading));

        for pair in &detail.rows {
            out.push_str("<div class=\"detail-row\">\n");
            for cell in pair {
                let _ = writeln!(
                    out,
                    "<div class=\"detail-item\"><strong>{}:</strong> {}</div>",
                    escape(&cell.label),
                    escape(&cell.value)
                );
            }
            out.push_str("</div>\n");
        }

        for extra in &detail.extras {
            match extra {
                DetailExtra::TextBlock { label, text } => {
                    let _ = writeln!(
                        out,
                        "<div class=\"detail-item text-block\"><strong>{}:</strong><p>{}</p></div>",
                        escape(label),
                        escape(text)
                    );
                }
                DetailExtra::Stages(stages) => {
                    out.push_str("<div class=\"stages-list\"><strong>Stages:</strong>\n<ol>\n");
                    for stage in stages {
                        let _ = writeln!(out, "<li>{}</li>", escape(stage));
                    }
                    out.push_str("</ol>\n</div>\n");
                }
            }
        }

        out.push_str("</div>\n");
    }

    out.push_str("<div class=\"footer\">\n");
    let _ = writeln!(out, "<p>{}</p>", escape(&doc.footer));
    let _ = writeln!(
        out,
        "<p>{}</p>",
        doc.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    out.push_str("</div>\n</body>\n</html>\n");

    out
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
