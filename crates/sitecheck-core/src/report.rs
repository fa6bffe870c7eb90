//! Detail report formatting
//!
//! The report is a pure function of an [`AnalysisResult`]. Opening it
//! somewhere (a terminal modal, a browser tab) is left to thin adapters in
//! the app and TUI crates.

use crate::analysis::AnalysisResult;

/// Document title of the HTML report
pub const REPORT_TITLE: &str = "Website Analysis";

/// Heading shown at the top of every report
pub const REPORT_HEADING: &str = "Website Analysis Report";

/// Visual tone of a report row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTone {
    Plain,
    /// Affirmative styling (genuine status)
    Good,
    /// Negative styling (any other status)
    Bad,
}

/// A labelled line of the detail report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: String,
    pub tone: RowTone,
}

impl ReportRow {
    fn plain(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            tone: RowTone::Plain,
        }
    }
}

/// Build the report rows in display order
pub fn report_rows(result: &AnalysisResult) -> Vec<ReportRow> {
    let mut rows = vec![
        ReportRow::plain("URL", result.url_display()),
        ReportRow::plain("Domain Name", result.domain_display()),
        ReportRow::plain("IP Address", result.ip_display()),
        ReportRow::plain("Registration Date", result.registrar_date_display()),
    ];

    if let Some(age) = result.domain_age_display() {
        rows.push(ReportRow::plain("Domain Age", age));
    }

    rows.push(ReportRow::plain("Trust Score", result.trust_score_display()));
    rows.push(ReportRow {
        label: "Status",
        value: result.status_display().to_string(),
        tone: if result.is_genuine() {
            RowTone::Good
        } else {
            RowTone::Bad
        },
    });
    rows.push(ReportRow::plain("Reason", result.reason_display()));
    rows.push(ReportRow::plain("Purpose", result.purpose_display()));
    rows
}

/// Escape text for interpolation into HTML element content or attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const REPORT_STYLE: &str = "\
body { font-family: Arial, sans-serif; padding: 20px; background: #f8f8f8; }
.good { color: green; font-weight: bold; }
.bad { color: red; font-weight: bold; }
.box { background: white; padding: 20px; border-radius: 10px; box-shadow: 0 0 12px rgba(0,0,0,0.2); }";

/// Render the detail report as a standalone HTML document
///
/// Every backend-provided value is escaped before interpolation.
pub fn render_html(result: &AnalysisResult) -> String {
    let mut body = String::new();
    for row in report_rows(result) {
        let value = escape_html(&row.value);
        let value = match row.tone {
            RowTone::Plain => value,
            RowTone::Good => format!("<span class=\"good\">{value}</span>"),
            RowTone::Bad => format!("<span class=\"bad\">{value}</span>"),
        };
        body.push_str(&format!("    <p><b>{}:</b> {}</p>\n", row.label, value));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{REPORT_TITLE}</title>\n\
         <style>\n{REPORT_STYLE}\n</style>\n\
         </head>\n\
         <body>\n\
         <h2>{REPORT_HEADING}</h2>\n\
         <div class=\"box\">\n\
         {body}\
         </div>\n\
         </body>\n\
         </html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suspicious_sample() -> AnalysisResult {
        AnalysisResult {
            url: Some("a.com".into()),
            domain_name: Some("a.com".into()),
            ip: None,
            registrar_date: Some("2020-01-01".into()),
            domain_age_days: None,
            trust_score: Some(42.0),
            status: Some("Suspicious".into()),
            reason: Some("newly registered".into()),
            purpose: None,
            raw_body: None,
        }
    }

    fn row<'a>(rows: &'a [ReportRow], label: &str) -> &'a ReportRow {
        rows.iter()
            .find(|r| r.label == label)
            .unwrap_or_else(|| panic!("missing row {label}"))
    }

    #[test]
    fn test_rows_for_suspicious_sample() {
        let rows = report_rows(&suspicious_sample());
        assert_eq!(row(&rows, "IP Address").value, "Not Available");
        assert_eq!(row(&rows, "Purpose").value, "Not available");
        assert_eq!(row(&rows, "Trust Score").value, "42/100");
        assert_eq!(row(&rows, "Status").tone, RowTone::Bad);
        assert!(rows.iter().all(|r| r.label != "Domain Age"));
    }

    #[test]
    fn test_row_order() {
        let labels: Vec<_> = report_rows(&suspicious_sample())
            .iter()
            .map(|r| r.label)
            .collect();
        assert_eq!(
            labels,
            [
                "URL",
                "Domain Name",
                "IP Address",
                "Registration Date",
                "Trust Score",
                "Status",
                "Reason",
                "Purpose"
            ]
        );
    }

    #[test]
    fn test_genuine_status_is_good() {
        let result = AnalysisResult {
            status: Some("Genuine".into()),
            domain_age_days: Some(400),
            ..suspicious_sample()
        };
        let rows = report_rows(&result);
        assert_eq!(row(&rows, "Status").tone, RowTone::Good);
        assert_eq!(row(&rows, "Domain Age").value, "400 days");
    }

    #[test]
    fn test_html_for_suspicious_sample() {
        let html = render_html(&suspicious_sample());
        assert!(html.contains("<title>Website Analysis</title>"));
        assert!(html.contains("<p><b>IP Address:</b> Not Available</p>"));
        assert!(html.contains("<p><b>Purpose:</b> Not available</p>"));
        assert!(html.contains("<p><b>Trust Score:</b> 42/100</p>"));
        assert!(html.contains("<span class=\"bad\">Suspicious</span>"));
        assert!(!html.contains("class=\"good\">"));
    }

    #[test]
    fn test_html_escapes_backend_values() {
        let result = AnalysisResult {
            url: Some("<script>alert('x')</script>".into()),
            reason: Some("a & b \"quoted\"".into()),
            status: Some("<b>Genuine</b>".into()),
            ..Default::default()
        };
        let html = render_html(&result);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("a &amp; b &quot;quoted&quot;"));
        assert!(html.contains("<span class=\"bad\">&lt;b&gt;Genuine&lt;/b&gt;</span>"));
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("example.com/path?q=1"), "example.com/path?q=1");
        assert_eq!(escape_html(""), "");
    }
}
