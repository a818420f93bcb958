//! Page rendering - the search form plus one result panel
//!
//! Templates are compiled into the binary and auto-escaped, so anything the
//! user typed is safe to echo back in the result sentences.

use minijinja::{Environment, context};
use serde::Serialize;
use crate::Result;
use crate::query::LookupOutcome;
use crate::request::LookupRequest;
use crate::target::TargetHit;
use super::options::{ScoreOption, score_options};

const PAGE_TEMPLATE: &str = "page.html";
const TABLE_TEMPLATE: &str = "result_table.html";

const PAGE_SOURCE: &str = include_str!("../../templates/page.html");
const TABLE_SOURCE: &str = include_str!("../../templates/result_table.html");

/// Default document title
pub const DEFAULT_TITLE: &str = "miRNA Gene Targets";

/// Content of the results panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultPanel {
    /// Form not submitted yet
    Empty,
    Matches {
        gene_name: String,
        max_score: String,
        hits: Vec<TargetHit>,
    },
    NoMatches {
        gene_name: String,
        max_score: String,
    },
    GeneMissing {
        gene_name: String,
    },
    Error {
        message: String,
    },
}

impl ResultPanel {
    /// Map a finished lookup onto the panel shown for it
    pub fn from_lookup(request: &LookupRequest, result: Result<LookupOutcome>) -> Self {
        let gene_name = request.gene_name.clone();
        let max_score = request.max_score.clone();
        match result {
            Ok(LookupOutcome::Matches(hits)) => ResultPanel::Matches { gene_name, max_score, hits },
            Ok(LookupOutcome::NoMatches) => ResultPanel::NoMatches { gene_name, max_score },
            Ok(LookupOutcome::GeneMissing) => ResultPanel::GeneMissing { gene_name },
            Err(e) => ResultPanel::Error { message: e.to_string() },
        }
    }
}

/// Everything the page template needs
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub title: String,
    /// Form action; the path the search handler is mounted on
    pub action: String,
    pub score_options: Vec<ScoreOption>,
    pub panel: ResultPanel,
}

impl PageView {
    pub fn new(title: impl Into<String>, action: impl Into<String>, panel: ResultPanel) -> Self {
        Self {
            title: title.into(),
            action: action.into(),
            score_options: score_options(),
            panel,
        }
    }
}

/// Compiled page templates, built once at startup
#[derive(Debug, Clone)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE, PAGE_SOURCE)?;
        env.add_template(TABLE_TEMPLATE, TABLE_SOURCE)?;
        Ok(Self { env })
    }

    /// Render hits as a three-column table (id, name, score), in input order
    pub fn render_table(&self, hits: &[TargetHit]) -> Result<String> {
        let template = self.env.get_template(TABLE_TEMPLATE)?;
        Ok(template.render(context! { hits })?)
    }

    /// Render the whole document
    pub fn render_page(&self, view: &PageView) -> Result<String> {
        let template = self.env.get_template(PAGE_TEMPLATE)?;
        Ok(template.render(view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn render(panel: ResultPanel) -> String {
        Renderer::new()
            .unwrap()
            .render_page(&PageView::new(DEFAULT_TITLE, "/", panel))
            .unwrap()
    }

    fn right_panel(html: &str) -> &str {
        let start = html.find(r#"<div class="right-content">"#).unwrap();
        let end = html.rfind("</body>").unwrap();
        &html[start..end]
    }

    #[test]
    fn test_table_rows_keep_input_order() {
        let renderer = Renderer::new().unwrap();
        let hits = vec![TargetHit::new(1, "mirA", -0.2), TargetHit::new(2, "mirB", -0.5)];

        let table = renderer.render_table(&hits).unwrap();

        assert_eq!(table.matches(r#"<tr class="hit">"#).count(), 2);
        let first = table
            .find("<tr class=\"hit\"><td>1</td><td>mirA</td><td>-0.2</td></tr>")
            .unwrap();
        let second = table
            .find("<tr class=\"hit\"><td>2</td><td>mirB</td><td>-0.5</td></tr>")
            .unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_table_does_not_resort() {
        let renderer = Renderer::new().unwrap();
        let hits = vec![TargetHit::new(5, "weak", -0.1), TargetHit::new(6, "strong", -0.9)];

        let table = renderer.render_table(&hits).unwrap();
        assert!(table.find("weak").unwrap() < table.find("strong").unwrap());
    }

    #[test]
    fn test_table_headers() {
        let table = Renderer::new().unwrap().render_table(&[]).unwrap();
        assert!(table.contains("<th>mid</th><th>miRNA Name</th><th>Targeting Score</th>"));
        assert_eq!(table.matches(r#"<tr class="hit">"#).count(), 0);
    }

    #[test]
    fn test_empty_panel_renders_form_only() {
        let html = render(ResultPanel::Empty);

        assert!(html.contains("<title>miRNA Gene Targets</title>"));
        assert!(html.contains(r#"<form method="get" action="/">"#));
        assert!(html.contains(r#"name="gene_name""#));
        assert!(html.contains(r#"name="max_score""#));

        let panel = right_panel(&html)
            .trim_start_matches(r#"<div class="right-content">"#)
            .trim()
            .trim_end_matches("</div>")
            .trim();
        assert!(panel.is_empty(), "unexpected panel content: {panel}");
    }

    #[test]
    fn test_score_options_in_order() {
        let html = render(ResultPanel::Empty);

        let mut last = 0;
        for value in ["-0.1", "-0.2", "-0.3", "-0.4", "-0.5", "-0.6", "-0.7"] {
            let option = format!(r#"<option value="{value}">score ≤ {value}</option>"#);
            let at = html.find(&option).unwrap_or_else(|| panic!("missing {option}"));
            assert!(at > last);
            last = at;
        }
    }

    #[test]
    fn test_matches_panel() {
        let html = render(ResultPanel::Matches {
            gene_name: "A1CF".into(),
            max_score: "-0.3".into(),
            hits: vec![TargetHit::new(1, "mirA", -0.2), TargetHit::new(2, "mirB", -0.5)],
        });

        let panel = right_panel(&html);
        assert!(panel.contains("<h3>Results:</h3>"));
        assert!(panel.contains("Gene A1CF is targeted by 2 miRNAs with scores ≤ -0.3."));
        assert_eq!(panel.matches(r#"<tr class="hit">"#).count(), 2);
    }

    #[test]
    fn test_no_matches_panel_has_no_table() {
        let html = render(ResultPanel::NoMatches {
            gene_name: "TP53".into(),
            max_score: "-0.7".into(),
        });

        let panel = right_panel(&html);
        assert!(panel.contains("Gene TP53 is targeted by 0 miRNAs with scores ≤ -0.7."));
        assert!(!panel.contains("<table>"));
    }

    #[test]
    fn test_gene_missing_panel_is_styled_as_error() {
        let html = render(ResultPanel::GeneMissing { gene_name: "NOPE1".into() });
        assert!(right_panel(&html)
            .contains(r#"<p class="error">Gene NOPE1 does not exist in the miRNA database.</p>"#));
    }

    #[test]
    fn test_error_panel() {
        let request = LookupRequest::new("A1CF", "-0.3");
        let panel = ResultPanel::from_lookup(
            &request,
            Err(Error::Storage(rusqlite::Error::InvalidQuery)),
        );
        assert!(matches!(panel, ResultPanel::Error { .. }));

        let html = render(panel);
        assert!(right_panel(&html).contains(r#"<p class="error">Error: Storage error:"#));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let html = render(ResultPanel::GeneMissing {
            gene_name: "<script>alert(1)</script>".into(),
        });
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_from_lookup_maps_each_outcome() {
        let request = LookupRequest::new("A1CF", "-0.3");

        assert_eq!(
            ResultPanel::from_lookup(&request, Ok(LookupOutcome::NoMatches)),
            ResultPanel::NoMatches { gene_name: "A1CF".into(), max_score: "-0.3".into() }
        );
        assert_eq!(
            ResultPanel::from_lookup(&request, Ok(LookupOutcome::GeneMissing)),
            ResultPanel::GeneMissing { gene_name: "A1CF".into() }
        );
        let hits = vec![TargetHit::new(1, "mirA", -0.4)];
        assert_eq!(
            ResultPanel::from_lookup(&request, Ok(LookupOutcome::Matches(hits.clone()))),
            ResultPanel::Matches { gene_name: "A1CF".into(), max_score: "-0.3".into(), hits }
        );
    }
}
