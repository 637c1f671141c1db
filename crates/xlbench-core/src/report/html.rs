// Dweve XLBench - Cross-Language Benchmark Harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HTML export of benchmark reports.
//!
//! Pages are plain string-built HTML with one embedded stylesheet. The
//! summary page links to one page per benchmark; each benchmark page
//! links back.

use super::{ExtractedBenchmark, SummaryRow};
use crate::error::{HarnessError, Result};
use crate::layout::{numbered, Layout};
use crate::size::Size;
use crate::stats;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn fmt_secs(value: Option<f64>) -> String {
    match value {
        Some(t) => format!("{:.4}", t),
        None => "n/a".to_string(),
    }
}

fn html_head(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n",
        escape(title),
        include_str!("styles.css")
    )
}

const HTML_FOOT: &str = "</body>\n</html>\n";

/// Renders one benchmark's report page into its site directory.
pub fn render_benchmark_page(layout: &Layout, bench: &ExtractedBenchmark) -> Result<()> {
    let spec = bench.spec;
    let mut html = html_head(spec.title);

    html.push_str("<p class=\"nav\"><a href=\"../index.html\">&larr; All benchmarks</a></p>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(spec.title)));
    html.push_str(&format!(
        "<pre class=\"description\">{}</pre>\n",
        escape(spec.description)
    ));

    html.push_str("<h2>Problem sizes</h2>\n<ul>\n");
    for size in Size::ALL {
        html.push_str(&format!(
            "<li><strong>{}</strong>: {}</li>\n",
            size,
            escape(&spec.size_description(size))
        ));
    }
    html.push_str("</ul>\n");

    html.push_str("<h2>Median runtimes of size L [s]</h2>\n<table>\n<tr><th>Implementation</th>");
    for stage in spec.stages {
        html.push_str(&format!("<th>{}</th>", escape(stage)));
    }
    html.push_str("<th>Control output</th></tr>\n");

    for (entry, runs) in &bench.entries {
        html.push_str(&format!("<tr><td>{}</td>", escape(&entry.label())));
        for stage in spec.stages {
            let median = stats::median(&runs.samples_of_size(spec, stage, Size::L));
            html.push_str(&format!("<td class=\"num\">{}</td>", fmt_secs(median)));
        }
        let control = runs
            .latest_control(Size::L)
            .map(|lines| lines.join(", "))
            .unwrap_or_default();
        html.push_str(&format!("<td>{}</td></tr>\n", escape(&control)));
    }
    html.push_str("</table>\n");

    html.push_str("<h2>Implementations</h2>\n<table>\n<tr><th>Implementation</th><th>Description</th><th>Source</th></tr>\n");
    for (entry, _) in &bench.entries {
        let description = entry.metadata.description.clone().unwrap_or_default();
        let source = match entry.source_url(layout) {
            // Pages live two levels below the harness root.
            Some(url) => format!(
                "<a href=\"../../{}\">{}</a>",
                escape(&url),
                escape(url.rsplit('/').next().unwrap_or(&url))
            ),
            None => String::new(),
        };
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&entry.label()),
            escape(&description),
            source
        ));
    }
    html.push_str("</table>\n");
    html.push_str(HTML_FOOT);

    let path = layout.benchmark_index_html(spec);
    std::fs::write(&path, html).map_err(|e| HarnessError::io(&path, e))
}

/// Renders the top-level summary page.
pub fn render_summary_page(
    layout: &Layout,
    benchmarks: &[ExtractedBenchmark],
    rows: &[SummaryRow],
) -> Result<()> {
    let mut html = html_head("Cross-Language Benchmarks");

    html.push_str("<h1>Cross-Language Benchmarks</h1>\n");
    html.push_str(&format!(
        "<p>Last update: {}</p>\n",
        chrono::Local::now().format("%Y-%m-%d")
    ));

    html.push_str("<h2>Benchmarks</h2>\n<ul>\n");
    for bench in benchmarks {
        html.push_str(&format!(
            "<li><a href=\"{}/index.html\">{}</a></li>\n",
            numbered(bench.spec.id, bench.spec.name),
            escape(bench.spec.title)
        ));
    }
    html.push_str("</ul>\n");

    html.push_str(
        "<h2>Summary</h2>\n<p>Median <em>Total</em> runtime of the largest size, relative to the fastest implementation per benchmark.</p>\n",
    );
    html.push_str(
        "<table>\n<tr><th>Benchmark</th><th>Implementation</th><th>Time [s]</th><th>Relative</th><th>Rank</th></tr>\n",
    );
    let mut sorted: Vec<&SummaryRow> = rows.iter().collect();
    sorted.sort_by(|a, b| (&a.benchmark, a.rank).cmp(&(&b.benchmark, b.rank)));
    for row in sorted {
        let label = if row.url.is_empty() {
            escape(&row.label)
        } else {
            // The summary page lives one level below the harness root.
            format!("<a href=\"../{}\">{}</a>", escape(&row.url), escape(&row.label))
        };
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"num\">{:.4}</td><td class=\"num\">{:.2}</td><td class=\"num\">{}</td></tr>\n",
            escape(&row.benchmark),
            label,
            row.time,
            row.relative,
            row.rank
        ));
    }
    html.push_str("</table>\n");
    html.push_str(HTML_FOOT);

    let path = layout.summary_index_html();
    std::fs::write(&path, html).map_err(|e| HarnessError::io(&path, e))
}
