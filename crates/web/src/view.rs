//! Server-rendered home page.
//!
//! Renders a complete HTML document from a plain data object; all dynamic
//! values pass through [`escape`].

use std::fmt::Write;

use lum_common::types::{DailyResult, DurationStats, Winner, WinnerTally};

/// Everything the home page needs, assembled by the route handler.
pub struct IndexPage {
    pub title: String,
    pub today: String,
    pub winner: Option<Winner>,
    pub partner_a_name: String,
    pub partner_b_name: String,
    pub tallies: Vec<WinnerTally>,
    pub history: Vec<DailyResult>,
    pub duration: DurationStats,
}

impl IndexPage {
    fn name_of(&self, winner: Winner) -> &str {
        match winner {
            Winner::Nico => &self.partner_a_name,
            Winner::Nena => &self.partner_b_name,
        }
    }
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:40rem;margin:2rem auto;padding:0 1rem;color:#222}\
h1{color:#c0392b}\
section{margin-bottom:2rem}\
button{font-size:1rem;padding:.5rem 1.25rem;margin-right:.5rem;cursor:pointer}\
input[name=note]{padding:.5rem;width:14rem}\
table{border-collapse:collapse;width:100%}\
th,td{text-align:left;padding:.25rem .75rem .25rem 0;border-bottom:1px solid #ddd}\
.empty{color:#777}";

/// Render the home page.
pub fn render_index(page: &IndexPage) -> String {
    let mut html = String::with_capacity(4096);

    let _ = write!(
        html,
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n\
         <h1>{title}</h1>\n",
        title = escape(&page.title),
    );

    render_today(&mut html, page);
    render_score(&mut html, page);
    render_history(&mut html, page);

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_today(html: &mut String, page: &IndexPage) {
    let _ = write!(
        html,
        "<section class=\"today\">\n<h2>Today &middot; {}</h2>\n",
        escape(&page.today)
    );

    match page.winner {
        Some(winner) => {
            let _ = write!(
                html,
                "<p class=\"winner\">{} won today.</p>\n",
                escape(page.name_of(winner))
            );
        }
        None => {
            html.push_str("<p class=\"empty\">No winner recorded yet.</p>\n");
        }
    }

    let _ = write!(
        html,
        "<form method=\"post\" action=\"/today\">\n\
         <button type=\"submit\" name=\"winner\" value=\"{a_token}\">{a}</button>\n\
         <button type=\"submit\" name=\"winner\" value=\"{b_token}\">{b}</button>\n\
         <input type=\"text\" name=\"note\" placeholder=\"note (optional)\" maxlength=\"200\">\n\
         </form>\n</section>\n",
        a_token = Winner::Nico.token(),
        b_token = Winner::Nena.token(),
        a = escape(&page.partner_a_name),
        b = escape(&page.partner_b_name),
    );
}

fn render_score(html: &mut String, page: &IndexPage) {
    html.push_str("<section class=\"score\">\n<h2>Score</h2>\n");

    if page.tallies.is_empty() {
        html.push_str("<p class=\"empty\">No wins recorded yet.</p>\n");
    } else {
        html.push_str("<ul>\n");
        for tally in &page.tallies {
            let _ = write!(
                html,
                "<li>{}: {} wins</li>\n",
                escape(page.name_of(tally.winner)),
                tally.count
            );
        }
        html.push_str("</ul>\n");
    }

    let d = &page.duration;
    let _ = write!(
        html,
        "<p class=\"duration\">Together since {start}: {years} years, {days} days, \
         {hours:02}:{minutes:02}:{seconds:02} &mdash; {total} days in total.</p>\n</section>\n",
        start = escape(&d.start_date),
        years = d.breakdown.years,
        days = d.breakdown.days,
        hours = d.breakdown.hours,
        minutes = d.breakdown.minutes,
        seconds = d.breakdown.seconds,
        total = d.totals.days,
    );
}

fn render_history(html: &mut String, page: &IndexPage) {
    html.push_str("<section class=\"history\">\n<h2>History</h2>\n");

    if page.history.is_empty() {
        html.push_str("<p class=\"empty\">Nothing recorded yet.</p>\n</section>\n");
        return;
    }

    html.push_str(
        "<table>\n<thead><tr><th>Date</th><th>Winner</th><th>Note</th></tr></thead>\n<tbody>\n",
    );
    for row in &page.history {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&row.date),
            escape(page.name_of(row.winner)),
            escape(row.note.as_deref().unwrap_or("")),
        );
    }
    html.push_str("</tbody>\n</table>\n</section>\n");
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
