//! HTML page assembly.
//!
//! The whole dashboard is one static page: a heading, an optional link to
//! the source code, and one section per chart with the SVG inlined. The
//! markup is built with maud, so every interpolated value is escaped except
//! the SVG documents, which are inserted verbatim.

use charts::{ChartSet, Theme, css_hex};
use maud::{DOCTYPE, PreEscaped, html};

pub const DEFAULT_TITLE: &str = "Movie Industry Analysis Dashboard";

/// Presentation settings for the page
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    pub title: String,
    /// Shown under the title as "Source code: <link>"
    pub source_url: Option<String>,
    pub theme: Theme,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            source_url: None,
            theme: Theme::monokai(),
        }
    }
}

/// One chart section of the page
struct Section<'a> {
    id: &'static str,
    heading: &'static str,
    description: &'static str,
    svg: &'a str,
}

/// Sections in display order.
fn sections(charts: &ChartSet) -> [Section<'_>; 5] {
    [
        Section {
            id: "films-per-year",
            heading: "Number of Films Released per Year",
            description: "This graph shows the distribution of films released each year, \
                          helping us understand industry production trends.",
            svg: &charts.films_per_year,
        },
        Section {
            id: "box-office-per-year",
            heading: "Total Box Office Revenue per Year",
            description: "This visualization displays the annual box office revenue, \
                          indicating overall market performance.",
            svg: &charts.box_office_per_year,
        },
        Section {
            id: "worldwide-gross-per-year",
            heading: "Worldwide Gross Revenue per Year",
            description: "This chart shows the global revenue trends, \
                          highlighting the international success of films.",
            svg: &charts.worldwide_gross_per_year,
        },
        Section {
            id: "top-directors",
            heading: "Top 3 Most Popular Directors",
            description: "These are the directors with the most films in the database, \
                          showcasing industry leaders.",
            svg: &charts.top_directors,
        },
        Section {
            id: "top-countries",
            heading: "Top Film Producing Countries",
            description: "This graph shows which countries are leading in film production.",
            svg: &charts.top_countries,
        },
    ]
}

fn stylesheet(theme: &Theme) -> String {
    let background = css_hex(theme.background);
    let text = css_hex(theme.text);
    let title = css_hex(theme.title);

    format!(
        "body {{ margin: 0; background-color: {background}; color: {text}; font-family: Lora, Georgia, serif; }}\n\
         main {{ padding: 20px; min-height: 100vh; display: flex; flex-direction: column; \
         align-items: center; justify-content: center; }}\n\
         h1 {{ text-align: center; color: {title}; margin-bottom: 30px; }}\n\
         h2, h3 {{ color: {title}; }}\n\
         h3.source {{ text-align: center; }}\n\
         a {{ color: {title}; }}\n\
         p {{ color: {text}; }}\n\
         section.chart {{ margin-bottom: 40px; max-width: 960px; width: 100%; }}\n\
         section.chart svg {{ width: 100%; height: auto; }}\n"
    )
}

/// Render the complete dashboard page.
pub fn render_page(charts: &ChartSet, options: &PageOptions) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (options.title) }
                style { (PreEscaped(stylesheet(&options.theme))) }
            }
            body {
                main {
                    h1 { (options.title) }
                    @if let Some(url) = &options.source_url {
                        h3.source {
                            "Source code: "
                            a href=(url) target="_blank" rel="noopener noreferrer" { (url) }
                        }
                    }
                    @for item in sections(charts) {
                        section.chart id=(item.id) {
                            h2 { (item.heading) }
                            p { (item.description) }
                            div.figure { (PreEscaped(item.svg)) }
                        }
                    }
                }
            }
        }
    };

    markup.into_string()
}
