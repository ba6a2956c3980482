use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use crate::record::{or_not_available, JobDetails, JobRecord};

pub const CARD_SELECTOR: &str = ".JobCard__card___22xP3";
pub const DETAIL_SEPARATOR: &str = " | ";

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "footer", "form", "h1",
    "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section",
    "table", "tr", "ul",
];
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template"];

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Text of an element roughly as a browser renders it: runs of ASCII
/// whitespace collapse (non-breaking spaces are kept), block elements and
/// `<br>` break lines, blank lines are dropped.
pub fn inner_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_text(element, &mut raw);
    raw.lines()
        .map(|line| {
            line.split(|c: char| c.is_ascii_whitespace())
                .filter(|word| !word.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                for c in text.chars() {
                    out.push(if c.is_ascii_whitespace() { ' ' } else { c });
                }
            }
            Node::Element(el) => {
                let name = el.name();
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                if SKIPPED_TAGS.contains(&name) {
                    continue;
                }
                let block = BLOCK_TAGS.contains(&name);
                if block {
                    out.push('\n');
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    push_text(child_el, out);
                }
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

/// Selectors for one job card on a search results page.
pub struct ListingExtractor {
    card: Selector,
    company_name: Selector,
    job_title: Selector,
    location: Selector,
    employment_type: Selector,
    seniority: Selector,
    category: Selector,
    skills_matched: Selector,
    applications: Selector,
    posting_date: Selector,
    salary_range: Selector,
    salary_type: Selector,
    logo: Selector,
}

impl ListingExtractor {
    pub fn new() -> Result<Self> {
        Ok(ListingExtractor {
            card: selector(CARD_SELECTOR)?,
            company_name: selector(".JobCard__job-title-flex___2R-sW p.f6.fw6")?,
            job_title: selector(r#"[data-testid="job-card__job-title"]"#)?,
            location: selector(r#"[data-testid="job-card__location"]"#)?,
            employment_type: selector(r#"[data-testid="job-card__employment-type"]"#)?,
            seniority: selector(r#"[data-testid="job-card__seniority"]"#)?,
            category: selector(r#"[data-testid="job-card__category"]"#)?,
            skills_matched: selector(r#"[data-testid="skill-matched-desc"]"#)?,
            applications: selector(r#"[data-testid="job-card__num-of-applications"]"#)?,
            posting_date: selector(r#"[data-cy="job-card-date-info"]"#)?,
            salary_range: selector(r#"[data-testid="salary-range"]"#)?,
            salary_type: selector(r#"[data-testid="salary-type"]"#)?,
            logo: selector(".JobCard__image___qnJmz img")?,
        })
    }

    /// Every card on the page, in document order.
    pub fn extract_page(&self, html: &str, config: &ScrapeConfig) -> Vec<JobRecord> {
        let document = Html::parse_document(html);
        document
            .select(&self.card)
            .map(|card| self.extract_card(card, config))
            .collect()
    }

    pub fn extract_card(&self, card: ElementRef<'_>, config: &ScrapeConfig) -> JobRecord {
        let text = |sel: &Selector| or_not_available(first_text(card, sel));

        JobRecord {
            company_name: text(&self.company_name),
            job_title: text(&self.job_title),
            job_url: config.job_url(card.value().attr("href")),
            location: text(&self.location),
            employment_type: text(&self.employment_type),
            seniority: text(&self.seniority),
            category: text(&self.category),
            skills_matched: text(&self.skills_matched),
            applications: text(&self.applications),
            posting_date: text(&self.posting_date),
            salary_range: or_not_available(
                first_text(card, &self.salary_range).map(|s| s.replace('\n', " ")),
            ),
            salary_type: text(&self.salary_type),
            logo_url: or_not_available(first_attr(card, &self.logo, "src")),
            details: None,
        }
    }
}

/// Selectors for the fields of a job detail page.
pub struct DetailExtractor {
    job_id: Selector,
    employment_type: Selector,
    seniority: Selector,
    experience: Selector,
    categories: Selector,
    salary_range: Selector,
    salary_type: Selector,
    applications: Selector,
    posting_date: Selector,
    closing_date: Selector,
}

impl DetailExtractor {
    pub fn new() -> Result<Self> {
        Ok(DetailExtractor {
            job_id: selector(r#"span[data-testid="job-details-info-job-post-id"]"#)?,
            employment_type: selector(r#"p[data-testid="job-details-info-employment-type"]"#)?,
            seniority: selector(r#"p[data-testid="job-details-info-seniority"]"#)?,
            experience: selector(r#"p[data-testid="job-details-info-min-experience"]"#)?,
            categories: selector(r#"p[data-testid="job-details-info-job-categories"]"#)?,
            salary_range: selector(r#"span[data-testid="salary-range"]"#)?,
            salary_type: selector(r#"span[data-testid="salary-type"]"#)?,
            applications: selector(r#"span[data-testid="job-details-info-num-of-applications"]"#)?,
            posting_date: selector(r#"span[data-testid="job-details-info-last-posted-date"]"#)?,
            closing_date: selector(r#"span[data-testid="job-details-info-job-expiry-date"]"#)?,
        })
    }

    pub fn extract(&self, html: &str) -> JobDetails {
        let document = Html::parse_document(html);
        let root = document.root_element();
        let joined = |sel: &Selector| or_not_available(joined_text(root, sel));

        JobDetails {
            job_id: joined(&self.job_id),
            employment_type: joined(&self.employment_type),
            seniority: joined(&self.seniority),
            experience: joined(&self.experience),
            categories: joined(&self.categories),
            salary_range: joined(&self.salary_range),
            salary_type: joined(&self.salary_type),
            applications: joined(&self.applications),
            posting_date: joined(&self.posting_date),
            closing_date: joined(&self.closing_date),
        }
    }
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(inner_text)
}

fn first_attr(scope: ElementRef<'_>, sel: &Selector, attr: &str) -> Option<String> {
    scope
        .select(sel)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}

/// `None` when nothing matches, otherwise all matches joined in document order.
fn joined_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let texts: Vec<String> = scope.select(sel).map(inner_text).collect();
    if texts.is_empty() {
        None
    } else {
        Some(texts.join(DETAIL_SEPARATOR))
    }
}
