//! HTML extraction of topics and repositories
//!
//! Each entity is bound in a single pass over its own subtree, so every
//! record carries fields from the same card. Cards missing a field are
//! skipped rather than shifting the remaining rows.
//!
//! # Topics page
//!
//! ```text
//! a.no-underline.flex-1.d-flex.flex-column[href]      one card, href = topic link
//!   p.f3.lh-condensed.mb-0.mt-1.Link--primary         title
//!   p.f5.color-fg-muted.mb-0.mt-1                     description
//! ```
//!
//! # Topic page
//!
//! ```text
//! h3.f3.color-fg-muted.text-normal.lh-condensed       one repository
//!   a (1st)                                           username
//!   a (2nd)[href]                                     repository name, repo link
//! span#repo-stars-counter-star                        stars, in the same card
//! ```

use crate::crawler::records::{RepositoryEntry, Topic};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

const TOPIC_CARD: &str = "a.no-underline.flex-1.d-flex.flex-column";
const TOPIC_TITLE: &str = "p.f3.lh-condensed.mb-0.mt-1.Link--primary";
const TOPIC_DESCRIPTION: &str = "p.f5.color-fg-muted.mb-0.mt-1";

const REPO_HEADING: &str = "h3.f3.color-fg-muted.text-normal.lh-condensed";
const REPO_LINK: &str = "a";
const REPO_STARS: &str = "span#repo-stars-counter-star";

/// Extracts every complete topic card from a topics page, in document order
///
/// # Example
///
/// ```
/// use github_topics_scraper::crawler::extract_topics;
/// use url::Url;
///
/// let html = r#"
///     <a class="no-underline flex-1 d-flex flex-column" href="/topics/rust">
///       <p class="f3 lh-condensed mb-0 mt-1 Link--primary">Rust</p>
///       <p class="f5 color-fg-muted mb-0 mt-1">A systems language.</p>
///     </a>"#;
/// let base_url = Url::parse("https://github.com/").unwrap();
/// let topics = extract_topics(html, &base_url);
/// assert_eq!(topics[0].link, "https://github.com/topics/rust");
/// ```
pub fn extract_topics(html: &str, base_url: &Url) -> Vec<Topic> {
    let (Ok(card_selector), Ok(title_selector), Ok(description_selector)) = (
        Selector::parse(TOPIC_CARD),
        Selector::parse(TOPIC_TITLE),
        Selector::parse(TOPIC_DESCRIPTION),
    ) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let mut topics = Vec::new();

    for card in document.select(&card_selector) {
        let title = first_text(card, &title_selector);
        let description = first_text(card, &description_selector);
        let link = card
            .value()
            .attr("href")
            .and_then(|href| resolve_link(href, base_url));

        match (title, description, link) {
            (Some(title), Some(description), Some(link)) => topics.push(Topic {
                title,
                description,
                link,
            }),
            (title, _, _) => debug!("Skipping incomplete topic card: {:?}", title),
        }
    }

    topics
}

/// Extracts every complete repository entry from a topic page, in document order
pub fn extract_repositories(html: &str, base_url: &Url) -> Vec<RepositoryEntry> {
    let (Ok(heading_selector), Ok(link_selector), Ok(stars_selector)) = (
        Selector::parse(REPO_HEADING),
        Selector::parse(REPO_LINK),
        Selector::parse(REPO_STARS),
    ) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let mut repositories = Vec::new();

    for heading in document.select(&heading_selector) {
        let mut links = heading.select(&link_selector);
        let owner = links.next();
        let name = links.next();

        let username = owner.map(element_text).filter(|s| !s.is_empty());
        let repository = name.map(element_text).filter(|s| !s.is_empty());
        let repo_url = name
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| resolve_link(href, base_url));
        let stars = card_stars(heading, &heading_selector, &stars_selector);

        match (username, repository, stars, repo_url) {
            (Some(username), Some(repository), Some(stars), Some(repo_url)) => {
                repositories.push(RepositoryEntry {
                    username,
                    repository,
                    stars,
                    repo_url,
                })
            }
            (_, repository, _, _) => {
                debug!("Skipping incomplete repository card: {:?}", repository)
            }
        }
    }

    repositories
}

/// Finds the star counter belonging to the same card as `heading`
///
/// Walks up from the heading to the closest ancestor holding a star counter,
/// giving up once an ancestor spans more than one repository heading.
fn card_stars(
    heading: ElementRef<'_>,
    heading_selector: &Selector,
    stars_selector: &Selector,
) -> Option<String> {
    for ancestor in heading.ancestors().filter_map(ElementRef::wrap) {
        if ancestor.select(heading_selector).nth(1).is_some() {
            return None;
        }
        if let Some(stars) = ancestor.select(stars_selector).next() {
            return Some(element_text(stars)).filter(|s| !s.is_empty());
        }
    }
    None
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .filter(|s| !s.is_empty())
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Resolves an href to an absolute HTTP(S) URL
///
/// Returns None for empty hrefs, fragment-only links, and anything that does
/// not resolve to http or https.
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://github.com/").unwrap()
    }

    fn topic_card(href: &str, title: &str, description: &str) -> String {
        format!(
            r#"<li class="py-4 border-bottom d-flex flex-justify-between">
                 <a class="no-underline flex-1 d-flex flex-column" href="{href}">
                   <p class="f3 lh-condensed mb-0 mt-1 Link--primary">
                     {title}
                   </p>
                   <p class="f5 color-fg-muted mb-0 mt-1">{description}</p>
                 </a>
               </li>"#
        )
    }

    fn repo_card(owner: &str, name: &str, stars: &str) -> String {
        format!(
            r#"<article class="border rounded color-shadow-small color-bg-subtle my-4">
                 <div class="d-flex flex-justify-between flex-items-start flex-wrap gap-2 my-3 px-3">
                   <div class="d-flex flex-1">
                     <h3 class="f3 color-fg-muted text-normal lh-condensed">
                       <a href="/{owner}">
                         {owner}
                       </a> /
                       <a href="/{owner}/{name}" class="text-bold wb-break-word">
                         {name}
                       </a>
                     </h3>
                   </div>
                   <div class="d-flex">
                     <a class="btn btn-sm" href="/login">
                       Star
                       <span id="repo-stars-counter-star" class="Counter js-social-count">{stars}</span>
                     </a>
                   </div>
                 </div>
               </article>"#
        )
    }

    #[test]
    fn test_extract_topics_in_document_order() {
        let html = format!(
            "<html><body><ul>{}{}</ul></body></html>",
            topic_card("/topics/3d", "3D", "3D refers to the use of 3D computer graphics."),
            topic_card("/topics/ajax", "Ajax", "Ajax is a technique for creating interactive web applications."),
        );

        let topics = extract_topics(&html, &base_url());

        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].title, "3D");
        assert_eq!(
            topics[0].description,
            "3D refers to the use of 3D computer graphics."
        );
        assert_eq!(topics[0].link, "https://github.com/topics/3d");
        assert_eq!(topics[1].title, "Ajax");
    }

    #[test]
    fn test_topic_fields_are_trimmed_and_non_empty() {
        let html = topic_card("/topics/rust", "  Rust  ", "\n  Fast and safe.\n ");
        let topics = extract_topics(&html, &base_url());

        assert_eq!(topics.len(), 1);
        for topic in &topics {
            for field in [&topic.title, &topic.description, &topic.link] {
                assert_eq!(field.trim(), field.as_str());
                assert!(!field.is_empty());
            }
        }
    }

    #[test]
    fn test_incomplete_topic_card_is_skipped() {
        let html = format!(
            "{}{}{}",
            topic_card("/topics/a", "A", "first"),
            r#"<a class="no-underline flex-1 d-flex flex-column" href="/topics/b">
                 <p class="f3 lh-condensed mb-0 mt-1 Link--primary">B</p>
               </a>"#,
            topic_card("/topics/c", "C", "third"),
        );

        let topics = extract_topics(&html, &base_url());

        let titles: Vec<_> = topics.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(topics[1].description, "third");
    }

    #[test]
    fn test_extract_topics_from_unrelated_page() {
        let html = r#"<html><body><a href="/topics/rust">Rust</a></body></html>"#;
        assert!(extract_topics(html, &base_url()).is_empty());
    }

    #[test]
    fn test_extract_repositories() {
        let html = format!(
            "<html><body>{}{}</body></html>",
            repo_card("mrdoob", "three.js", "94.8k"),
            repo_card("pmndrs", "react-three-fiber", "25.1k"),
        );

        let repos = extract_repositories(&html, &base_url());

        assert_eq!(repos.len(), 2);
        assert_eq!(
            repos[0],
            RepositoryEntry {
                username: "mrdoob".to_string(),
                repository: "three.js".to_string(),
                stars: "94.8k".to_string(),
                repo_url: "https://github.com/mrdoob/three.js".to_string(),
            }
        );
        assert_eq!(repos[1].username, "pmndrs");
        assert_eq!(repos[1].stars, "25.1k");
    }

    #[test]
    fn test_repository_without_stars_does_not_borrow_neighbours() {
        let starless = r#"<article>
              <h3 class="f3 color-fg-muted text-normal lh-condensed">
                <a href="/ghost">ghost</a> / <a href="/ghost/nostars">nostars</a>
              </h3>
            </article>"#;
        let html = format!(
            "<html><body>{}{}{}</body></html>",
            repo_card("a", "first", "1"),
            starless,
            repo_card("c", "third", "3"),
        );

        let repos = extract_repositories(&html, &base_url());

        let names: Vec<_> = repos.iter().map(|r| r.repository.as_str()).collect();
        assert_eq!(names, vec!["first", "third"]);
        assert_eq!(repos[1].stars, "3");
    }

    #[test]
    fn test_extract_repositories_empty_page() {
        let html = "<html><body><p>No repositories</p></body></html>";
        assert!(extract_repositories(html, &base_url()).is_empty());
    }

    #[test]
    fn test_resolve_link() {
        let base = base_url();
        assert_eq!(
            resolve_link("/topics/3d", &base),
            Some("https://github.com/topics/3d".to_string())
        );
        assert_eq!(
            resolve_link("https://example.com/x", &base),
            Some("https://example.com/x".to_string())
        );
        assert_eq!(resolve_link("#readme", &base), None);
        assert_eq!(resolve_link("  ", &base), None);
        assert_eq!(resolve_link("javascript:void(0)", &base), None);
        assert_eq!(resolve_link("mailto:someone@example.com", &base), None);
    }
}
