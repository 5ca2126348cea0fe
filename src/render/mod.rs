//! HTML page rendering.
//!
//! The page templates are embedded in the binary and compiled once at startup
//! into a [`Pages`] value that request handlers share read-only.

mod template;

pub use template::TemplateError;
use template::{Template, vars};

use crate::error::GpicError;
use crate::grid::GridLayout;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::path::Path;
use std::sync::LazyLock;
use url::Url;

const REVIEW_PAGE: &str = include_str!("../../templates/similar.html");
const REVIEW_ITEM: &str = include_str!("../../templates/similar-item.html");
const COMPARE_PAGE: &str = include_str!("../../templates/compare-similar.html");
const COMPARE_CELL: &str = include_str!("../../templates/compare-cell.html");

static LOCAL_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost/").expect("static base URL parses"));

impl From<TemplateError> for GpicError {
    fn from(err: TemplateError) -> Self {
        GpicError::TemplateError(err.to_string())
    }
}

/// Compiled page templates.
#[derive(Debug, Clone)]
pub struct Pages {
    review: Template,
    review_item: Template,
    compare: Template,
    compare_cell: Template,
}

impl Pages {
    /// Compile the embedded templates.
    pub fn compile() -> Result<Self, TemplateError> {
        Ok(Self {
            review: Template::compile(REVIEW_PAGE)?,
            review_item: Template::compile(REVIEW_ITEM)?,
            compare: Template::compile(COMPARE_PAGE)?,
            compare_cell: Template::compile(COMPARE_CELL)?,
        })
    }

    /// Render the review page listing `pictures` found under `full_path`.
    pub fn render_review(
        &self,
        full_path: &Path,
        pictures: &[String],
    ) -> Result<String, TemplateError> {
        let mut items = String::new();
        for name in pictures {
            items.push_str(&self.review_item.render(&vars([
                ("name", encode_double_quoted_attribute(name).into_owned()),
                ("label", encode_text(name).into_owned()),
                ("src", encode_double_quoted_attribute(&static_href(name)).into_owned()),
                (
                    "anchor",
                    encode_double_quoted_attribute(&anchor_id(name)).into_owned(),
                ),
            ]))?);
        }

        self.review.render(&vars([
            ("title", encode_text(&full_path.display().to_string()).into_owned()),
            ("count", pictures.len().to_string()),
            ("pictures", items),
        ]))
    }

    /// Render the comparison page for `pictures` in the given order.
    pub fn render_compare(&self, pictures: &[String]) -> Result<String, TemplateError> {
        let layout = GridLayout::for_count(pictures.len());

        let mut cells = String::new();
        for (index, name) in pictures.iter().enumerate() {
            cells.push_str(&self.compare_cell.render(&vars([
                ("index", index.to_string()),
                ("name", encode_double_quoted_attribute(name).into_owned()),
                ("label", encode_text(name).into_owned()),
                ("src", encode_double_quoted_attribute(&static_href(name)).into_owned()),
            ]))?);
        }

        self.compare.render(&vars([
            ("count", pictures.len().to_string()),
            ("grid", layout.capacity().to_string()),
            ("columns", layout.columns().to_string()),
            ("rows", layout.rows().to_string()),
            ("cells", cells),
        ]))
    }
}

/// Element id of a picture's container on the review page.
pub fn anchor_id(file_name: &str) -> String {
    format!("{}-container", file_name)
}

/// URL path serving `file_name` from the root folder, percent-encoded.
pub fn static_href(file_name: &str) -> String {
    let mut url = LOCAL_BASE.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push("static").push(file_name);
    }
    url.path().to_string()
}

/// Path (with fragment) of the review page, scrolled to `kept` when given.
pub fn review_location(kept: Option<&str>) -> String {
    let mut url = LOCAL_BASE.clone();
    url.set_path("/similar");
    url.set_fragment(kept.map(anchor_id).as_deref());
    url[url::Position::BeforePath..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn embedded_templates_compile() {
        assert!(Pages::compile().is_ok());
    }

    #[test]
    fn review_page_lists_every_picture() {
        let pages = Pages::compile().unwrap();
        let html = pages
            .render_review(Path::new("/photos"), &names(&["x.jpg", "z.png"]))
            .unwrap();

        assert!(html.contains("/photos"));
        assert!(html.contains(r#"id="x.jpg-container""#));
        assert!(html.contains(r#"src="/static/z.png""#));
        assert!(html.contains(">2<"));
    }

    #[test]
    fn review_page_escapes_file_names() {
        let pages = Pages::compile().unwrap();
        let html = pages
            .render_review(Path::new("/photos"), &names(&["<b>&\".jpg"]))
            .unwrap();

        assert!(html.contains(r#"alt="&lt;b&gt;&amp;&quot;.jpg""#));
        assert!(html.contains(r#"id="&lt;b&gt;&amp;&quot;.jpg-container""#));
        assert!(html.contains("<figcaption>&lt;b&gt;&amp;\".jpg</figcaption>"));
        assert!(!html.contains("<b>&"));
    }

    #[test]
    fn review_title_escapes_folder_path() {
        let pages = Pages::compile().unwrap();
        let html = pages
            .render_review(Path::new("/photos/<new> & old"), &[])
            .unwrap();

        assert!(html.contains("<h1>/photos/&lt;new&gt; &amp; old</h1>"));
        assert!(html.contains("<title>gpic - /photos/&lt;new&gt; &amp; old</title>"));
    }

    #[test]
    fn compare_cells_escape_attributes_and_captions() {
        let pages = Pages::compile().unwrap();
        let html = pages.render_compare(&names(&["a\"b&c.jpg"])).unwrap();

        assert!(html.contains(r#"name="similar[0]" value="a&quot;b&amp;c.jpg""#));
        assert!(html.contains(r#"name="kept" value="a&quot;b&amp;c.jpg""#));
        assert!(html.contains(r#"src="/static/a%22b&amp;c.jpg""#));
        assert!(html.contains("a\"b&amp;c.jpg\n"));
    }

    #[test]
    fn compare_page_numbers_candidates_from_zero() {
        let pages = Pages::compile().unwrap();
        let html = pages
            .render_compare(&names(&["a.jpg", "b.jpg", "c.jpg"]))
            .unwrap();

        assert!(html.contains(r#"name="similar[0]" value="a.jpg""#));
        assert!(html.contains(r#"name="similar[1]" value="b.jpg""#));
        assert!(html.contains(r#"name="similar[2]" value="c.jpg""#));
        assert!(!html.contains("similar[3]"));
        assert!(html.contains("grid-4"));
        assert!(html.contains("repeat(2, 1fr)"));
    }

    #[test]
    fn compare_page_uses_nine_grid_for_many() {
        let pages = Pages::compile().unwrap();
        let many: Vec<String> = (0..6).map(|i| format!("{}.jpg", i)).collect();

        let html = pages.render_compare(&many).unwrap();

        assert!(html.contains("grid-9"));
        assert!(html.contains("repeat(3, 1fr)"));
    }

    #[test]
    fn compare_page_with_no_candidates_uses_pair_grid() {
        let pages = Pages::compile().unwrap();
        let html = pages.render_compare(&[]).unwrap();
        assert!(html.contains("grid-2"));
    }

    #[test]
    fn static_href_percent_encodes() {
        assert_eq!(static_href("a.jpg"), "/static/a.jpg");
        assert_eq!(static_href("my photo.jpg"), "/static/my%20photo.jpg");
        assert_eq!(static_href("a/b.jpg"), "/static/a%2Fb.jpg");
    }

    #[test]
    fn review_location_anchors_kept_image() {
        assert_eq!(review_location(None), "/similar");
        assert_eq!(review_location(Some("c.jpg")), "/similar#c.jpg-container");
        assert_eq!(
            review_location(Some("my photo.jpg")),
            "/similar#my%20photo.jpg-container"
        );
    }
}
