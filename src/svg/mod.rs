//! # SVG Path Extraction
//!
//! Finds the `<path>` elements of a drawing and reads the attributes the
//! report needs: `d`, `id`, `class`, `style` and a `translate(x,y)` transform.
//! Everything else in the document is ignored.

use std::sync::OnceLock;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;

use crate::path::Point;

/// Characters allowed in the `d` attribute of a path we can normalize.
fn path_data_grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| Regex::new(r"^[0-9mMzZlLcChHvVaA,.\-\s]+$").expect("valid regex"))
}

fn translate_pattern() -> &'static Regex {
    static TRANSLATE: OnceLock<Regex> = OnceLock::new();
    TRANSLATE.get_or_init(|| {
        Regex::new(r"^\s*translate\(\s*(-?\d+)\s*,\s*(-?\d+)\s*\)\s*$").expect("valid regex")
    })
}

/// A `<path>` element as found in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathElement {
    pub d: Option<String>,
    pub id: Option<String>,
    pub class: Option<String>,
    pub style: Option<String>,
    pub transform: Option<String>,
}

impl PathElement {
    /// The path data, if present and written only with supported commands.
    pub fn path_data(&self) -> Option<&str> {
        self.d
            .as_deref()
            .filter(|d| path_data_grammar().is_match(d))
    }

    /// Splits the id into `(category, name)` at the first underscore.
    ///
    /// `"wall_north_2"` gives `("wall", "north_2")`. An id without an
    /// underscore, or starting with one, is all name.
    pub fn category_and_name(&self) -> (&str, &str) {
        let id = self.id.as_deref().unwrap_or_default();
        match id.find('_') {
            Some(idx) if idx > 0 => (&id[..idx], &id[idx + 1..]),
            _ => ("", id),
        }
    }

    /// Initial offset from a `translate(x,y)` transform, `(0,0)` otherwise.
    pub fn offset(&self) -> Point {
        self.transform
            .as_deref()
            .and_then(parse_translate)
            .unwrap_or(Point::ZERO)
    }
}

/// Parses `translate(x,y)` with integer components.
pub fn parse_translate(s: &str) -> Option<Point> {
    let caps = translate_pattern().captures(s)?;
    let x = caps[1].parse().ok()?;
    let y = caps[2].parse().ok()?;
    Some(Point::new(x, y))
}

/// Collects every `<path>` element of an SVG document, in document order.
pub fn extract_paths(content: &str) -> Result<Vec<PathElement>, quick_xml::Error> {
    let mut paths = Vec::new();
    let mut reader = Reader::from_str(content);

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"path" => {
                paths.push(PathElement {
                    d: attribute(&e, "d"),
                    id: attribute(&e, "id"),
                    class: attribute(&e, "class"),
                    style: attribute(&e, "style"),
                    transform: attribute(&e, "transform"),
                });
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paths)
}

/// Unescaped value of the named attribute. Entity errors count as absent.
fn attribute(e: &BytesStart, name: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == name.as_bytes())
        .and_then(|attr| attr.unescape_value().ok())
        .map(|value| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAWING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <g id="layer1">
    <path id="room_kitchen" class="zone" style="fill:#ff0000;stroke:none"
          d="m 10,10 h 20 v 20 h -20 z" transform="translate(5,-3)" />
    <rect x="0" y="0" width="10" height="10"/>
    <path d="M 0,0 L 5,5"></path>
  </g>
</svg>"#;

    #[test]
    fn test_extract_paths_in_order() {
        let paths = extract_paths(DRAWING).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].id.as_deref(), Some("room_kitchen"));
        assert_eq!(paths[0].class.as_deref(), Some("zone"));
        assert_eq!(paths[0].style.as_deref(), Some("fill:#ff0000;stroke:none"));
        assert_eq!(paths[0].offset(), Point::new(5, -3));
        assert_eq!(paths[1].path_data(), Some("M 0,0 L 5,5"));
        assert_eq!(paths[1].id, None);
    }

    #[test]
    fn test_attribute_entities_are_unescaped() {
        let paths = extract_paths(
            r#"<svg><path id="a&amp;b_x" style="font-family:&quot;Arial&quot;" d="m 0,0 l 1,1"/></svg>"#,
        )
        .unwrap();
        assert_eq!(paths[0].style.as_deref(), Some("font-family:\"Arial\""));
        assert_eq!(paths[0].category_and_name(), ("a&b", "x"));
    }

    #[test]
    fn test_namespaced_path_is_found() {
        let paths =
            extract_paths(r#"<svg:svg><svg:path d="m 1,1 l 2,2"/></svg:svg>"#).unwrap();
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn test_unsupported_commands_are_filtered() {
        let element = PathElement {
            d: Some("M 0,0 Q 5,5 10,0".to_string()),
            ..Default::default()
        };
        assert_eq!(element.path_data(), None);
    }

    #[test]
    fn test_category_and_name() {
        let named = |id: &str| PathElement {
            id: Some(id.to_string()),
            ..Default::default()
        };
        assert_eq!(named("wall_north_2").category_and_name(), ("wall", "north_2"));
        assert_eq!(named("door").category_and_name(), ("", "door"));
        assert_eq!(named("_hidden").category_and_name(), ("", "_hidden"));
        assert_eq!(PathElement::default().category_and_name(), ("", ""));
    }

    #[test]
    fn test_parse_translate() {
        assert_eq!(parse_translate("translate(12,-4)"), Some(Point::new(12, -4)));
        assert_eq!(parse_translate(" translate( 1 , 2 ) "), Some(Point::new(1, 2)));
        assert_eq!(parse_translate("translate(1.5,2)"), None);
        assert_eq!(parse_translate("rotate(45)"), None);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(extract_paths("<svg><path d=\"m 0,0\"></svg>").is_err());
    }
}
