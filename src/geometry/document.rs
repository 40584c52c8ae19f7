//! Picks the outline sources out of an SVG document: the `d` data of every `<path>` that is a
//! direct child of an `<svg>` element (`svg > path`). Nested groups are ignored.

/// Path data of the direct `<path>` children of every `<svg>` element, in document order.
/// Paths without a `d` attribute are skipped. Element names are matched on their local name.
pub fn direct_child_paths(svg: &str) -> Result<Vec<String>, roxmltree::Error> {
    let doc = roxmltree::Document::parse(svg)?;
    let paths = doc
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "svg")
        .flat_map(|svg| svg.children())
        .filter(|child| child.is_element() && child.tag_name().name() == "path")
        .filter_map(|path| path.attribute("d"))
        .map(str::to_owned)
        .collect();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_direct_children_of_svg() {
        let doc = r#"<?xml version="1.0"?>
            <!-- <svg><path d="M0 0"/></svg> -->
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10">
              <path fill="red" d="M1 1 L2 2 Z"/>
              <g><path d="M9 9 L8 8 Z"/></g>
              <path d='M3 3 L4 4 Z' stroke="a>b"></path>
            </svg>"#;
        assert_eq!(
            direct_child_paths(doc).expect("parse"),
            vec!["M1 1 L2 2 Z", "M3 3 L4 4 Z"]
        );
    }

    #[test]
    fn prefixed_elements_and_missing_d() {
        let doc = r#"<s:svg xmlns:s="http://www.w3.org/2000/svg"><s:path d="M0 0 L1 1"/><s:path id="x"/></s:svg>"#;
        assert_eq!(direct_child_paths(doc).expect("parse"), vec!["M0 0 L1 1"]);
    }

    #[test]
    fn character_references_are_decoded() {
        let doc = r#"<svg><path d="M0 0&#10;L10 0&#x20;L10 10 Z"/></svg>"#;
        let paths = direct_child_paths(doc).expect("parse");
        assert_eq!(paths.len(), 1);
        assert!(!paths[0].contains('&'), "{:?}", paths[0]);
        let points = crate::geometry::trace_path(&paths[0], 0.0).expect("trace");
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn no_svg_root_means_no_paths() {
        assert!(direct_child_paths(r#"<path d="M0 0 L1 1"/>"#)
            .expect("parse")
            .is_empty());
    }

    #[test]
    fn malformed_documents_are_errors() {
        assert!(direct_child_paths("").is_err());
        assert!(direct_child_paths("<svg><path d='M0 0'></svg>").is_err());
    }
}
