#![forbid(unsafe_code)]

//! Overlay kinds and their part structure.
//!
//! Markup and styling delivery belong to the environment; the engine only
//! names the parts it needs handles for ([`OverlayRequest`]) and supplies a
//! compact template plus a per-kind stylesheet id. The environment is free
//! to substitute richer markup as long as the requested parts exist.

use vitrine_core::OverlayRequest;

/// Stylesheet id for the video placeholder overlay.
pub const VIDEO_STYLE_ID: &str = "video-modal-styles";
/// Stylesheet id for the tool teaser overlay.
pub const TOOL_STYLE_ID: &str = "tool-modal-styles";
/// Stylesheet id for the search overlay.
pub const SEARCH_STYLE_ID: &str = "search-modal-styles";

const VIDEO_CSS: &str = ".video-modal{position:fixed;inset:0;background:rgba(0,0,0,.8);\
display:flex;align-items:center;justify-content:center}\
.video-modal-content{background:#fff;border-radius:20px;max-width:800px;width:90%}";

const TOOL_CSS: &str = ".tool-demo{text-align:center;padding:40px 20px}\
.tool-icon-large{width:100px;height:100px;border-radius:50%;margin:0 auto 30px}";

const SEARCH_CSS: &str = ".search-overlay{position:fixed;inset:0;background:rgba(0,0,0,.9);\
display:flex;align-items:flex-start;justify-content:center;padding-top:100px}\
.suggestion{color:#fff;padding:15px 20px;border-radius:10px;cursor:pointer}";

/// The overlays the page can open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayKind {
    /// Placeholder for a product demo video, numbered from 1.
    Video { number: usize },
    /// "Coming soon" teaser for a virtual tool, with a notify action.
    Tool { name: String },
    /// Search box over a static suggestion list.
    Search { suggestions: Vec<String> },
}

impl OverlayKind {
    /// The stylesheet injected once per kind per page session.
    #[must_use]
    pub fn stylesheet(&self) -> (&'static str, &'static str) {
        match self {
            OverlayKind::Video { .. } => (VIDEO_STYLE_ID, VIDEO_CSS),
            OverlayKind::Tool { .. } => (TOOL_STYLE_ID, TOOL_CSS),
            OverlayKind::Search { .. } => (SEARCH_STYLE_ID, SEARCH_CSS),
        }
    }

    /// The interactive parts the stack needs handles for.
    #[must_use]
    pub fn request(&self) -> OverlayRequest {
        match self {
            OverlayKind::Video { .. } => OverlayRequest::default(),
            OverlayKind::Tool { .. } => OverlayRequest {
                action: true,
                ..OverlayRequest::default()
            },
            OverlayKind::Search { suggestions } => OverlayRequest {
                input: true,
                items: suggestions.len(),
                ..OverlayRequest::default()
            },
        }
    }

    /// Compact markup handed to the environment for materialization.
    #[must_use]
    pub fn markup(&self) -> String {
        match self {
            OverlayKind::Video { number } => format!(
                "<div class=\"video-modal\"><div class=\"video-modal-content\">\
                 <h3>Video {number} - Product Demo</h3>\
                 <button class=\"close-modal\">&times;</button>\
                 <div class=\"video-placeholder-large\">Video {number} will be embedded here</div>\
                 </div></div>"
            ),
            OverlayKind::Tool { name } => format!(
                "<div class=\"video-modal\"><div class=\"video-modal-content\">\
                 <h3>{name}</h3><button class=\"close-modal\">&times;</button>\
                 <div class=\"tool-demo\"><h4>Virtual Tool Coming Soon!</h4>\
                 <button class=\"notify-btn\">Notify Me When Available</button></div>\
                 </div></div>"
            ),
            OverlayKind::Search { suggestions } => {
                let mut markup = String::from(
                    "<div class=\"search-overlay\"><div class=\"search-container\">\
                     <input class=\"search-input\" placeholder=\"Search products...\">\
                     <button class=\"search-close\">&times;</button>\
                     <div class=\"search-suggestions\">",
                );
                for suggestion in suggestions {
                    markup.push_str("<div class=\"suggestion\">");
                    markup.push_str(suggestion);
                    markup.push_str("</div>");
                }
                markup.push_str("</div></div></div>");
                markup
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_match_part_structure() {
        assert_eq!(
            OverlayKind::Video { number: 1 }.request(),
            OverlayRequest::default()
        );

        let tool = OverlayKind::Tool {
            name: "Shade Finder".into(),
        };
        assert!(tool.request().action);
        assert!(!tool.request().input);

        let search = OverlayKind::Search {
            suggestions: vec!["Makeup".into(), "Skin Care".into()],
        };
        assert!(search.request().input);
        assert_eq!(search.request().items, 2);
    }

    #[test]
    fn stylesheet_ids_are_distinct_per_kind() {
        let video = OverlayKind::Video { number: 1 }.stylesheet().0;
        let tool = OverlayKind::Tool { name: String::new() }.stylesheet().0;
        let search = OverlayKind::Search {
            suggestions: Vec::new(),
        }
        .stylesheet()
        .0;
        assert_ne!(video, tool);
        assert_ne!(tool, search);
        assert_ne!(video, search);
    }

    #[test]
    fn markup_carries_kind_payload() {
        let markup = OverlayKind::Video { number: 3 }.markup();
        assert!(markup.contains("Video 3"));

        let markup = OverlayKind::Search {
            suggestions: vec!["Hair Color".into()],
        }
        .markup();
        assert!(markup.contains("Hair Color"));
    }
}
