//! Core types for the search domain.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

/// Kind of a node in the site map.
///
/// Only [`PageKind::Page`] and [`PageKind::MdxPage`] become searchable documents;
/// everything else is structure that is walked through.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
pub enum PageKind {
    #[strum(ascii_case_insensitive, serialize = "page")]
    Page,
    #[strum(ascii_case_insensitive, to_string = "mdx-page", serialize = "mdxpage")]
    MdxPage,
    #[strum(ascii_case_insensitive, to_string = "folder", serialize = "section")]
    Folder,
    #[strum(default)]
    Other(String),
}

impl PageKind {
    pub fn is_content(&self) -> bool {
        matches!(self, PageKind::Page | PageKind::MdxPage)
    }
}

/// A searchable page, flattened out of the site map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    /// Route to navigate to when the document is picked
    pub url: String,
    pub content: String,
    /// Display-only grouping ("Backend", "Database", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Document {
    pub fn new(title: impl Into<String>, url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: content.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A document that matched a query, with its content cut down to a display excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredResult {
    pub document: Document,
    /// Relevance score, always > 0 for surfaced results
    pub score: u32,
}

/// One node of the externally supplied site map.
///
/// Deserialization is lenient: absent or wrongly typed string fields read as `None`,
/// absent children read as empty, and child entries that are not objects are dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageNode {
    #[serde(default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub route: Option<String>,
    #[serde(default, deserialize_with = "lenient_children")]
    pub children: Vec<PageNode>,
}

impl PageNode {
    /// A content page.
    pub fn page(title: &str, route: &str, content: &str) -> Self {
        Self {
            kind: Some(PageKind::Page.to_string()),
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            route: Some(route.to_string()),
            ..Default::default()
        }
    }

    /// A folder that only groups children.
    pub fn folder(name: &str, route: Option<&str>, children: Vec<PageNode>) -> Self {
        Self {
            kind: Some(PageKind::Folder.to_string()),
            name: Some(name.to_string()),
            route: route.map(str::to_string),
            children,
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: Vec<PageNode>) -> Self {
        self.children = children;
        self
    }

    pub fn kind(&self) -> Option<PageKind> {
        self.kind.as_deref().and_then(|k| k.parse().ok())
    }

    /// Title, falling back to the node name, then to empty.
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref())
            .or_else(|| non_empty(self.name.as_deref()))
            .unwrap_or("")
    }

    pub fn route(&self) -> Option<&str> {
        non_empty(self.route.as_deref())
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// The site map root: named top-level entries in their original order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageTree {
    entries: Vec<(String, PageNode)>,
}

impl PageTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, node: PageNode) -> Self {
        self.entries.push((key.into(), node));
        self
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = (&str, &PageNode)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, PageNode)> for PageTree {
    fn from_iter<I: IntoIterator<Item = (String, PageNode)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Accepts either an object of named entries (order kept) or a plain array of nodes.
impl<'de> Deserialize<'de> for PageTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PageTreeVisitor;

        impl<'de> Visitor<'de> for PageTreeVisitor {
            type Value = PageTree;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object or array of page nodes")
            }

            fn visit_map<A>(self, mut map: A) -> Result<PageTree, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    if let Some(node) = lenient_node(value) {
                        entries.push((key, node));
                    }
                }
                Ok(PageTree { entries })
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<PageTree, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut entries = Vec::new();
                let mut index = 0usize;
                while let Some(value) = seq.next_element::<Value>()? {
                    if let Some(node) = lenient_node(value) {
                        entries.push((index.to_string(), node));
                    }
                    index += 1;
                }
                Ok(PageTree { entries })
            }
        }

        deserializer.deserialize_any(PageTreeVisitor)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_children<'de, D>(deserializer: D) -> Result<Vec<PageNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let children = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(children.into_iter().filter_map(lenient_node).collect())
}

/// Non-object entries (metadata strings, separators) are not pages.
fn lenient_node(value: Value) -> Option<PageNode> {
    if !value.is_object() {
        return None;
    }
    PageNode::deserialize(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_kind_parses_both_spellings() {
        assert_eq!("page".parse::<PageKind>().unwrap(), PageKind::Page);
        assert_eq!("Page".parse::<PageKind>().unwrap(), PageKind::Page);
        assert_eq!("mdx-page".parse::<PageKind>().unwrap(), PageKind::MdxPage);
        assert_eq!("MdxPage".parse::<PageKind>().unwrap(), PageKind::MdxPage);
        assert_eq!(
            "Meta".parse::<PageKind>().unwrap(),
            PageKind::Other("Meta".to_string())
        );
        assert!(!PageKind::Folder.is_content());
    }

    #[test]
    fn tree_keeps_object_order() {
        let tree = PageTree::from_json(
            r#"{
                "Zeta": {"kind": "page", "title": "Zeta", "route": "/z"},
                "Alpha": {"kind": "page", "title": "Alpha", "route": "/a"}
            }"#,
        )
        .unwrap();

        let keys: Vec<_> = tree.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn tree_skips_non_object_entries() {
        let tree = PageTree::from_json(
            r#"{"_meta": "ignored", "Home": {"kind": "page", "title": "Home", "route": "/"}}"#,
        )
        .unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn tree_accepts_array() {
        let tree = PageTree::from_json(r#"[{"kind": "page", "title": "Only"}]"#).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.entries().next().unwrap().1.display_title(), "Only");
    }

    #[test]
    fn node_tolerates_missing_and_mistyped_fields() {
        let tree = PageTree::from_json(
            r#"{
                "Odd": {"kind": "page", "title": 42, "name": "Fallback", "children": null},
                "Mixed": {"kind": "folder", "children": [1, "x", {"kind": "page", "title": "Kept"}]}
            }"#,
        )
        .unwrap();

        let nodes: Vec<_> = tree.entries().map(|(_, n)| n).collect();
        assert_eq!(nodes[0].display_title(), "Fallback");
        assert!(nodes[0].children.is_empty());
        assert_eq!(nodes[1].children.len(), 1);
        assert_eq!(nodes[1].children[0].display_title(), "Kept");
    }

    #[test]
    fn empty_title_falls_back_to_name() {
        let node = PageNode {
            title: Some(String::new()),
            name: Some("guide".to_string()),
            ..Default::default()
        };
        assert_eq!(node.display_title(), "guide");
        assert_eq!(PageNode::default().display_title(), "");
    }
}
