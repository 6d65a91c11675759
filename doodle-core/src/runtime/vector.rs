use anyhow::Context;

use crate::animation::StrokeSet;

/// The parts of a parsed SVG document the stroke animation cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorDoc {
    pub width: f32,
    pub height: f32,
    /// Ids of every `<path>` element in document order. Unnamed paths get `path{index}`.
    pub path_ids: Vec<String>,
}

impl VectorDoc {
    pub fn parse(bytes: &[u8]) -> anyhow::Result<Self> {
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;

        let text = std::str::from_utf8(bytes).context("svg is not utf-8")?;
        let xml = roxmltree::Document::parse(text).context("parse svg xml")?;
        let path_ids = collect_paths(&xml);

        let size = tree.size();
        Ok(Self {
            width: size.width(),
            height: size.height(),
            path_ids,
        })
    }

    pub fn into_strokes(self) -> StrokeSet {
        StrokeSet::new(self.path_ids)
    }
}

// 只认 <path> 元素本身，circle/rect 不算，<defs> 里的也算
fn collect_paths(xml: &roxmltree::Document) -> Vec<String> {
    xml.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "path")
        .enumerate()
        .map(|(index, n)| match n.attribute("id") {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => format!("path{}", index),
        })
        .collect()
}
