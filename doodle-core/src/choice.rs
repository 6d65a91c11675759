use serde::{Deserialize, Serialize};

use crate::event::OutputEvent;

/// A clickable label bound to a navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChoiceItem {
    pub label: String,
    pub url: String,
}

impl ChoiceItem {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self { label: label.into(), url: url.into() }
    }
}

/// `[[choices]]` as written in config, with the built-in list as default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceList(pub Vec<ChoiceItem>);

impl Default for ChoiceList {
    fn default() -> Self {
        Self(vec![
            ChoiceItem::new("Projects", "https://github.com/"),
            ChoiceItem::new("Blog", "https://example.com/blog/"),
            ChoiceItem::new("Say hi", "mailto:hello@example.com"),
        ])
    }
}

/// Presents the choices and turns one activation into a navigation.
pub struct ChoiceMenu {
    items: Vec<ChoiceItem>,
    chosen: Option<usize>,
}

impl ChoiceMenu {
    pub fn new(items: Vec<ChoiceItem>) -> Self {
        Self { items, chosen: None }
    }

    pub fn present(&self, container: &str) -> OutputEvent {
        OutputEvent::ShowChoices {
            container: container.to_string(),
            items: self.items.clone(),
        }
    }

    /// Navigation for the item at `index`. Only the first valid activation
    /// navigates; the page is gone after that.
    pub fn activate(&mut self, index: usize) -> Option<OutputEvent> {
        if let Some(prev) = self.chosen {
            log::warn!("Choice {} ignored, already navigated via {}", index, prev);
            return None;
        }

        let Some(item) = self.items.get(index) else {
            log::warn!("Choice index {} out of range (len {})", index, self.items.len());
            return None;
        };

        log::info!("Choice '{}' -> {}", item.label, item.url);
        self.chosen = Some(index);
        Some(OutputEvent::Navigate { url: item.url.clone() })
    }

    pub fn chosen(&self) -> Option<usize> {
        self.chosen
    }
}
