use crate::core::loader::LoadState;
use crate::core::templates::PAGE_TEMPLATE;
use crate::utils::error::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Element id of the card container.
pub const GRID_ID: &str = "projects-grid";

/// Full content of the grid container for one load cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "lowercase")]
pub enum GridContent {
    Cards(Vec<String>),
    Empty,
    Failed,
}

impl From<LoadState> for GridContent {
    fn from(state: LoadState) -> Self {
        match state {
            LoadState::Populated(cards) => GridContent::Cards(cards),
            LoadState::Empty => GridContent::Empty,
            // an unfinished load has nothing to show
            LoadState::Idle | LoadState::Loading | LoadState::Failed => GridContent::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDocument {
    pub title: String,
    pub owner: String,
    pub icon_href: String,
    pub grid: GridContent,
}

impl PageDocument {
    pub fn new(title: &str, owner: &str, icon_href: &str) -> Self {
        Self {
            title: title.to_string(),
            owner: owner.to_string(),
            icon_href: icon_href.to_string(),
            grid: GridContent::Empty,
        }
    }

    /// Replaces whatever the container held before.
    pub fn set_grid(&mut self, grid: GridContent) {
        self.grid = grid;
    }

    pub fn set_icon_href(&mut self, href: String) {
        self.icon_href = href;
    }

    pub fn render(&self, tera: &Tera) -> Result<String> {
        let mut context = Context::from_serialize(self)?;
        context.insert("grid_id", GRID_ID);
        Ok(tera.render(PAGE_TEMPLATE, &context)?)
    }
}
