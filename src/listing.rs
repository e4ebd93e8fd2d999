//! Listing service: select, mask, fetch, sort, project, render.
//!
//! Validation and mask resolution happen in [`ListingService::plan`], before the
//! record source is touched; a rejected request never reaches `fetch`.

use crate::error::ApiError;
use crate::mask::FieldMask;
use crate::project::project_all;
use crate::registry::Registry;
use crate::render::Renderer;
use crate::select::{select, Selection};
use crate::sort::SortDispatcher;
use crate::source::RecordSource;
use crate::types::{ColumnName, EntityKind, RenderMode, SortKey};
use tracing::debug;

/// One list invocation as the caller asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub entity: EntityKind,
    pub columns: Vec<ColumnName>,
    /// `None` uses the entity's default sort key.
    pub sort_key: Option<SortKey>,
    pub mode: RenderMode,
}

impl ListRequest {
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            columns: Vec::new(),
            sort_key: None,
            mode: RenderMode::default(),
        }
    }

    pub fn with_columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnName>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = Some(sort_key);
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Validated selection plus the field mask to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPlan {
    pub selection: Selection,
    pub mask: FieldMask,
}

pub struct ListingService<'a> {
    registry: &'a Registry,
    sorter: &'a SortDispatcher,
    renderer: Renderer,
}

impl<'a> ListingService<'a> {
    pub fn new(registry: &'a Registry, sorter: &'a SortDispatcher, renderer: Renderer) -> Self {
        Self {
            registry,
            sorter,
            renderer,
        }
    }

    /// Validate the request and resolve its field mask.
    pub fn plan(&self, request: &ListRequest) -> Result<ListPlan, ApiError> {
        let entity = self.registry.entity(request.entity);
        let sort_key = request
            .sort_key
            .clone()
            .unwrap_or_else(|| entity.default_sort().clone());
        let selection = select(entity, &sort_key, &request.columns)?;
        let mask = FieldMask::for_selection(entity, &selection);
        debug!(
            entity = %request.entity,
            columns = selection.columns().len(),
            sort_key = %selection.sort_key(),
            mask = %mask,
            "Planned listing"
        );
        Ok(ListPlan { selection, mask })
    }

    /// Run the full pipeline against `source` and return the rendered output.
    pub fn run(&self, request: &ListRequest, source: &dyn RecordSource) -> Result<String, ApiError> {
        let plan = self.plan(request)?;
        let entity = self.registry.entity(request.entity);

        let records = source
            .fetch(request.entity, &plan.mask)
            .map_err(|source| ApiError::Source {
                entity: request.entity,
                source,
            })?;
        debug!(entity = %request.entity, count = records.len(), "Fetched records");

        let records = self
            .sorter
            .sort(request.entity, plan.selection.sort_key(), records);
        let rows = project_all(entity, &records, plan.selection.columns());
        debug!(entity = %request.entity, rows = rows.len(), mode = %request.mode, "Rendering");
        Ok(self
            .renderer
            .render(request.mode, entity, plan.selection.columns(), &rows))
    }
}
