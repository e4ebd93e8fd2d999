//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cli::command_name;
use crate::cli::parse::{Commands, ProjectionArgs};
use crate::cli::presentation::{format_columns_json, format_columns_text, format_mask};
use crate::config::{ConfigLoader, SltableConfig};
use crate::error::ApiError;
use crate::listing::{ListRequest, ListingService};
use crate::registry::Registry;
use crate::render::Renderer;
use crate::sort::SortDispatcher;
use crate::source::{JsonFileSource, RecordSource};
use crate::types::{EntityKind, RenderMode};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime context for CLI execution: loaded config plus the registry, sort
/// table and renderer built from it once at startup.
pub struct RunContext {
    config: SltableConfig,
    registry: Registry,
    sorter: SortDispatcher,
    renderer: Renderer,
}

impl RunContext {
    /// Load configuration (optionally from an explicit file) and build the context.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        Self::from_config(config)
    }

    pub fn from_config(config: SltableConfig) -> Result<Self, ApiError> {
        let registry = config.build_registry()?;
        let sorter = SortDispatcher::new(&registry);
        let renderer = Renderer::new(config.output.table_style);
        Ok(Self {
            config,
            registry,
            sorter,
            renderer,
        })
    }

    pub fn config(&self) -> &SltableConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Whether error output should be colored.
    pub fn color(&self) -> bool {
        self.config.output.color
    }

    fn listing(&self) -> ListingService<'_> {
        ListingService::new(&self.registry, &self.sorter, self.renderer)
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        debug!(command = %command_name(command), "Executing command");
        match command {
            Commands::List {
                kind,
                input,
                projection,
                output,
            } => self.handle_list(*kind, input, projection, *output),
            Commands::Columns { kind, format } => self.handle_columns(*kind, format),
            Commands::Mask { kind, projection } => self.handle_mask(*kind, projection),
            Commands::Config => self.config.to_toml(),
        }
    }

    /// Run a listing against any record source.
    pub fn list_from(
        &self,
        kind: EntityKind,
        projection: &ProjectionArgs,
        output: Option<RenderMode>,
        source: &dyn RecordSource,
    ) -> Result<String, ApiError> {
        let request = self.request(kind, projection, output);
        self.listing().run(&request, source)
    }

    fn handle_list(
        &self,
        kind: EntityKind,
        input: &Path,
        projection: &ProjectionArgs,
        output: Option<RenderMode>,
    ) -> Result<String, ApiError> {
        self.list_from(kind, projection, output, &JsonFileSource::new(input))
    }

    fn handle_columns(&self, kind: EntityKind, format: &str) -> Result<String, ApiError> {
        let entity = self.registry.entity(kind);
        match format {
            "json" => Ok(format_columns_json(entity)),
            "text" => Ok(format_columns_text(entity)),
            other => Err(ApiError::InvalidUsage(format!(
                "Invalid format '{}' (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn handle_mask(&self, kind: EntityKind, projection: &ProjectionArgs) -> Result<String, ApiError> {
        let plan = self.listing().plan(&self.request(kind, projection, None))?;
        Ok(format_mask(&plan.mask))
    }

    fn request(
        &self,
        kind: EntityKind,
        projection: &ProjectionArgs,
        output: Option<RenderMode>,
    ) -> ListRequest {
        let mut request = ListRequest::new(kind)
            .with_columns(projection.column_names())
            .with_mode(output.unwrap_or(self.config.output.default_mode));
        if let Some(sort_key) = projection.sort_key() {
            request = request.with_sort_key(sort_key);
        }
        request
    }
}
