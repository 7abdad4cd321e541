//! Dispatch from the configured selector to one artifact generator.

use crate::config::SynthesisConfig;
use crate::probe::{probe, SymbolTable};
use crate::templates::{generate_mapping_extension, generate_schema_filter};
use crate::types::{Artifact, SchemaCustomization, WorkItem};

/// Produces at most one artifact.
///
/// Nothing is produced when the selector resolves to `Omit` (including an
/// absent configuration) or when the compilation does not reference the
/// schema framework. Identical inputs always give byte-identical text.
///
/// `config` is rendered as given. Configs from
/// [`SynthesisConfig::from_toml_str`] or the `with_*` builders are already
/// validated; call [`SynthesisConfig::validate`] on one built by struct
/// literal.
pub fn synthesize<C: SymbolTable + ?Sized>(
    config: Option<&SynthesisConfig>,
    compilation: &C,
    work_items: &[WorkItem],
) -> Option<Artifact> {
    let default_config = SynthesisConfig::default();
    let config = config.unwrap_or(&default_config);

    let artifact = match config.effective_customization() {
        SchemaCustomization::Omit => return None,
        SchemaCustomization::GenerateSwashbuckleSchemaFilter => {
            if !probe(compilation) {
                tracing::trace!("schema framework not referenced; skipping schema filter");
                return None;
            }
            generate_schema_filter(config)
        }
        SchemaCustomization::GenerateSwashbuckleMappingExtensionMethod => {
            if !probe(compilation) {
                tracing::trace!("schema framework not referenced; skipping mapping extension");
                return None;
            }
            generate_mapping_extension(config, work_items)
        }
    };

    tracing::debug!(
        artifact = artifact.name,
        work_items = work_items.len(),
        bytes = artifact.text.len(),
        "synthesized schema artifact"
    );
    Some(artifact)
}
