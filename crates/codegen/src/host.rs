//! Handing artifacts to the generation host.

use crate::config::SynthesisConfig;
use crate::probe::SymbolTable;
use crate::synthesize::synthesize;
use crate::types::WorkItem;

/// The host's "add generated source" channel.
pub trait SourceSink {
    fn add_source(&mut self, name: &str, text: &str);
}

/// Keeps every `(name, text)` pair it is given, in order.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub sources: Vec<(String, String)>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the first source added under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, text)| text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl SourceSink for CollectingSink {
    fn add_source(&mut self, name: &str, text: &str) {
        self.sources.push((name.to_string(), text.to_string()));
    }
}

/// Runs one synthesis pass and forwards the artifact, if any, to `sink`.
///
/// Returns whether anything was emitted.
pub fn generate<C, S>(
    config: Option<&SynthesisConfig>,
    compilation: &C,
    work_items: &[WorkItem],
    sink: &mut S,
) -> bool
where
    C: SymbolTable + ?Sized,
    S: SourceSink + ?Sized,
{
    match synthesize(config, compilation, work_items) {
        Some(artifact) => {
            sink.add_source(artifact.name, &artifact.text);
            true
        }
        None => false,
    }
}
