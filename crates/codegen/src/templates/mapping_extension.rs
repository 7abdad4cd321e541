//! Static `MapType` registrations, one per value object.

use crate::config::SynthesisConfig;
use crate::types::{Artifact, WorkItem};
use crate::work_items::format_registrations;

use super::{compilation_unit, TAB};

pub const EXTENSIONS_ARTIFACT_NAME: &str = "SwashbuckleSchemaExtensions_g.cs";
pub const EXTENSIONS_CLASS_NAME: &str = "VogenSwashbuckleExtensions";
pub const MAP_TYPES_METHOD_NAME: &str = "MapVogenTypes";

const OPTIONS_TYPE: &str = "global::Swashbuckle.AspNetCore.SwaggerGen.SwaggerGenOptions";

/// Builds the extension artifact. `MapVogenTypes` registers every item in
/// order and returns the options object it was given.
pub fn generate_mapping_extension(config: &SynthesisConfig, work_items: &[WorkItem]) -> Artifact {
    let body_indent = TAB.repeat(2);
    let mut class = String::new();
    class.push_str(&format!("public static class {}\n{{\n", EXTENSIONS_CLASS_NAME));
    class.push_str(&format!(
        "{}public static {} {}(this {} o)\n{}{{\n",
        TAB, OPTIONS_TYPE, MAP_TYPES_METHOD_NAME, OPTIONS_TYPE, TAB
    ));
    class.push_str(&format_registrations(work_items, &body_indent));
    if !work_items.is_empty() {
        class.push('\n');
    }
    class.push_str(&format!("{}return o;\n", body_indent));
    class.push_str(&format!("{}}}\n", TAB));
    class.push_str("}\n");

    Artifact {
        name: EXTENSIONS_ARTIFACT_NAME,
        text: compilation_unit(config, &class),
    }
}
