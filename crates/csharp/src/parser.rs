use crate::patterns::{self, group, DECLARATION};
use crate::types::{TypeDeclaration, TypeKind};

/// Extracts every type declaration header from C# source text, in source order.
///
/// Never fails: text without a recognizable declaration yields an empty list.
pub fn parse_declarations(text: &str) -> Vec<TypeDeclaration> {
    DECLARATION
        .captures_iter(text)
        .filter_map(|caps| {
            let kind = TypeKind::from_keyword(caps.get(group::KIND)?.as_str())?;
            let name = caps.get(group::NAME)?.as_str().trim().to_string();
            if name.is_empty() {
                return None;
            }

            let fragment = |i| {
                caps.get(i)
                    .map(|m| patterns::strip_comments(m.as_str()))
                    .unwrap_or_default()
            };

            // Attribute arguments may hold `//` (URLs), so the block is split as captured
            let attributes = caps
                .get(group::ATTRIBUTES)
                .map(|m| patterns::split_attributes(m.as_str()))
                .unwrap_or_default();
            if let Some(whole) = caps.get(0) {
                if patterns::follows_unmatched_attribute(text, whole.start()) {
                    tracing::debug!("Attributes of {} not recognized, no notes emitted", name);
                }
            }

            Some(TypeDeclaration {
                kind,
                name,
                modifiers: patterns::parse_modifiers(&fragment(group::MODIFIERS)),
                bases: patterns::split_base_list(&fragment(group::BASES)),
                attributes,
            })
        })
        .collect()
}
