//! # Schema Walker
//!
//! Depth-first descent over a compiled [`Schema`]. Each call processes one
//! (schema node, data record, output element) triple to completion. Per
//! entry, in declared order:
//!
//! 1. Optional entries whose data path is absent or empty are skipped along
//!    with their subtree.
//! 2. Record list: create `container` once, then one `item` per record,
//!    recursing into each.
//! 3. Structured element: create the element, recurse with the sub-record.
//! 4. Attribute: validate the scalar, set it on the current element.
//! 5. Scalar element: validate the scalar, create the element with it as text.
//!
//! The first error from any branch aborts the walk.

use docgen_core::{DataSource, DocgenError, OutputTree};

use crate::key::Directive;
use crate::schema::{Schema, SchemaNode};

/// Walk `schema` against `data`, appending output under `parent`.
///
/// # Errors
///
/// Returns the first validation error encountered. Structure errors cannot
/// occur here because the schema was checked when it was compiled.
pub fn walk<D, T>(schema: &Schema, data: &D, out: &mut T, parent: T::Node) -> Result<(), DocgenError>
where
    D: DataSource,
    T: OutputTree,
{
    for entry in schema.entries() {
        let key = &entry.key;
        if key.is_optional() && data.is_blank(key.data_path()) {
            tracing::trace!(key = key.raw(), "optional entry elided");
            continue;
        }

        match (key.directive(), &entry.node) {
            (Directive::RecordList { container, item }, SchemaNode::Node(nested)) => {
                let list_element = out.create_element(parent, container);
                let records = data.get_record_list(container);
                tracing::trace!(key = key.raw(), records = records.len(), "record list");
                for record in &records {
                    let item_element = out.create_element(list_element, item);
                    walk(nested, record, out, item_element)?;
                }
            }
            (Directive::Element(name), SchemaNode::Node(nested)) => {
                let element = out.create_element(parent, name);
                walk(nested, &data.get_record(name), out, element)?;
            }
            (Directive::Attribute(name), SchemaNode::Rule(rule)) => {
                let value = rule.apply(key.raw(), &data.get_string(name))?;
                out.create_attribute(parent, name, &value);
            }
            (Directive::Element(name), SchemaNode::Rule(rule)) => {
                let value = rule.apply(key.raw(), &data.get_string(name))?;
                let element = out.create_element(parent, name);
                out.set_text(element, &value);
            }
            // Rejected by `Schema::from_value`; a hand-assembled schema with
            // these pairings produces nothing for the entry.
            (Directive::Attribute(_), SchemaNode::Node(_))
            | (Directive::RecordList { .. }, SchemaNode::Rule(_)) => {
                tracing::warn!(key = key.raw(), "skipping entry with mismatched directive");
            }
        }
    }

    Ok(())
}
