// File: form-builder/src/extract.rs
// Purpose: Recursive walk turning a record into an ordered list of fields

use crate::config::{ExtractConfig, FormConfig};
use crate::error::{FormError, Result};
use crate::field::Field;
use crate::introspect::{FormValue, Introspectable, Node};
use crate::tag::Tag;
use crate::value::Value;

/// Field extractor
///
/// Stateless apart from its configuration; one extractor can serve any
/// number of calls, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config: config.extract,
        }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract the fields of `record` with no name prefix
    pub fn fields<T>(&self, record: &T) -> Result<Vec<Field>>
    where
        T: FormValue + ?Sized,
    {
        self.extract(record, "")
    }

    /// Extract the fields of `record`, prefixing every name with `prefix.`
    ///
    /// `record` must resolve to a record: a present or absent `Option` of a
    /// record is fine, a scalar is [`FormError::InvalidInput`]. Nested records
    /// are flattened in place, depth first. The first malformed tag aborts
    /// the whole call.
    pub fn extract<T>(&self, record: &T, prefix: &str) -> Result<Vec<Field>>
    where
        T: FormValue + ?Sized,
    {
        let node = record.form_node();
        let record = node.as_record().ok_or(FormError::InvalidInput {
            type_name: std::any::type_name::<T>(),
        })?;

        tracing::debug!(record = record.type_name(), prefix, "extracting form fields");

        let mut fields = Vec::new();
        let prefix = (!prefix.is_empty()).then_some(prefix);
        self.walk(record, prefix, &mut fields)?;

        tracing::debug!(record = record.type_name(), count = fields.len(), "extracted form fields");
        Ok(fields)
    }

    fn walk(
        &self,
        record: &dyn Introspectable,
        prefix: Option<&str>,
        fields: &mut Vec<Field>,
    ) -> Result<()> {
        for member in record.members() {
            if !member.is_public() {
                tracing::trace!(member = member.name, "skipping private member");
                continue;
            }

            let path = match prefix {
                Some(prefix) => format!("{}.{}", prefix, member.name),
                None => member.name.to_string(),
            };

            let value = match member.node {
                Node::Leaf(value) => value,
                // A public member with nothing to show still gets its field.
                Node::Opaque => Value::Null,
                // Tags on a record-valued member never reach its fields.
                Node::Record(nested) => {
                    tracing::trace!(member = member.name, record = nested.type_name(), "descending");
                    self.walk(nested, Some(path.as_str()), fields)?;
                    continue;
                }
                Node::Synthesized(nested) => {
                    tracing::trace!(
                        member = member.name,
                        record = nested.type_name(),
                        "descending into zero value"
                    );
                    self.walk(nested.as_ref(), Some(path.as_str()), fields)?;
                    continue;
                }
            };

            let mut field = Field::new(member.name, path, &self.config.default_type, value);
            let tag = Tag::parse(&field.name, member.tag, self.config.strict_tags)?;
            tag.apply(&mut field);
            fields.push(field);
        }

        Ok(())
    }
}

/// Extract the fields of `record` with the default configuration
pub fn fields<T>(record: &T) -> Result<Vec<Field>>
where
    T: FormValue + ?Sized,
{
    Extractor::default().fields(record)
}

/// Extract the fields of `record` under `prefix` with the default configuration
pub fn extract<T>(record: &T, prefix: &str) -> Result<Vec<Field>>
where
    T: FormValue + ?Sized,
{
    Extractor::default().extract(record, prefix)
}
