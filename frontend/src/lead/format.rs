use crate::lead::record::LeadRecord;
use crate::lead::schema::FormVariant;

/// Renders a lead as a WhatsApp-ready text block.
///
/// Title, blank line, then one labelled line per field in message order.
/// Required fields always get a line; optional fields only when filled in.
pub fn format_lead(record: &LeadRecord, variant: FormVariant) -> String {
    let mut lines = vec![variant.title().to_string(), String::new()];

    lines.extend(variant.fields().into_iter().filter_map(|field| {
        let value = record.get(field.input_name()).unwrap_or("");
        if value.is_empty() && !variant.is_required(field) {
            None
        } else {
            Some(format!("{} {}", field.label(), value))
        }
    }));

    lines.join("\n")
}
