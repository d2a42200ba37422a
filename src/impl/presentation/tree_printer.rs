use crate::entities::{BatchNode, Forest, TddfRecord};

use super::utils::{format_count, summarize_fields};

const INDENT: &str = "    ";
const WRAP_WIDTH: usize = 74;

/// Renders a forest as an indented plain-text outline.
pub(crate) struct TreePrinter {
    show_fields: bool,
}

impl TreePrinter {
    pub(crate) fn new() -> Self {
        Self { show_fields: false }
    }

    pub(crate) fn with_fields() -> Self {
        Self { show_fields: true }
    }

    pub(crate) fn print_forest(&self, forest: &Forest) -> String {
        let mut output = String::new();

        output.push_str(
            "; --- Batches ------------------------------------------------------------------\n\n",
        );
        output.push_str(&format!(
            "; {}, {}, {}, {}\n\n",
            format_count(forest.len(), "batch", "batches"),
            format_count(forest.transaction_count(), "transaction", "transactions"),
            format_count(forest.record_count(), "record", "records"),
            format_count(forest.unattached.count, "unattached", "unattached"),
        ));
        for (i, batch) in forest.batches.iter().enumerate() {
            self.print_batch(&mut output, i, batch);
        }

        if forest.unattached.count > 0 {
            output.push_str(
                "\n; --- Unattached ---------------------------------------------------------------\n\n",
            );
            if forest.unattached.records.is_empty() {
                output.push_str(&format!(
                    "; {} dropped\n",
                    format_count(forest.unattached.count, "record", "records")
                ));
            }
            for record in &forest.unattached.records {
                self.print_record(&mut output, 0, "", record);
            }
        }

        output
    }

    fn print_batch(&self, output: &mut String, index: usize, batch: &BatchNode) {
        match &batch.header {
            Some(header) => self.print_record(output, 0, &format!("Batch {}", index + 1), header),
            None => output.push_str(&format!("Batch {} (implicit)\n", index + 1)),
        }
        for record in &batch.orphan_extensions {
            self.print_record(output, 1, "orphan", record);
        }
        for (t, transaction) in batch.transactions.iter().enumerate() {
            self.print_record(
                output,
                1,
                &format!("Transaction {}", t + 1),
                &transaction.detail,
            );
            for extension in &transaction.extensions {
                self.print_record(output, 2, "", extension);
            }
        }
        if let Some(trailer) = &batch.trailer {
            self.print_record(output, 1, "trailer", trailer);
        }
    }

    fn print_record(&self, output: &mut String, depth: usize, label: &str, record: &TddfRecord) {
        let prefix = INDENT.repeat(depth);
        let label = if label.is_empty() {
            String::new()
        } else {
            format!("{} ", label)
        };
        output.push_str(&format!(
            "{}{}[line {}] {} {}\n",
            prefix,
            label,
            record.line_number,
            record.type_code,
            record.type_code.display_name(),
        ));
        if !self.show_fields {
            return;
        }
        if let Some(summary) = summarize_fields(&record.fields) {
            for line in textwrap::wrap(&summary, WRAP_WIDTH) {
                output.push_str(&format!("{}{};  {}\n", prefix, INDENT, line));
            }
        }
    }
}
