use mirex_core::model::Conversion;

pub fn print(conversion: &Conversion) {
    println!("Answer key:");
    if conversion.answer_key.is_empty() {
        println!("  (empty)");
    }
    for (question, indices) in &conversion.answer_key {
        let list = indices
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {question}: {list}");
    }

    println!();
    println!(
        "{} question(s), {} answer row(s)",
        conversion.question_count,
        conversion.rows.len()
    );

    for row in &conversion.rows {
        if let Some(meta) = &row.question {
            println!();
            println!("{} [type {}]", meta.text, meta.question_type);
        }
        let marker = if row.correctness == 1 { "x" } else { " " };
        println!("  [{marker}] {}", row.answer_text);
    }

    if !conversion.skipped_cells.is_empty() {
        println!();
        println!("{} key cell(s) skipped:", conversion.skipped_cells.len());
        for cell in &conversion.skipped_cells {
            println!("  '{}': {}", cell.cell_text, cell.reason);
        }
    }
}
