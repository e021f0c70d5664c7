use mirex_core::error::MirexError;
use mirex_core::model::Conversion;

pub fn print(conversion: &Conversion) -> Result<(), MirexError> {
    let json = serde_json::to_string_pretty(conversion)?;
    println!("{json}");
    Ok(())
}
