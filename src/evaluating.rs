use crate::error_handling::*;
use crate::parsing::*;

/// Evaluates a single arithmetic expression.
///
/// The whole of `text` must be consumed; anything but whitespace after the
/// expression is an error. Floating-point special values (`inf`, `NaN`) are
/// ordinary results, not errors.
pub fn evaluate(text: &str) -> Result<f64> {
    let mut parser = Parser::new(text);
    let result = parser.expression().and_then(|value| {
        parser.finish()?;
        Ok(value)
    });

    match &result {
        Ok(value) => log::debug!("evaluated {:?} to {}", text, value),
        Err(e) => log::debug!("failed to evaluate {:?}: {}", text, e),
    }
    result
}
