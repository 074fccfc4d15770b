//! Interactive form: the four fields are asked for one after another, then
//! the password is shown and can be copied.

use std::io::{ BufRead, Write };

use crate::errors::{ AppError, Field };
use crate::password::RawRequest;

/// Read one line after printing `label`. `None` on end of input.
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>, AppError> {
    write!(output, "{}: ", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask for every field in form order. Blank answers are kept as blank text so
/// validation can report them. Non-blank fields in `prefill` are shown as the
/// default and used when the answer is blank.
pub fn read_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prefill: &RawRequest,
) -> Result<Option<RawRequest>, AppError> {
    let mut form = RawRequest::default();

    for field in Field::ALL {
        let label = match prefill.field(field) {
            Some(default) if !default.trim().is_empty() => format!("{} [{}]", field.label(), default),
            _ => field.label().to_string(),
        };

        let Some(answer) = read_line(input, output, &label)? else {
            return Ok(None);
        };

        let value = match prefill.field(field) {
            Some(default) if answer.trim().is_empty() => default.to_string(),
            _ => answer,
        };
        form.set(field, value);
    }

    Ok(Some(form))
}

/// Yes/no question, anything but `y`/`yes` is no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool, AppError> {
    let answer = read_line(input, output, &format!("{} [y/N]", question))?;

    Ok(matches!(
        answer.as_deref().map(|a| a.trim().to_lowercase()).as_deref(),
        Some("y" | "yes")
    ))
}
