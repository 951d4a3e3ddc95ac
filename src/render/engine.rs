use crate::context::{AppDescriptor, FieldValue};
use crate::error::{AppskelError, Result};

/// Substitute all placeholder markers in `input` against the descriptor.
///
/// Two marker forms are recognized, whitespace-tolerant inside the braces:
/// value markers `{{ .app.<field> }}` and conditional blocks
/// `{{if .app.options.<flag>}} ... {{end}}`. Blocks do not nest. A false
/// condition removes the block and its markers; a true condition keeps the
/// enclosed text with its own value markers substituted.
///
/// `label` names the template in syntax errors.
pub fn substitute(label: &str, input: &str, app: &AppDescriptor) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let (marker, tail) = read_marker(label, &rest[start..])?;
        rest = tail;

        if marker == "end" {
            return Err(syntax(label, "'{{end}}' without a matching '{{if}}'"));
        }

        if let Some(path) = if_condition(marker) {
            let (block, after) = split_block(label, rest)?;
            rest = after;
            let keep = match app.field(path)? {
                FieldValue::Flag(flag) => flag,
                FieldValue::Text(_) => {
                    return Err(AppskelError::UnresolvedReference {
                        reference: path.to_string(),
                    })
                }
            };
            if keep {
                // Blocks cannot nest, so recursion only ever sees value markers.
                out.push_str(&substitute(label, block, app)?);
            }
        } else {
            match app.field(marker)? {
                FieldValue::Text(text) => out.push_str(text),
                FieldValue::Flag(flag) => out.push_str(if flag { "true" } else { "false" }),
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Read one `{{ ... }}` marker. `input` must start with `{{`. Returns the
/// trimmed marker text and the remainder after the closing braces.
fn read_marker<'a>(label: &str, input: &'a str) -> Result<(&'a str, &'a str)> {
    let inner = &input[2..];
    let close = inner
        .find("}}")
        .ok_or_else(|| syntax(label, "unterminated '{{' marker"))?;
    Ok((inner[..close].trim(), &inner[close + 2..]))
}

/// If the marker is a conditional opener, return the condition path.
fn if_condition(marker: &str) -> Option<&str> {
    let rest = marker.strip_prefix("if")?;
    let path = rest.trim_start();
    // "ifsomething" is a (bad) value path, not a conditional
    (path.len() < rest.len()).then_some(path)
}

/// Split the text following an `{{if}}` at its matching `{{end}}`.
fn split_block<'a>(label: &str, input: &'a str) -> Result<(&'a str, &'a str)> {
    let mut offset = 0;
    loop {
        let Some(start) = input[offset..].find("{{") else {
            return Err(syntax(label, "'{{if}}' without a matching '{{end}}'"));
        };
        let marker_start = offset + start;
        let (marker, tail) = read_marker(label, &input[marker_start..])?;
        if marker == "end" {
            return Ok((&input[..marker_start], tail));
        }
        if if_condition(marker).is_some() {
            return Err(syntax(label, "nested '{{if}}' blocks are not supported"));
        }
        offset = input.len() - tail.len();
    }
}

fn syntax(label: &str, message: &str) -> AppskelError {
    AppskelError::TemplateSyntax {
        template: label.to_string(),
        message: message.to_string(),
    }
}
