use serde_json::Value;

/// Render a decoded-record document as YAML-style block text: maps as
/// `key: value` lines, sequences as `- ` lines at their key's indent, and
/// every integer in hex.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, indent: usize) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, val) in map {
                write_indent(out, indent);
                out.push_str(key);
                out.push(':');
                write_nested(out, val, indent);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for item in items {
                write_indent(out, indent);
                out.push('-');
                write_seq_item(out, item, indent);
            }
        }
        _ => {
            write_indent(out, indent);
            out.push_str(&scalar(value));
            out.push('\n');
        }
    }
}

// The value after "key:". Nested maps indent two further; nested sequences
// keep their dashes at the key's own indent.
fn write_nested(out: &mut String, value: &Value, indent: usize) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            out.push('\n');
            write_value(out, value, indent + 2);
        }
        Value::Array(items) if !items.is_empty() => {
            out.push('\n');
            write_value(out, value, indent);
        }
        _ => {
            out.push(' ');
            out.push_str(&scalar(value));
            out.push('\n');
        }
    }
}

// The value after a sequence dash. A map's first entry shares the dash's
// line; the rest align under it.
fn write_seq_item(out: &mut String, value: &Value, indent: usize) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            out.push(' ');
            let mut first = true;
            for (key, val) in map {
                if !first {
                    write_indent(out, indent + 2);
                }
                first = false;
                out.push_str(key);
                out.push(':');
                write_nested(out, val, indent + 2);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            let mut first = true;
            for item in items {
                if first {
                    out.push(' ');
                } else {
                    write_indent(out, indent + 2);
                }
                first = false;
                out.push('-');
                write_seq_item(out, item, indent + 2);
            }
        }
        _ => {
            out.push(' ');
            out.push_str(&scalar(value));
            out.push('\n');
        }
    }
}

fn write_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push(' ');
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_u64() {
            Some(v) => format!("0x{v:02x}"),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        // only empty containers reach here
        Value::Array(_) => "[]".to_string(),
        Value::Object(_) => "{}".to_string(),
    }
}
