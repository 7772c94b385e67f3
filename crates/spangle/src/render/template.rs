//! Template placeholder parsing.

use crate::console::Arg;

/// A piece of a rendered template, paired with the argument it consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Literal text.
    Text(&'a str),
    /// A `%c` directive; applies to the text that follows.
    Style(&'a str),
    /// A `%o` (`expanded: false`) or `%O` (`expanded: true`) substitution.
    Value { arg: &'a Arg, expanded: bool },
    /// An argument left over after every placeholder was consumed.
    Trailing(&'a Arg),
}

/// Splits `template` into segments, consuming `args` in placeholder order.
///
/// Mirrors host console substitution: a placeholder with no argument left
/// stays literal text, and surplus arguments trail the template.
pub fn segments<'a>(template: &'a str, args: &'a [Arg]) -> Vec<Segment<'a>> {
    let mut out = Vec::new();
    let mut remaining = args.iter();
    let bytes = template.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'%' && matches!(bytes[i + 1], b'c' | b'o' | b'O') {
            if let Some(arg) = remaining.next() {
                if start < i {
                    out.push(Segment::Text(&template[start..i]));
                }
                out.push(match bytes[i + 1] {
                    b'c' => Segment::Style(arg.as_style().unwrap_or("")),
                    b'o' => Segment::Value {
                        arg,
                        expanded: false,
                    },
                    _ => Segment::Value {
                        arg,
                        expanded: true,
                    },
                });
                i += 2;
                start = i;
                continue;
            }
        }
        i += 1;
    }

    if start < template.len() {
        out.push(Segment::Text(&template[start..]));
    }
    out.extend(remaining.map(Segment::Trailing));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_template() {
        assert_eq!(segments("hello", &[]), vec![Segment::Text("hello")]);
    }

    #[test]
    fn test_style_and_value_placeholders() {
        let args = [
            Arg::Style("color:red;".into()),
            Arg::Object(json!(1)),
        ];
        assert_eq!(
            segments("%cred %O!", &args),
            vec![
                Segment::Style("color:red;"),
                Segment::Text("red "),
                Segment::Value {
                    arg: &args[1],
                    expanded: true
                },
                Segment::Text("!"),
            ]
        );
    }

    #[test]
    fn test_missing_args_leave_placeholder_literal() {
        assert_eq!(segments("100%c", &[]), vec![Segment::Text("100%c")]);
    }

    #[test]
    fn test_surplus_args_trail() {
        let args = [Arg::Object(json!("x"))];
        assert_eq!(
            segments("a", &args),
            vec![Segment::Text("a"), Segment::Trailing(&args[0])]
        );
    }

    #[test]
    fn test_multibyte_text_preserved() {
        let args = [Arg::Style(String::new())];
        assert_eq!(
            segments("⚡ %c日志", &args),
            vec![
                Segment::Text("⚡ "),
                Segment::Style(""),
                Segment::Text("日志")
            ]
        );
    }
}
