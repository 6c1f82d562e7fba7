//! Model output is untrusted markdown. Raw HTML is escaped and link targets
//! are checked against a scheme allowlist; code blocks and inline code are left
//! alone because renderers escape those themselves.

use regex::{Captures, Regex};
use std::sync::OnceLock;

const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

fn inline_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\]\(\s*(<[^>\n]*>|[^\s)]*)").expect("inline link pattern is valid")
    })
}

fn reference_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\s{0,3}\[[^\]]+\]:\s*)(<[^>\n]*>|\S+)")
            .expect("reference link pattern is valid")
    })
}

fn entity() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"&(#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[A-Za-z][A-Za-z0-9]{1,31});?")
            .expect("entity pattern is valid")
    })
}

pub fn sanitize_markdown(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_fence = false;

    for line in input.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            out.push_str(line);
        } else if in_fence {
            out.push_str(line);
        } else {
            out.push_str(&sanitize_line(line));
        }
    }

    out
}

fn sanitize_line(line: &str) -> String {
    // Link targets are rewritten on the whole line: a backtick inside a
    // destination must not hide the rest of it from the check.
    let line = neutralize_links(line);

    let segments: Vec<&str> = line.split('`').collect();
    // An odd number of backticks leaves the last span unclosed, and renderers
    // treat an unclosed backtick as literal text.
    let closed_spans = if segments.len() % 2 == 0 {
        segments.len() - 1
    } else {
        segments.len()
    };

    let mut result = String::with_capacity(line.len());
    for (idx, segment) in segments.iter().enumerate() {
        if idx > 0 {
            result.push('`');
        }
        if idx % 2 == 1 && idx < closed_spans {
            result.push_str(segment);
        } else {
            result.push_str(&segment.replace('<', "&lt;"));
        }
    }
    result
}

fn neutralize_links(line: &str) -> String {
    let line = inline_link().replace_all(line, |caps: &Captures| {
        if is_safe_destination(&caps[1]) {
            caps[0].to_string()
        } else {
            "](#".to_string()
        }
    });
    reference_link()
        .replace_all(&line, |caps: &Captures| {
            if is_safe_destination(&caps[2]) {
                caps[0].to_string()
            } else {
                format!("{}#", &caps[1])
            }
        })
        .into_owned()
}

/// Relative targets and allowlisted schemes pass. The target is read the way
/// a renderer and browser would: entities decoded, backslash escapes and
/// whitespace dropped, case folded.
fn is_safe_destination(raw: &str) -> bool {
    let raw = raw
        .strip_prefix('<')
        .and_then(|r| r.strip_suffix('>'))
        .unwrap_or(raw);
    let normalized: String = decode_entities(raw)
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control() && *c != '\\')
        .collect::<String>()
        .to_ascii_lowercase();

    match normalized.find([':', '/', '?', '#']) {
        Some(idx) if normalized[idx..].starts_with(':') => {
            SAFE_SCHEMES.contains(&&normalized[..idx])
        }
        _ => true,
    }
}

fn decode_entities(text: &str) -> String {
    entity()
        .replace_all(text, |caps: &Captures| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(body)
            };
            decoded
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "colon" => ':',
        "Tab" => '\t',
        "NewLine" => '\n',
        "amp" | "AMP" => '&',
        "sol" => '/',
        "quest" => '?',
        "num" => '#',
        "period" => '.',
        "lpar" => '(',
        "rpar" => ')',
        "lt" | "LT" => '<',
        "gt" | "GT" => '>',
        "quot" | "QUOT" => '"',
        "nbsp" => '\u{a0}',
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_html_is_escaped() {
        let out = sanitize_markdown("Hello <script>alert(1)</script> world");
        assert_eq!(out, "Hello &lt;script>alert(1)&lt;/script> world");
    }

    #[test]
    fn fenced_code_is_untouched() {
        let input = "## Review\n```csharp\nvar items = new List<string>();\n```\nDone <b>now</b>\n";
        let out = sanitize_markdown(input);
        assert!(out.contains("var items = new List<string>();"));
        assert!(out.contains("Done &lt;b>now&lt;/b>"));
    }

    #[test]
    fn inline_code_is_untouched() {
        let out = sanitize_markdown("Prefer `IEnumerable<T>` over <i>arrays</i>");
        assert_eq!(out, "Prefer `IEnumerable<T>` over &lt;i>arrays&lt;/i>");
    }

    #[test]
    fn unclosed_backtick_does_not_shield_html() {
        let out = sanitize_markdown("oops ` <img src=x onerror=alert(1)>");
        assert!(!out.contains("<img"));
    }

    #[test]
    fn script_links_are_neutralized() {
        let out = sanitize_markdown("[click](javascript:alert(1)) and [ok](https://example.com)");
        assert!(out.starts_with("[click](#)"));
        assert!(out.contains("[ok](https://example.com)"));

        let out = sanitize_markdown("[ref]: JavaScript:alert(1)\n");
        assert_eq!(out, "[ref]: #\n");
    }

    #[test]
    fn backtick_in_link_target_does_not_hide_it() {
        let out = sanitize_markdown("[click](javascript:alert`1`)");
        assert!(!out.to_ascii_lowercase().contains("javascript"));
        assert!(out.starts_with("[click](#)"));
    }

    #[test]
    fn entity_encoded_schemes_are_decoded_before_the_check() {
        for input in [
            "[click](&#106;avascript:alert(1))",
            "[click](&#x6A;avascript:alert(1))",
            "[click](javascript&colon;alert(1))",
            "[click](java&Tab;script:alert(1))",
            "[click](java\\script:alert(1))",
            "![img](DATA:text/html;base64,PHNjcmlwdD4=)",
            "[click](<vbscript:msgbox(1)>)",
        ] {
            let out = sanitize_markdown(input);
            assert!(out.contains("](#"), "{input} => {out}");
            assert!(!out.contains("script:"), "{input} => {out}");
        }

        let out = sanitize_markdown("[ref]: &#106;avascript:alert(1)\n");
        assert_eq!(out, "[ref]: #\n");
    }

    #[test]
    fn safe_targets_are_kept() {
        for input in [
            "[docs](https://learn.microsoft.com/en-us/dotnet/csharp/)",
            "[wiki](https://en.wikipedia.org/wiki/Rust_(programming_language))",
            "[mail](mailto:training@example.com)",
            "[local](/paths/csharp#advanced)",
            "[anchor](#level-2)",
        ] {
            assert_eq!(sanitize_markdown(input), input);
        }
    }

    #[test]
    fn plain_markdown_round_trips() {
        let input = "# Title\n\n- **bold** item\n> quote\n";
        assert_eq!(sanitize_markdown(input), input);
    }
}
