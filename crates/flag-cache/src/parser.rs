use regex::Regex;
use std::sync::OnceLock;

/// One `flag<index>` label paired with the image that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagRef {
    pub index: u32,

    /// `src` attribute with HTML character references decoded, relative to
    /// the folder the page was saved in.
    pub src: String,
}

fn label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bflag(\d+)\b").expect("valid label regex"))
}

fn img_src_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<img\s(?:[^>]*?\s)?src\s*=\s*"([^"]*)""#).expect("valid img regex")
    })
}

/// Extract every `(label, image reference)` pair from a saved page.
///
/// Rules:
/// - a label is `flag<digits>` as a whole word (case-sensitive) appearing in
///   text, not inside a tag;
/// - it pairs with the first `<img>` after it on the same line and before the
///   next label; only the `src` attribute counts (`srcset`, `data-src` don't),
///   and self-closing tags are fine;
/// - labels with no image on their line, or whose number overflows `u32`, are
///   dropped;
/// - results keep document order, duplicates included.
pub fn extract_flag_refs(text: &str) -> Vec<FlagRef> {
    let mut refs = Vec::new();

    for line in text.lines() {
        let labels: Vec<_> = label_regex()
            .captures_iter(line)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                if inside_tag(line, whole.start()) {
                    return None;
                }
                Some((whole.start(), whole.end(), caps[1].parse::<u32>().ok()))
            })
            .collect();

        for (pos, &(_, end, index)) in labels.iter().enumerate() {
            let stop = labels.get(pos + 1).map_or(line.len(), |next| next.0);
            let Some(index) = index else {
                log::debug!("Ignoring oversized flag label in saved page");
                continue;
            };
            let Some(caps) = img_src_regex().captures(&line[end..stop]) else {
                continue;
            };
            refs.push(FlagRef {
                index,
                src: html_escape::decode_html_entities(&caps[1]).into_owned(),
            });
        }
    }

    refs
}

/// True when `pos` sits between a `<` and its closing `>`.
fn inside_tag(line: &str, pos: usize) -> bool {
    let before = &line[..pos];
    match (before.rfind('<'), before.rfind('>')) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}
