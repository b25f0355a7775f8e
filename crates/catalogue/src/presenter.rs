//! Human-readable rendering of codes.

use crate::catalogue::Catalogue;
use crate::types::{Code, CodeId};

/// Lowercase hex without prefix; negative ids keep their sign
pub fn format_hex(id: CodeId) -> String {
    if id < 0 {
        format!("-{:x}", id.unsigned_abs())
    } else {
        format!("{id:x}")
    }
}

/// Parse an id in the form [`format_hex`] prints.
///
/// Digits are always hex; a `0x` prefix is accepted. Decimal ids go through
/// [`str::parse`] instead.
pub fn parse_id(text: &str) -> Option<CodeId> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    let magnitude = u64::from_str_radix(digits, 16).ok()?;

    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        CodeId::try_from(magnitude).ok()
    }
}

/// "hexId `name`" for `id`; the name is empty when the id does not resolve
pub fn reference_line(catalogue: &Catalogue, id: CodeId) -> String {
    let name = catalogue.get_by_id(id).map(Code::name).unwrap_or_default();
    format!("{} `{}`", format_hex(id), name)
}

/// Multi-line summary of a code with its group, members and subset entries
pub fn render(catalogue: &Catalogue, code: &Code) -> String {
    let mut out = String::new();
    let limit = catalogue.config().listing_limit;

    out.push_str(&format!(
        "Syscode {} = decimal {}\n",
        format_hex(code.id()),
        code.id()
    ));
    out.push_str(&format!("\tcode: `{}`\n", code.code()));
    out.push_str(&format!("\tname: `{}`\n", code.name()));
    out.push_str(&format!(
        "\tshort translation: _{}_ : _{}_\n",
        code.german_short(),
        code.english_short()
    ));
    out.push_str(&format!(
        "\tmedium translation: _{}_ : _{}_\n",
        code.german_medium(),
        code.english_medium()
    ));

    out.push_str(&format!("\tgroup: {}", format_hex(code.group_id())));
    if let Some(group) = catalogue.get_by_id(code.group_id()) {
        out.push_str(&format!(" `{}`", group.name()));
    }
    out.push('\n');

    if !code.children().is_empty() {
        let count = code.children().len();
        out.push_str(&format!("\t{count} group {} found\n", MEMBERS.for_count(count)));
        let ids = code.children().iter().copied();
        write_listing(&mut out, catalogue, ids, count, limit, MEMBERS);
    }

    if !code.subset_entries().is_empty() {
        let count = code.subset_entries().len();
        out.push_str(&format!("\t{count} subset {} found\n", ENTRIES.for_count(count)));
        let ids = code.subset_entries().iter().map(|entry| entry.id);
        write_listing(&mut out, catalogue, ids, count, limit, ENTRIES);
    }

    out
}

fn write_listing(
    out: &mut String,
    catalogue: &Catalogue,
    ids: impl Iterator<Item = CodeId>,
    count: usize,
    limit: usize,
    noun: Noun,
) {
    for id in ids.take(limit) {
        out.push_str(&format!("\t\t{}\n", reference_line(catalogue, id)));
    }
    if count > limit {
        let skipped = count - limit;
        out.push_str(&format!(
            "\t\t... _(skipping {skipped} {})_\n",
            noun.for_count(skipped)
        ));
    }
}

const MEMBERS: Noun = Noun::new("member", "members");
const ENTRIES: Noun = Noun::new("entry", "entries");

#[derive(Clone, Copy)]
struct Noun {
    singular: &'static str,
    plural: &'static str,
}

impl Noun {
    const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }

    fn for_count(self, count: usize) -> &'static str {
        if count == 1 {
            self.singular
        } else {
            self.plural
        }
    }
}
