use fancy_regex::Regex;
use std::sync::LazyLock;

static MEMORY_OPERAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(lbu|lhu|lwu|lb|lh|lw|ld|sb|sh|sw|sd)\s+\w+\s*,\s*(-?(?:0[xX][0-9a-fA-F]+|\d+))\s*\(\s*(\w+)\s*\)",
    )
    .expect("valid memory operand pattern")
});

const MNEMONICS: [&str; 11] = [
    "lb", "lh", "lw", "ld", "lbu", "lhu", "lwu", "sb", "sh", "sw", "sd",
];

const SKIPPED_PREFIXES: [&str; 3] = ["Cycle", "------", "Note"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Load,
    Store,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryReference {
    pub kind: AccessKind,
    pub mnemonic: &'static str,
    pub address: u64,
}

/// Extracts the memory reference from one pipeline-trace line.
///
/// Lines look like `cycle | stage | instruction | ...`; only the third field
/// is inspected. Returns `None` for headers, separators, notes, lines with
/// fewer than three fields, non-memory instructions, and loads/stores whose
/// base register is not the zero register (the effective address is unknown
/// without register state).
pub fn parse_trace_line(line: &str) -> Option<MemoryReference> {
    let line = line.trim();

    if line.is_empty() || SKIPPED_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return None;
    }

    let instruction = line.split('|').nth(2)?.trim();
    let captures = MEMORY_OPERAND.captures(instruction).ok().flatten()?;

    let matched = captures.get(1)?.as_str();
    let mnemonic = MNEMONICS.iter().copied().find(|m| *m == matched)?;
    let kind = if mnemonic.starts_with('l') {
        AccessKind::Load
    } else {
        AccessKind::Store
    };

    let base = captures.get(3)?.as_str();
    if !is_zero_register(base) {
        return None;
    }

    let address = parse_offset(captures.get(2)?.as_str())?;
    Some(MemoryReference {
        kind,
        mnemonic,
        address,
    })
}

fn is_zero_register(name: &str) -> bool {
    name == "x0" || name == "zero"
}

/// Non-negative decimal or `0x` hex; negative offsets off x0 have no valid
/// address.
fn parse_offset(literal: &str) -> Option<u64> {
    if literal.starts_with('-') {
        return None;
    }

    match literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => literal.parse().ok(),
    }
}
