// src/model/shells.rs
//
// Per-shell electron counts for the atom diagram. Derived from the textual
// electron configuration when it is consistent with the atomic number,
// otherwise filled greedily using Bohr shell capacities.

use std::fmt;
use thiserror::Error;

pub const SHELL_COUNT: usize = 7;

/// Capacities used by the Bohr fill, K through Q.
pub const SHELL_CAPACITY: [u32; SHELL_COUNT] = [2, 8, 18, 32, 32, 18, 8];

pub const SHELL_LABELS: [char; SHELL_COUNT] = ['K', 'L', 'M', 'N', 'O', 'P', 'Q'];

/// Occupancy of the seven principal shells (index 0 = K).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shells([u32; SHELL_COUNT]);

impl Shells {
    pub const fn new(counts: [u32; SHELL_COUNT]) -> Self {
        Self(counts)
    }

    pub fn as_array(&self) -> &[u32; SHELL_COUNT] {
        &self.0
    }

    pub fn total(&self) -> u32 {
        self.0.iter().fold(0u32, |acc, &c| acc.saturating_add(c))
    }

    /// Non-empty shells as (index, count).
    pub fn occupied(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0.iter().copied().enumerate().filter(|&(_, c)| c > 0)
    }

    /// True when any shell holds more than its Bohr capacity. Derived vectors
    /// are only checked against the total, so this can happen for odd input.
    pub fn exceeds_capacity(&self) -> bool {
        self.0
            .iter()
            .zip(SHELL_CAPACITY.iter())
            .any(|(count, cap)| count > cap)
    }

    pub fn label(shell: usize) -> char {
        SHELL_LABELS.get(shell).copied().unwrap_or('?')
    }
}

/// Compact form: "K2 L8 M8".
impl fmt::Display for Shells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (idx, count) in self.occupied() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", Shells::label(idx), count)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("electron count '{0}' is out of range")]
    CountOverflow(String),
    #[error("configuration gives {found} electrons, atomic number is {expected}")]
    Mismatch { found: u64, expected: u32 },
}

/// Greedy Bohr fill: each shell in turn takes `min(remaining, capacity)`.
/// Electrons beyond the summed capacity (120) are not represented.
pub fn fallback(atomic_number: u32) -> Shells {
    let mut shells = [0u32; SHELL_COUNT];
    let mut remaining = atomic_number;

    for (slot, &cap) in shells.iter_mut().zip(SHELL_CAPACITY.iter()) {
        if remaining == 0 {
            break;
        }
        let placed = remaining.min(cap);
        *slot = placed;
        remaining -= placed;
    }

    Shells(shells)
}

/// Best-effort shell occupancy for the diagram. Never fails: anything that
/// does not decode to exactly `atomic_number` electrons is replaced by
/// [`fallback`].
pub fn derive(config: &str, atomic_number: u32) -> Shells {
    if config.is_empty() {
        return fallback(atomic_number);
    }

    match parse(config, atomic_number) {
        Ok(shells) => shells,
        Err(e @ ShellError::Mismatch { .. }) => {
            log::warn!("Electron count mismatch for Z={}: {}", atomic_number, e);
            fallback(atomic_number)
        }
        Err(e) => {
            log::error!("Error parsing electron configuration '{}': {}", config, e);
            fallback(atomic_number)
        }
    }
}

/// Strict decode of `config`. Succeeds only when the summed terms equal
/// `atomic_number`.
pub fn parse(config: &str, atomic_number: u32) -> Result<Shells, ShellError> {
    let mut shells = [0u32; SHELL_COUNT];

    // Only the first bracketed token is expanded and removed.
    let stripped;
    let mut body = config;
    if let Some((open, close)) = find_bracket(config) {
        if let Some(core) = noble_gas_core(&config[open + 1..close]) {
            shells = core;
        }
        stripped = format!("{}{}", &config[..open], &config[close + 1..]);
        body = stripped.trim();
    }

    for term in scan_terms(body) {
        let (shell, digits) = term;
        let count: u32 = digits
            .parse()
            .map_err(|_| ShellError::CountOverflow(digits.to_string()))?;

        // Shell numbers outside 1..=7 contribute nothing.
        let Some(idx) = shell.checked_sub(1).filter(|&i| i < SHELL_COUNT) else {
            continue;
        };
        shells[idx] = shells[idx]
            .checked_add(count)
            .ok_or_else(|| ShellError::CountOverflow(digits.to_string()))?;
    }

    let found: u64 = shells.iter().map(|&c| c as u64).sum();
    if found != atomic_number as u64 {
        return Err(ShellError::Mismatch {
            found,
            expected: atomic_number,
        });
    }

    Ok(Shells(shells))
}

/// Full-shell occupancy of the six recognised noble-gas cores. Anything else
/// inside brackets is ignored.
fn noble_gas_core(symbol: &str) -> Option<[u32; SHELL_COUNT]> {
    let core = match symbol {
        "He" => [2, 0, 0, 0, 0, 0, 0],
        "Ne" => [2, 8, 0, 0, 0, 0, 0],
        "Ar" => [2, 8, 8, 0, 0, 0, 0],
        "Kr" => [2, 8, 18, 8, 0, 0, 0],
        "Xe" => [2, 8, 18, 18, 8, 0, 0],
        "Rn" => [2, 8, 18, 32, 18, 8, 0],
        _ => return None,
    };
    Some(core)
}

/// Byte range of the first `[...]` pair with no line break inside.
fn find_bracket(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    for (open, _) in text.match_indices('[') {
        for (off, &b) in bytes[open + 1..].iter().enumerate() {
            match b {
                b']' => return Some((open, open + 1 + off)),
                b'\n' | b'\r' => break,
                _ => {}
            }
        }
    }
    None
}

/// Left-to-right, non-overlapping scan for `digit [spdfg] digit+` terms.
/// Yields (shell number, electron count digits).
fn scan_terms(text: &str) -> Vec<(usize, &str)> {
    let bytes = text.as_bytes();
    let mut terms = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let is_term = i + 2 < bytes.len()
            && bytes[i].is_ascii_digit()
            && matches!(bytes[i + 1], b's' | b'p' | b'd' | b'f' | b'g')
            && bytes[i + 2].is_ascii_digit();

        if !is_term {
            i += 1;
            continue;
        }

        let start = i + 2;
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        terms.push(((bytes[i] - b'0') as usize, &text[start..end]));
        i = end;
    }

    terms
}
