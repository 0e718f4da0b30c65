use std::fmt::Display;

use matroid::Matroid;
use matroid_core::sets::subsets_of_size;
use matroid_core::{Element, ErrorInfo, Family, MatroidError, Payload, Set};
use serde::{Deserialize, Serialize};

/// Symbols and layout used by [`encode`] and [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOpts {
    /// Marks an r-subset that is a basis.
    pub basis_symbol: char,
    /// Marks an r-subset that is not a basis.
    pub non_basis_symbol: char,
    /// Prefix the code with r lines spelling out the subset order, every
    /// column padded to the widest label.
    pub show_order: bool,
}

impl Default for EncodeOpts {
    fn default() -> Self {
        Self {
            basis_symbol: '*',
            non_basis_symbol: '0',
            show_order: false,
        }
    }
}

/// The r-subsets of `ground`, sorted by their member tuples read from the
/// largest element down.
pub fn revlex_subsets<T: Element>(ground: &Set<T>, rank: usize) -> Vec<Set<T>> {
    let mut subsets = subsets_of_size(ground, rank);
    subsets.sort_by(|a, b| a.iter().rev().cmp(b.iter().rev()));
    subsets
}

/// C(n, k), or `None` when it does not fit in a `usize`.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut count = 1usize;
    for step in 0..k {
        // count * (n - step) is divisible by step + 1 at every step.
        count = count.checked_mul(n - step)? / (step + 1);
    }
    Some(count)
}

/// Encodes the bases of `matroid` as a RevLex-Index string.
///
/// With `show_order`, line i of the prefix lists the i-th smallest member of
/// every r-subset above the code character of that subset. Every column is
/// right-aligned to the widest label, so once a label needs more than one
/// character the code line is spaced out to match.
pub fn encode<T: Element + Display>(matroid: &Matroid<T>, opts: &EncodeOpts) -> String {
    let subsets = revlex_subsets(matroid.ground_set(), matroid.rank());
    let bases = matroid.bases();
    let symbols: Vec<char> = subsets
        .iter()
        .map(|subset| {
            if bases.contains(subset) {
                opts.basis_symbol
            } else {
                opts.non_basis_symbol
            }
        })
        .collect();
    if !opts.show_order {
        return symbols.into_iter().collect();
    }
    let width = matroid
        .ground_set()
        .iter()
        .map(|element| element.to_string().chars().count())
        .max()
        .unwrap_or(1);
    let mut lines: Vec<String> = (0..matroid.rank())
        .map(|position| {
            subsets
                .iter()
                .filter_map(|subset| subset.iter().nth(position))
                .map(|element| format!("{:>width$}", element.to_string()))
                .collect()
        })
        .collect();
    lines.push(
        symbols
            .iter()
            .map(|symbol| format!("{symbol:>width$}"))
            .collect(),
    );
    lines.join("\n")
}

/// Rebuilds a matroid on {1..`size`} from a RevLex-Index string.
///
/// Fails with `FormatViolation` when the code length differs from
/// C(size, rank) or a character is neither symbol, and with `AxiomViolation`
/// when the marked subsets are not the bases of a matroid.
#[tracing::instrument(level = "debug", skip(code, opts))]
pub fn decode(
    code: &str,
    size: usize,
    rank: usize,
    opts: &EncodeOpts,
) -> Result<Matroid<usize>, MatroidError> {
    if opts.basis_symbol == opts.non_basis_symbol {
        let info = ErrorInfo::new("ambiguous-symbols", "basis and non-basis symbols coincide")
            .with_context("symbol", opts.basis_symbol.to_string());
        return Err(MatroidError::FormatViolation(info));
    }
    let symbols: Vec<char> = code.chars().collect();
    let expected = binomial(size, rank);
    if expected != Some(symbols.len()) {
        let expected = expected.map_or_else(|| "overflow".to_string(), |count| count.to_string());
        let info = ErrorInfo::new(
            "code-length-mismatch",
            "code length must equal the number of rank-sized subsets",
        )
        .with_context("expected", expected)
        .with_context("actual", symbols.len().to_string())
        .with_hint("pass the size and rank the code was produced with");
        return Err(MatroidError::FormatViolation(info));
    }
    if let Some((position, symbol)) = symbols
        .iter()
        .enumerate()
        .find(|(_, symbol)| **symbol != opts.basis_symbol && **symbol != opts.non_basis_symbol)
    {
        let info = ErrorInfo::new("unknown-symbol", "code contains a symbol outside the alphabet")
            .with_context("position", position.to_string())
            .with_context("symbol", symbol.to_string());
        return Err(MatroidError::FormatViolation(info));
    }
    let ground: Set<usize> = (1..=size).collect();
    let bases: Family<usize> = revlex_subsets(&ground, rank)
        .into_iter()
        .zip(symbols)
        .filter(|(_, symbol)| *symbol == opts.basis_symbol)
        .map(|(subset, _)| subset)
        .collect();
    Matroid::new(ground, Payload::Bases(bases))
}

#[cfg(test)]
mod tests {
    use super::*;
    use matroid_core::{family, set};

    #[test]
    fn revlex_order_of_two_subsets() {
        let order = revlex_subsets(&set([1u8, 2, 3, 4]), 2);
        let expected: Vec<Set<u8>> = [[1u8, 2], [1, 3], [2, 3], [1, 4], [2, 4], [3, 4]]
            .into_iter()
            .map(set)
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn partition_matroid_encoding() {
        let matroid = Matroid::new(
            set([1u8, 2, 3]),
            Payload::Bases(family([vec![1u8, 2], vec![1, 3]])),
        )
        .unwrap();
        assert_eq!(encode(&matroid, &EncodeOpts::default()), "**0");
        let opts = EncodeOpts {
            basis_symbol: 'B',
            non_basis_symbol: '.',
            show_order: true,
        };
        assert_eq!(encode(&matroid, &opts), "112\n233\nBB.");
    }

    #[test]
    fn binomial_counts_and_overflow() {
        assert_eq!(binomial(4, 2), Some(6));
        assert_eq!(binomial(34, 17), Some(2_333_606_220));
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(3, 5), Some(0));
        assert_eq!(binomial(200, 100), None);
    }

    #[test]
    fn order_lines_align_multi_digit_labels() {
        let ground = set([9u8, 10, 11]);
        let matroid = Matroid::new(
            ground,
            Payload::Bases(family([vec![9u8], vec![10], vec![11]])),
        )
        .unwrap();
        let opts = EncodeOpts {
            show_order: true,
            ..EncodeOpts::default()
        };
        assert_eq!(encode(&matroid, &opts), " 91011\n * * *");
    }

    #[test]
    fn empty_matroid_encodes_single_basis() {
        let matroid: Matroid<u8> =
            Matroid::new(Set::new(), Payload::Bases(family([Vec::<u8>::new()]))).unwrap();
        assert_eq!(encode(&matroid, &EncodeOpts::default()), "*");
        let decoded = decode("*", 0, 0, &EncodeOpts::default()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn decode_rejects_foreign_symbols() {
        let err = decode("*x0", 3, 2, &EncodeOpts::default()).unwrap_err();
        assert!(matches!(err, MatroidError::FormatViolation(_)));
        assert_eq!(err.code(), "unknown-symbol");
        assert_eq!(err.info().context.get("position").map(String::as_str), Some("1"));
    }

    #[test]
    fn decode_rejects_non_matroids() {
        // {1,2} and {3,4} alone violate basis exchange.
        let err = decode("*0000*", 4, 2, &EncodeOpts::default()).unwrap_err();
        assert!(matches!(err, MatroidError::AxiomViolation(_)));
    }

    #[test]
    fn decode_rejects_identical_symbols() {
        let opts = EncodeOpts {
            basis_symbol: '*',
            non_basis_symbol: '*',
            show_order: false,
        };
        assert_eq!(decode("***", 3, 2, &opts).unwrap_err().code(), "ambiguous-symbols");
    }
}
