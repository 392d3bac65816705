//! Sample genealogy files used across the end-to-end tests.

use gedtone_spec::Month;

/// A small family tree with dates in several months.
///
/// Month occurrences: JAN x2, MAR x2, JUN x3, DEC x1. The header `DATE` line
/// and the `NOTE` line that mentions DATE both count.
pub const FAMILY_TREE: &str = "\
0 HEAD
1 SOUR gedtone
1 DATE 3 JUN 2024
1 CHAR UTF-8
0 @I1@ INDI
1 NAME Anna /Virtanen/
1 BIRT
2 DATE 12 JAN 1899
2 PLAC Tampere
1 DEAT
2 DATE ABT DEC 1960
0 @I2@ INDI
1 NAME Eino /Virtanen/
1 BIRT
2 DATE 21 JUN 1901
1 MARR
2 DATE BEF 14 jan 1925
0 @I3@ INDI
1 NAME Aino /Virtanen/
1 BIRT
2 DATE 30 Jun 1927
1 CHR
2 DATE 2 MAR 1927
1 NOTE Baptised in MAR, see DATE below
2 DATE 1927
0 TRLR
";

/// Expected months of [`FAMILY_TREE`] in file order.
pub fn family_tree_months() -> Vec<Month> {
    vec![
        Month::Jun,
        Month::Jan,
        Month::Dec,
        Month::Jun,
        Month::Jan,
        Month::Jun,
        Month::Mar,
        Month::Mar,
    ]
}

/// A file with date lines but no recognizable months.
pub const NO_MONTHS: &str = "\
0 HEAD
0 @I1@ INDI
1 BIRT
2 DATE 1900
2 DATE ABT 1901
1 NOTE Born in MAY
0 TRLR
";

/// A tree with Windows line endings and bytes that are not valid UTF-8.
pub fn messy_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"0 HEAD\r\n");
    bytes.extend_from_slice(b"2 DATE 1 \xff\xfeAPR 1900\r\n");
    bytes.extend_from_slice(b"2 DATE 5 \xc3\x28 SEP 1910\r\n");
    bytes.extend_from_slice(b"0 TRLR\r\n");
    bytes
}

/// Expected months of [`messy_bytes`].
pub fn messy_bytes_months() -> Vec<Month> {
    vec![Month::Apr, Month::Sep]
}
