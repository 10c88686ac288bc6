/// A label type an automaton is keyed on.
///
/// Labels must be copyable, orderable, and convertible to `u32` so the
/// [`CodeMapper`](crate::CodeMapper) can index them directly. `char` keys the
/// text-facing API (one label per Unicode codepoint); `u8` works on raw bytes.
pub trait Label: Copy + Ord + Into<u32> + std::fmt::Debug {
    /// One past the largest value `Into<u32>` can produce for this type.
    const ALPHABET_SIZE: u32;
}

impl Label for u8 {
    const ALPHABET_SIZE: u32 = 256;
}

impl Label for char {
    const ALPHABET_SIZE: u32 = 0x11_0000;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code<L: Label>(label: L) -> u32 {
        label.into()
    }

    #[test]
    fn codes_fit_alphabet() {
        for b in [0u8, 1, 127, 255] {
            assert!(code(b) < u8::ALPHABET_SIZE);
        }
        for c in ['a', 'z', '哦', '啦', '\u{10FFFF}'] {
            assert!(code(c) < char::ALPHABET_SIZE);
        }
    }

    #[test]
    fn char_code_is_codepoint() {
        assert_eq!(code('g'), 0x67);
        assert_eq!(code('下'), 0x4E0B);
    }
}
