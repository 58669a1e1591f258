//! Sender-side bit stream construction
//!
//! Turns a decimal value and its decimal points into the exact sequence of
//! bits the sender clocks out after the announcing edge.

use heapless::Vec;

use crate::code::{CodeError, DigitCode, CODE_BITS};

/// Maximum digits in one session
pub const MAX_DIGITS: usize = 8;

/// Maximum bits in one session (announcing edge excluded)
pub const MAX_STREAM_BITS: usize = MAX_DIGITS * CODE_BITS as usize;

/// Bits of one session, in transmission order
pub type BitStream = Vec<bool, MAX_STREAM_BITS>;

/// Encode a value as a session of `digits` codes
///
/// - `value`: decimal value, padded with leading zeros to `digits`
/// - `dots`: bit *i* lights the decimal point of the *i*-th digit sent
///   (bit 0 is the leading digit)
/// - `digits`: number of codes in the session (1-8)
pub fn encode(value: u32, dots: u8, digits: u8) -> Result<BitStream, CodeError> {
    let count = digits as usize;
    if count == 0 || count > MAX_DIGITS {
        return Err(CodeError::InvalidDigitCount);
    }

    // Split into decimal digits, most significant first
    let mut split = [0u8; MAX_DIGITS];
    let mut rest = value;
    for slot in split[..count].iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }
    if rest != 0 {
        return Err(CodeError::ValueTooLarge);
    }

    let mut codes: Vec<DigitCode, MAX_DIGITS> = Vec::new();
    for (index, &digit) in split[..count].iter().enumerate() {
        let code = DigitCode::from_digit(digit, dots & (1 << index) != 0)?;
        codes.push(code).map_err(|_| CodeError::InvalidDigitCount)?;
    }

    encode_codes(&codes)
}

/// Encode already-built codes, in the order given
///
/// Useful for sending malformed codes on purpose when exercising a
/// receiver.
pub fn encode_codes(codes: &[DigitCode]) -> Result<BitStream, CodeError> {
    if codes.is_empty() || codes.len() > MAX_DIGITS {
        return Err(CodeError::InvalidDigitCount);
    }

    let mut stream = BitStream::new();
    for code in codes {
        for bit in code.bits() {
            stream.push(bit).map_err(|_| CodeError::InvalidDigitCount)?;
        }
    }
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::CodeAssembler;

    fn decode(stream: &[bool]) -> Vec<DigitCode, MAX_DIGITS> {
        let mut assembler = CodeAssembler::new();
        let mut codes = Vec::new();
        for &bit in stream {
            if let Some(code) = assembler.push(bit) {
                codes.push(code).unwrap();
            }
        }
        assert!(assembler.is_idle());
        codes
    }

    #[test]
    fn test_encode_year() {
        let stream = encode(2019, 0, 4).unwrap();
        assert_eq!(stream.len(), 20);

        let digits: Vec<u8, MAX_DIGITS> = decode(&stream)
            .iter()
            .map(|code| code.digit().unwrap())
            .collect();
        assert_eq!(&digits[..], &[2, 0, 1, 9]);
    }

    #[test]
    fn test_leading_zeros() {
        let stream = encode(7, 0, 3).unwrap();
        let codes = decode(&stream);
        assert_eq!(codes[0].digit(), Some(0));
        assert_eq!(codes[1].digit(), Some(0));
        assert_eq!(codes[2].digit(), Some(7));
    }

    #[test]
    fn test_dots_follow_send_order() {
        let stream = encode(1234, 0b0010, 4).unwrap();
        let codes = decode(&stream);
        assert!(!codes[0].has_dot());
        assert!(codes[1].has_dot());
        assert_eq!(codes[1].digit(), Some(2));
    }

    #[test]
    fn test_value_too_large() {
        assert_eq!(encode(10_000, 0, 4), Err(CodeError::ValueTooLarge));
    }

    #[test]
    fn test_invalid_digit_count() {
        assert_eq!(encode(1, 0, 0), Err(CodeError::InvalidDigitCount));
        assert_eq!(encode(1, 0, 9), Err(CodeError::InvalidDigitCount));
        assert_eq!(encode_codes(&[]), Err(CodeError::InvalidDigitCount));
    }

    #[test]
    fn test_first_bit_is_lsb_of_leading_digit() {
        // 1 = 0b00001: first bit on the wire is high, the next four low
        let stream = encode(1000, 0, 4).unwrap();
        assert_eq!(&stream[..5], &[true, false, false, false, false]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_stream_decodes_to_value(value in 0u32..100_000_000, dots in any::<u8>()) {
                let stream = encode(value, dots, 8).unwrap();
                prop_assert_eq!(stream.len(), MAX_STREAM_BITS);

                let mut decoded = 0u32;
                for (index, code) in decode(&stream).iter().enumerate() {
                    decoded = decoded * 10 + code.digit().unwrap() as u32;
                    prop_assert_eq!(code.has_dot(), dots & (1 << index) != 0);
                }
                prop_assert_eq!(decoded, value);
            }
        }
    }
}
