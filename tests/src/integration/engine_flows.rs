//! # Engine Flows
//!
//! Mode factory -> `update` -> `digest` / `reader`, checked against the
//! `blake3` reference crate and fixed golden values.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::fixtures::{seeded_input, EMPTY_HASH, GOODBYE_HASH, HELLO_HASH};
    use proptest::prelude::*;
    use xof_engine::{
        create_derive_key, create_keyed, create_standard, derive_key, hash, keyed_hash,
        XofError, DEFAULT_HASH_LENGTH,
    };

    // =============================================================================
    // GOLDEN VALUES
    // =============================================================================

    #[test]
    fn test_empty_input_golden() {
        let mut engine = create_standard();
        engine.update([0u8; 0]);
        assert_eq!(hex::encode(engine.digest()), EMPTY_HASH);
        assert_eq!(hex::encode(hash(b"")), EMPTY_HASH);
    }

    #[test]
    fn test_known_inputs() {
        for (input, expected) in [(&b"hello"[..], HELLO_HASH), (&b"goodbye"[..], GOODBYE_HASH)] {
            let mut engine = create_standard();
            engine.update(input);
            assert_eq!(engine.digest_hex(DEFAULT_HASH_LENGTH), expected);
            assert_eq!(engine.reader().to_hex(), expected);
        }
    }

    #[test]
    fn test_large_input_matches_reference() {
        // spans many BLAKE3 chunks
        let input = seeded_input(1 << 20, 7);
        let mut engine = create_standard();
        for piece in input.chunks(4093) {
            engine.update(piece);
        }

        let mut expected = vec![0u8; 2000];
        blake3::Hasher::new()
            .update(&input)
            .finalize_xof()
            .fill(&mut expected);
        assert_eq!(engine.digest_with_length(2000), expected);
    }

    // =============================================================================
    // MODES
    // =============================================================================

    #[test]
    fn test_keyed_length_enforcement() {
        let input = b"authenticated payload";
        for bad in [31usize, 33] {
            assert_eq!(
                create_keyed(vec![0x11; bad]).unwrap_err(),
                XofError::InvalidKeyLength {
                    expected: 32,
                    actual: bad
                }
            );
        }

        let key = [0x11u8; 32];
        let mut keyed = create_keyed(key).unwrap();
        keyed.update(input);
        let mut standard = create_standard();
        standard.update(input);

        assert_ne!(keyed.digest(), standard.digest());
        assert_eq!(
            keyed.digest(),
            blake3::keyed_hash(&key, input).as_bytes().to_vec()
        );
        assert_eq!(keyed_hash(&key, input).unwrap().to_vec(), keyed.digest());
    }

    #[test]
    fn test_keyed_extended_output_matches_reference() {
        let key = [0x5Au8; 32];
        let mut engine = create_keyed(key).unwrap();
        engine.update(b"stream");

        let mut expected = vec![0u8; 300];
        blake3::Hasher::new_keyed(&key)
            .update(b"stream")
            .finalize_xof()
            .fill(&mut expected);
        assert_eq!(engine.digest_with_length(300), expected);
    }

    #[test]
    fn test_derive_key_flow() {
        let context = "keystream 2024-06-01 integration subkeys";
        let mut engine = create_derive_key(context.as_bytes()).unwrap();
        engine.update(b"input key material");

        let expected = blake3::derive_key(context, b"input key material");
        assert_eq!(engine.digest(), expected.to_vec());
        assert_eq!(
            derive_key(context.as_bytes(), b"input key material").unwrap(),
            expected
        );

        let empty_context = create_derive_key(b"").unwrap();
        assert_eq!(empty_context.digest().len(), 32);
    }

    // =============================================================================
    // ENGINE LIFECYCLE
    // =============================================================================

    #[test]
    fn test_digest_reflects_cumulative_input() {
        let mut engine = create_standard();
        engine.update(b"good");
        let partial = engine.digest();
        engine.update(b"bye");

        assert_ne!(engine.digest(), partial);
        assert_eq!(engine.digest_hex(32), GOODBYE_HASH);
    }

    #[test]
    fn test_many_readers_are_independent() {
        let mut engine = create_standard();
        let mut readers = Vec::new();
        for i in 0..5u8 {
            engine.update([i]);
            readers.push(engine.reader());
        }

        let mut prefix = Vec::new();
        for (i, reader) in readers.iter_mut().enumerate() {
            prefix.push(i as u8);
            reader.set_position(64);
            let mut reference = vec![0u8; 32];
            let mut out = blake3::Hasher::new().update(&prefix).finalize_xof();
            out.set_position(64);
            out.fill(&mut reference);
            assert_eq!(reader.read(32), reference);
        }
    }

    #[test]
    fn test_io_copy_into_engine() {
        let input = seeded_input(100_000, 3);
        let mut engine = create_standard();
        let copied = std::io::copy(&mut input.as_slice(), &mut engine).unwrap();
        engine.flush().unwrap();

        assert_eq!(copied, input.len() as u64);
        assert_eq!(engine.digest().as_slice(), blake3::hash(&input).as_bytes());
    }

    proptest! {
        #[test]
        fn prop_incremental_equivalence(
            input in proptest::collection::vec(any::<u8>(), 0..10_000),
            cut in any::<prop::sample::Index>(),
        ) {
            let split = cut.index(input.len() + 1);
            let mut incremental = create_standard();
            incremental.update(&input[..split]).update(&input[split..]);

            let got = incremental.digest();
            let expected = blake3::hash(&input);
            prop_assert_eq!(got.as_slice(), expected.as_bytes());
        }
    }
}
