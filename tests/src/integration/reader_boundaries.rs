//! # Reader Boundaries
//!
//! Positioned reads across the keystream, including the `2^64 - 1` ceiling,
//! against `blake3::OutputReader` as the reference.

#[cfg(test)]
mod tests {
    use std::io::{Read, Seek, SeekFrom};

    use crate::fixtures::seeded_input;
    use proptest::prelude::*;
    use xof_engine::{create_standard, HashEngine, ITERATOR_STEP_SIZE, MAX_HASH_POSITION};

    fn engine_with(input: &[u8]) -> HashEngine {
        let mut engine = create_standard();
        engine.update(input);
        engine
    }

    fn reference(input: &[u8], position: u64, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        let mut reader = blake3::Hasher::new().update(input).finalize_xof();
        reader.set_position(position);
        reader.fill(&mut out);
        out
    }

    #[test]
    fn test_read_at_offsets_matches_reference() {
        let input = seeded_input(5000, 11);
        let engine = engine_with(&input);

        for position in [0u64, 1, 63, 64, 65, 1023, 1024, 1 << 32, 1 << 40] {
            let mut reader = engine.reader();
            reader.set_position(position);
            assert_eq!(
                reader.read(200),
                reference(&input, position, 200),
                "position {}",
                position
            );
            assert_eq!(reader.position(), position + 200);
        }
    }

    #[test]
    fn test_read_truncates_at_ceiling() {
        let mut reader = engine_with(b"edge").reader();
        reader.set_position(MAX_HASH_POSITION - 3);

        let tail = reader.read(100);
        assert_eq!(tail.len(), 3);
        assert_eq!(tail, reference(b"edge", MAX_HASH_POSITION - 3, 3));
        assert_eq!(reader.position(), MAX_HASH_POSITION);
        assert!(reader.is_exhausted());
        assert!(reader.read(1).is_empty());
    }

    #[test]
    fn test_read_into_partial_fill_at_ceiling() {
        let mut reader = engine_with(b"edge").reader();
        reader.set_position(MAX_HASH_POSITION - 2);

        let mut buf = [0xAAu8; 8];
        assert_eq!(reader.read_into(&mut buf), 2);
        assert_eq!(&buf[..2], reference(b"edge", MAX_HASH_POSITION - 2, 2).as_slice());
        assert_eq!(&buf[2..], &[0xAA; 6]);
        assert_eq!(reader.read_into(&mut buf), 0);
    }

    #[test]
    fn test_chunks_equal_contiguous_read_near_ceiling() {
        let input = b"chunked";
        let engine = engine_with(input);
        let start = MAX_HASH_POSITION - 4096;

        let mut chunked = engine.reader();
        chunked.set_position(start);
        let chunks: Vec<Vec<u8>> = chunked.chunks().collect();
        assert_eq!(chunks.len(), 4);
        assert!(chunks.iter().all(|c| c.len() == ITERATOR_STEP_SIZE));
        assert!(chunked.chunks().next().is_none());

        let mut contiguous = engine.reader();
        contiguous.set_position(start);
        let flat = contiguous.read(4096);
        assert_eq!(chunks.concat(), flat);
        assert_eq!(flat, reference(input, start, 4096));
    }

    #[test]
    fn test_chunks_final_chunk_is_short() {
        let mut reader = create_standard().reader();
        reader.set_position(MAX_HASH_POSITION - 2500);

        let lengths: Vec<usize> = reader.chunks().map(|c| c.len()).collect();
        assert_eq!(lengths, vec![1024, 1024, 452]);
    }

    #[test]
    fn test_chunks_interleave_with_reads() {
        let engine = engine_with(b"mixed");
        let mut reader = engine.reader();

        let head = reader.read(10);
        let chunk = reader.chunks().next().unwrap();
        let tail = reader.read(6);

        let mut joined = head;
        joined.extend(chunk);
        joined.extend(tail);
        assert_eq!(joined, reference(b"mixed", 0, 10 + ITERATOR_STEP_SIZE + 6));
    }

    #[test]
    fn test_reader_ignores_later_updates() {
        let mut engine = engine_with(b"before");
        let mut reader = engine.reader();
        engine.update(b" after");

        assert_eq!(reader.read(64), reference(b"before", 0, 64));
        assert_eq!(engine.digest(), reference(b"before after", 0, 32));
    }

    #[test]
    fn test_io_read_and_seek() {
        let input = seeded_input(300, 5);
        let mut reader = engine_with(&input).reader();

        reader.seek(SeekFrom::Start(4096)).unwrap();
        let mut buf = [0u8; 48];
        reader.read_exact(&mut buf).unwrap();
        assert_eq!(buf.to_vec(), reference(&input, 4096, 48));

        let pos = reader.seek(SeekFrom::End(-16)).unwrap();
        assert_eq!(pos, MAX_HASH_POSITION - 16);
        let mut rest = Vec::new();
        reader.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, reference(&input, MAX_HASH_POSITION - 16, 16));
    }

    #[test]
    fn test_try_set_position_rejects_negative() {
        let mut reader = create_standard().reader();
        reader.set_position(77);

        assert!(reader.try_set_position(-1i64).is_err());
        assert!(reader.try_set_position(u128::from(u64::MAX) + 1).is_err());
        assert_eq!(reader.position(), 77);

        reader.try_set_position(u128::from(u64::MAX)).unwrap();
        assert!(reader.is_exhausted());
    }

    proptest! {
        #[test]
        fn prop_split_reads_are_contiguous(
            position in 0u64..(1 << 48),
            first in 0usize..600,
            second in 0usize..600,
        ) {
            let engine = engine_with(b"prop");
            let mut split = engine.reader();
            split.set_position(position);
            let mut joined = split.read(first);
            joined.extend(split.read(second));

            prop_assert_eq!(joined, reference(b"prop", position, first + second));
        }

        #[test]
        fn prop_reads_near_ceiling_never_overflow(back in 0u64..3000, len in 0usize..4000) {
            let mut reader = create_standard().reader();
            reader.set_position(MAX_HASH_POSITION - back);
            let out = reader.read(len);

            prop_assert_eq!(out.len() as u64, back.min(len as u64));
            prop_assert!(reader.position() <= MAX_HASH_POSITION);
        }
    }
}
